//! Object-name resolution.
//!
//! ```
//! use skypoint_coords::catalog::{NameResolver, StaticResolver};
//! use skypoint_coords::frames::Icrs;
//!
//! let mut resolver = StaticResolver::new();
//! resolver.insert("Betelgeuse", Icrs::from_degrees(88.792939, 7.407064));
//! resolver.add_alias("alpha Ori", "Betelgeuse").unwrap();
//!
//! let p = resolver.resolve("  ALPHA   ori ").unwrap();
//! assert!((p.ra().degrees() - 88.792939).abs() < 1e-9);
//! assert!(resolver.resolve("Rigel").is_err());
//! ```

use crate::frames::Icrs;
use crate::{CoordError, CoordResult};
use skypoint_core::Angle;
use std::collections::HashMap;

/// Looks up an astronomical object by name and returns its ICRS position.
pub trait NameResolver {
    /// Fails with [`CoordError::NotFound`] when the name is unknown.
    fn resolve(&self, name: &str) -> CoordResult<Icrs>;
}

impl<T: NameResolver + ?Sized> NameResolver for &T {
    fn resolve(&self, name: &str) -> CoordResult<Icrs> {
        (**self).resolve(name)
    }
}

impl<T: NameResolver + ?Sized> NameResolver for Box<T> {
    fn resolve(&self, name: &str) -> CoordResult<Icrs> {
        (**self).resolve(name)
    }
}

/// Name table held in memory.
///
/// Lookups ignore case and treat any run of whitespace as one space, so
/// `"ngc  224 "` finds `"NGC 224"`. `"NGC224"` is a different name.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, Icrs>,
    aliases: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_entry(mut self, name: &str, position: Icrs) -> Self {
        self.insert(name, position);
        self
    }

    /// Adds or replaces an object, returning the previous position.
    pub fn insert(&mut self, name: &str, position: Icrs) -> Option<Icrs> {
        self.entries.insert(normalize_name(name), position)
    }

    /// Adds an object from right ascension and declination in degrees.
    ///
    /// Both must be finite and the declination within ±90°; the right
    /// ascension is wrapped into `[0°, 360°)`.
    pub fn insert_degrees(&mut self, name: &str, ra_deg: f64, dec_deg: f64) -> CoordResult<()> {
        let ra = Angle::from_degrees(ra_deg).validate_longitude(true)?;
        let dec = Angle::from_degrees(dec_deg).validate_latitude()?;

        self.insert(name, Icrs::from_degrees(ra.degrees(), dec.degrees()));
        Ok(())
    }

    /// Makes `alias` resolve to the object registered as `target`.
    pub fn add_alias(&mut self, alias: &str, target: &str) -> CoordResult<()> {
        let key = normalize_name(target);
        if !self.entries.contains_key(&key) {
            return Err(CoordError::not_found(target));
        }
        self.aliases.insert(normalize_name(alias), key);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized names of all registered objects, aliases excluded.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl NameResolver for StaticResolver {
    fn resolve(&self, name: &str) -> CoordResult<Icrs> {
        let key = normalize_name(name);
        let key = self.aliases.get(&key).unwrap_or(&key);

        match self.entries.get(key) {
            Some(position) => {
                log::debug!("resolved '{}' to {}", name, position);
                Ok(*position)
            }
            None => {
                log::debug!("no object named '{}'", name);
                Err(CoordError::not_found(name))
            }
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::Frame;

    fn sample() -> StaticResolver {
        StaticResolver::new()
            .with_entry("M31", Icrs::from_degrees(10.684708, 41.268750))
            .with_entry("Polaris", Icrs::from_degrees(37.954561, 89.264109))
    }

    #[test]
    fn test_resolve_known_name() {
        let p = sample().resolve("Polaris").unwrap();
        assert_eq!(p.get_data().get_lat(), 89.264109);
    }

    #[test]
    fn test_lookup_ignores_case_and_spacing() {
        let r = sample();
        assert!(r.resolve("m31").is_ok());
        assert!(r.resolve("  POLARIS\t").is_ok());
    }

    #[test]
    fn test_inner_whitespace_is_collapsed() {
        let r = StaticResolver::new().with_entry("NGC 224", Icrs::from_degrees(10.68, 41.27));
        assert!(r.resolve("ngc    224").is_ok());
        assert!(r.resolve("NGC224").is_err());
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        match sample().resolve("Vega") {
            Err(CoordError::NotFound { name }) => assert_eq!(name, "Vega"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_alias_requires_existing_target() {
        let mut r = sample();
        assert!(r.add_alias("Andromeda Galaxy", "M31").is_ok());
        assert!(r.resolve("andromeda galaxy").is_ok());
        assert_eq!(
            r.add_alias("Lyra alpha", "Vega"),
            Err(CoordError::not_found("Vega"))
        );
    }

    #[test]
    fn test_insert_degrees_validates() {
        let mut r = StaticResolver::new();
        assert!(r.insert_degrees("ok", -10.0, 5.0).is_ok());
        assert!((r.resolve("ok").unwrap().ra().degrees() - 350.0).abs() < 1e-12);

        assert!(r.insert_degrees("pole", 0.0, -90.0).is_ok());

        match r.insert_degrees("bad", 0.0, 95.0) {
            Err(CoordError::CoreError { message }) => assert!(message.contains("OutOfRange")),
            other => panic!("expected out-of-range error, got {:?}", other),
        }
        match r.insert_degrees("nan", f64::NAN, 0.0) {
            Err(CoordError::CoreError { message }) => assert!(message.contains("NotFinite")),
            other => panic!("expected non-finite error, got {:?}", other),
        }
        assert!(r.insert_degrees("inf", 0.0, f64::INFINITY).is_err());
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_insert_replaces() {
        let mut r = sample();
        let old = r.insert("m31", Icrs::from_degrees(0.0, 0.0));
        assert!(old.is_some());
        assert_eq!(r.len(), 2);
        assert_eq!(r.names().count(), 2);
    }

    #[test]
    fn test_resolver_through_reference_and_box() {
        let r = sample();
        let by_ref: &dyn NameResolver = &r;
        assert!((&by_ref).resolve("M31").is_ok());

        let boxed: Box<dyn NameResolver> = Box::new(sample());
        assert!(boxed.resolve("M31").is_ok());
    }
}
