//! Constellation lookup from boundary tables.
//!
//! The IAU constellation boundaries (Delporte 1930) run along lines of
//! constant right ascension and declination of the B1875.0 equator. Roman
//! (1987, PASP 99, 695) tabulated them as zones, one per line:
//!
//! ```text
//! ra_low_hours  ra_high_hours  dec_low_degrees  ABBR
//! ```
//!
//! sorted so that the first zone with `dec >= dec_low` and
//! `ra_low <= ra < ra_high` is the answer. [`BoundaryTable`] reads that
//! format; the table itself is supplied by the caller.
//!
//! ```
//! use skypoint_coords::catalog::{BoundaryTable, ConstellationCatalog};
//! use skypoint_coords::representation::SphericalRepresentation;
//! use skypoint_coords::units::Radian;
//!
//! let table: BoundaryTable = "\
//!     0.0 24.0  88.0 UMi
//!     0.0 24.0 -90.0 Oth
//! ".parse().unwrap();
//!
//! let polaris = SphericalRepresentation::<Radian>::unit_sphere(
//!     89.264109f64.to_radians(),
//!     37.954561f64.to_radians(),
//! );
//! assert_eq!(table.constellation_for(&polaris).unwrap(), "UMi");
//! ```

use crate::representation::SphericalRepresentation;
use crate::units::Radian;
use crate::{CoordError, CoordResult};
use skypoint_core::angle::wrap_0_2pi;
use skypoint_core::constants::{B1875_JD, HOUR_TO_RAD, J2000_JD};
use skypoint_core::precession::precession_matrix;
use skypoint_core::RotationMatrix3;
use std::str::FromStr;

/// Maps an ICRS position to the abbreviation of the constellation holding it.
pub trait ConstellationCatalog {
    /// Fails with [`CoordError::NoCoverage`] when no region contains the
    /// position.
    fn constellation_for(&self, position: &SphericalRepresentation<Radian>) -> CoordResult<String>;
}

impl<T: ConstellationCatalog + ?Sized> ConstellationCatalog for &T {
    fn constellation_for(&self, position: &SphericalRepresentation<Radian>) -> CoordResult<String> {
        (**self).constellation_for(position)
    }
}

/// One RA/Dec box of a boundary table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryZone {
    pub ra_low_hours: f64,
    pub ra_high_hours: f64,
    pub dec_low_deg: f64,
    pub abbreviation: String,
}

impl BoundaryZone {
    pub fn new(
        ra_low_hours: f64,
        ra_high_hours: f64,
        dec_low_deg: f64,
        abbreviation: &str,
    ) -> Self {
        Self {
            ra_low_hours,
            ra_high_hours,
            dec_low_deg,
            abbreviation: abbreviation.to_string(),
        }
    }

    #[inline]
    pub fn contains(&self, ra_hours: f64, dec_deg: f64) -> bool {
        dec_deg >= self.dec_low_deg
            && ra_hours >= self.ra_low_hours
            && ra_hours < self.ra_high_hours
    }
}

/// Ordered list of boundary zones drawn on the mean equator of one epoch.
#[derive(Debug, Clone)]
pub struct BoundaryTable {
    zones: Vec<BoundaryZone>,
    equinox_jd: f64,
    precession: RotationMatrix3,
}

impl BoundaryTable {
    /// Zones on the B1875.0 equator, the epoch of the IAU boundaries.
    pub fn new(zones: Vec<BoundaryZone>) -> Self {
        Self::with_equinox(zones, B1875_JD)
    }

    /// Zones drawn on the mean equator of `equinox_jd` (TT Julian Date).
    pub fn with_equinox(zones: Vec<BoundaryZone>, equinox_jd: f64) -> Self {
        Self {
            zones,
            equinox_jd,
            precession: precession_matrix(J2000_JD, equinox_jd),
        }
    }

    /// Reads the whitespace-separated zone format. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn parse(text: &str) -> CoordResult<Self> {
        let mut zones = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            zones.push(parse_zone(line, index + 1)?);
        }

        log::debug!("parsed {} constellation boundary zones", zones.len());
        Ok(Self::new(zones))
    }

    pub fn zones(&self) -> &[BoundaryZone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn equinox_jd(&self) -> f64 {
        self.equinox_jd
    }

    /// First zone containing `(ra_hours, dec_deg)`, already on the table's
    /// equinox.
    pub fn lookup(&self, ra_hours: f64, dec_deg: f64) -> Option<&str> {
        self.zones
            .iter()
            .find(|zone| zone.contains(ra_hours, dec_deg))
            .map(|zone| zone.abbreviation.as_str())
    }

    /// Precesses an ICRS position onto the table's equinox. Returns right
    /// ascension in hours `[0, 24)` and declination in degrees.
    pub fn to_table_equinox(&self, position: &SphericalRepresentation<Radian>) -> (f64, f64) {
        let v = self.precession * position.unit_vector();
        let (ra, dec) = v.to_spherical();

        let mut ra_hours = wrap_0_2pi(ra) / HOUR_TO_RAD;
        if ra_hours >= 24.0 {
            ra_hours -= 24.0;
        }
        (ra_hours, dec.to_degrees())
    }
}

impl ConstellationCatalog for BoundaryTable {
    fn constellation_for(&self, position: &SphericalRepresentation<Radian>) -> CoordResult<String> {
        let (ra_hours, dec_deg) = self.to_table_equinox(position);
        log::trace!(
            "constellation lookup at RA={:.6}h Dec={:.6}° (equinox JD {})",
            ra_hours,
            dec_deg,
            self.equinox_jd
        );

        self.lookup(ra_hours, dec_deg)
            .map(str::to_string)
            .ok_or_else(|| {
                CoordError::no_coverage(format!(
                    "no boundary zone contains RA={:.6}h Dec={:.6}°",
                    ra_hours, dec_deg
                ))
            })
    }
}

impl FromStr for BoundaryTable {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_zone(line: &str, line_number: usize) -> CoordResult<BoundaryZone> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(CoordError::parsing_error(format!(
            "line {}: expected 4 fields, found {}",
            line_number,
            fields.len()
        )));
    }

    let number = |field: &str, what: &str| -> CoordResult<f64> {
        field
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                CoordError::parsing_error(format!(
                    "line {}: invalid {} '{}'",
                    line_number, what, field
                ))
            })
    };

    let ra_low = number(fields[0], "lower RA")?;
    let ra_high = number(fields[1], "upper RA")?;
    let dec_low = number(fields[2], "lower Dec")?;

    if !(0.0..=24.0).contains(&ra_low) || !(0.0..=24.0).contains(&ra_high) || ra_low >= ra_high {
        return Err(CoordError::parsing_error(format!(
            "line {}: RA range {}h..{}h is not within 0h..24h",
            line_number, ra_low, ra_high
        )));
    }
    if !(-90.0..=90.0).contains(&dec_low) {
        return Err(CoordError::parsing_error(format!(
            "line {}: declination {}° out of range",
            line_number, dec_low
        )));
    }

    Ok(BoundaryZone::new(ra_low, ra_high, dec_low, fields[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOY_TABLE: &str = "
        # ra_low ra_high dec_low abbr
         0.0 24.0  88.0 UMi
         5.0  6.0 -90.0 Ori
         6.0 24.0 -90.0 Mon
         0.0  5.0 -90.0 Psc
    ";

    fn icrs(ra_hours: f64, dec_deg: f64) -> SphericalRepresentation<Radian> {
        SphericalRepresentation::unit_sphere(dec_deg.to_radians(), ra_hours * HOUR_TO_RAD)
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let table = BoundaryTable::parse(TOY_TABLE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.zones()[1], BoundaryZone::new(5.0, 6.0, -90.0, "Ori"));
        assert_eq!(table.equinox_jd(), B1875_JD);
    }

    #[test]
    fn test_first_matching_zone_wins() {
        let table = BoundaryTable::parse(TOY_TABLE).unwrap();
        assert_eq!(table.lookup(5.5, 89.0), Some("UMi"));
        assert_eq!(table.lookup(5.5, 10.0), Some("Ori"));
    }

    #[test]
    fn test_upper_ra_bound_is_exclusive() {
        let table = BoundaryTable::parse(TOY_TABLE).unwrap();
        assert_eq!(table.lookup(6.0, 0.0), Some("Mon"));
        assert_eq!(table.lookup(5.0, 0.0), Some("Ori"));
    }

    #[test]
    fn test_precession_moves_point_across_boundary() {
        let table = BoundaryTable::parse(TOY_TABLE).unwrap();

        // J2000 RA 6.02h falls at 5.913h on the B1875 equator.
        let p = icrs(6.02, 0.0);
        let (ra, dec) = table.to_table_equinox(&p);
        assert!((ra - 5.913273).abs() < 1e-5);
        assert!((dec - -0.006082).abs() < 1e-5);
        assert_eq!(table.constellation_for(&p).unwrap(), "Ori");
    }

    #[test]
    fn test_j2000_table_skips_precession() {
        let zones = BoundaryTable::parse(TOY_TABLE).unwrap().zones().to_vec();
        let table = BoundaryTable::with_equinox(zones, J2000_JD);
        assert_eq!(table.constellation_for(&icrs(6.02, 0.0)).unwrap(), "Mon");
    }

    #[test]
    fn test_polaris_near_the_pole() {
        let table = BoundaryTable::parse(TOY_TABLE).unwrap();
        let polaris = icrs(2.5303, 89.2641);
        let (_, dec) = table.to_table_equinox(&polaris);

        assert!((dec - 88.64256).abs() < 1e-4);
        assert_eq!(table.constellation_for(&polaris).unwrap(), "UMi");
    }

    #[test]
    fn test_uncovered_position() {
        let table = BoundaryTable::parse("0.0 12.0 0.0 Aaa").unwrap();
        match table.constellation_for(&icrs(3.0, -30.0)) {
            Err(CoordError::NoCoverage { message }) => assert!(message.contains("RA=")),
            other => panic!("expected NoCoverage, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_covers_nothing() {
        let table = BoundaryTable::new(Vec::new());
        assert!(table.is_empty());
        assert!(table.constellation_for(&icrs(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = BoundaryTable::parse("0 24 88 UMi\n0 24 x Oth").unwrap_err();
        assert!(err.to_string().contains("line 2"));

        assert!(BoundaryTable::parse("0 24 88").is_err());
        assert!(BoundaryTable::parse("6 5 0 Bad").is_err());
        assert!(BoundaryTable::parse("0 25 0 Bad").is_err());
        assert!(BoundaryTable::parse("0 24 91 Bad").is_err());
        assert!(BoundaryTable::parse("0 24 NaN Bad").is_err());
    }

    #[test]
    fn test_from_str() {
        let table: BoundaryTable = "0 24 -90 Oth".parse().unwrap();
        assert_eq!(table.lookup(12.0, 45.0), Some("Oth"));
    }
}
