//! A point on the celestial sphere in a selectable frame.
//!
//! [`SkyPoint<F>`] owns one frame value and adds what astronomers ask of a
//! pair of positions: their separation, the position angle from one to the
//! other, conversion to another frame, and catalog lookups.
//!
//! ```
//! use skypoint_coords::frames::{Galactic, Icrs};
//! use skypoint_coords::SkyPoint;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let a = SkyPoint::<Icrs>::from_lat_lon(0.0, 0.0);
//! let b = SkyPoint::<Icrs>::from_lat_lon(0.0, 90.0);
//! assert!((a.separation(&b) - FRAC_PI_2).abs() < 1e-15);
//! assert!((a.positional_angle(&b) - FRAC_PI_2).abs() < 1e-15);
//!
//! let g: SkyPoint<Galactic> = a.transform_to();
//! assert!(!a.is_equivalent_system(&g));
//! ```
//!
//! The frame parameter must implement [`Frame`]; anything else is rejected at
//! compile time:
//!
//! ```compile_fail
//! use skypoint_coords::SkyPoint;
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct NotAFrame;
//!
//! let p: SkyPoint<NotAFrame> = SkyPoint::default();
//! ```
//!
//! The same holds for representation and differential arguments:
//!
//! ```compile_fail
//! use skypoint_coords::differential::SphericalCoslatDifferential;
//! use skypoint_coords::frames::Icrs;
//! use skypoint_coords::SkyPoint;
//!
//! let motion = SphericalCoslatDifferential::zero();
//! let p = SkyPoint::<Icrs>::from_parts(&(1.0, 2.0, 3.0), &motion);
//! ```

use crate::catalog::{ConstellationCatalog, NameResolver};
use crate::differential::Differential;
use crate::frames::{Frame, FrameData, Icrs};
use crate::representation::{Representation, SphericalRepresentation};
use crate::transforms::convert_frame;
use crate::units::{AngleUnit, Radian};
use crate::CoordResult;
use skypoint_core::angle::wrap_0_2pi;
use skypoint_core::{math, Angle};
use std::any::TypeId;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sky position owning one frame value.
///
/// Plain value type: clones are independent and `set_point` needs `&mut`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyPoint<F: Frame> {
    point: F,
}

impl<F: Frame> SkyPoint<F> {
    pub fn new(point: F) -> Self {
        Self { point }
    }

    pub fn from_parts<R, D>(representation: &R, differential: &D) -> Self
    where
        R: Representation,
        D: Differential,
    {
        Self::new(F::from_parts(representation, differential))
    }

    /// Position plus motion in the frame's own units. Values are stored as
    /// given; no range checks are made.
    pub fn with_motion(
        lat: f64,
        lon: f64,
        distance: f64,
        pm_lat: f64,
        pm_lon_coslat: f64,
        radial_velocity: f64,
    ) -> Self {
        Self::new(F::with_motion(
            lat,
            lon,
            distance,
            pm_lat,
            pm_lon_coslat,
            radial_velocity,
        ))
    }

    /// Direction on the unit sphere with no motion.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self::from_lat_lon_distance(lat, lon, 1.0)
    }

    pub fn from_lat_lon_distance(lat: f64, lon: f64, distance: f64) -> Self {
        Self::new(F::new(lat, lon, distance))
    }

    /// Looks `name` up with `resolver` and converts the ICRS answer to `F`.
    ///
    /// ```
    /// use skypoint_coords::catalog::StaticResolver;
    /// use skypoint_coords::frames::{Galactic, Icrs};
    /// use skypoint_coords::{CoordError, SkyPoint};
    ///
    /// let resolver = StaticResolver::new()
    ///     .with_entry("Sgr A*", Icrs::from_degrees(266.41683, -29.00781));
    /// let sgr: SkyPoint<Galactic> = SkyPoint::from_name("sgr a*", &resolver).unwrap();
    /// assert!(sgr.point().l().degrees() < 0.1 || sgr.point().l().degrees() > 359.9);
    ///
    /// let missing = SkyPoint::<Icrs>::from_name("Vulcan", &resolver);
    /// assert!(matches!(missing, Err(CoordError::NotFound { .. })));
    /// ```
    pub fn from_name<N: NameResolver + ?Sized>(name: &str, resolver: &N) -> CoordResult<Self> {
        let icrs = resolver.resolve(name)?;
        Ok(Self::new(convert_frame::<Icrs, F>(&icrs)))
    }

    /// Converts a point from any frame into `F`.
    pub fn from_sky_point<G: Frame>(other: &SkyPoint<G>) -> Self {
        Self::new(convert_frame::<G, F>(&other.point))
    }

    /// Copy of the owned frame.
    pub fn get_point(&self) -> F {
        self.point.clone()
    }

    pub fn point(&self) -> &F {
        &self.point
    }

    pub fn set_point(&mut self, point: F) {
        self.point = point;
    }

    pub fn into_point(self) -> F {
        self.point
    }

    /// Latitude of the point as an [`Angle`].
    pub fn lat(&self) -> Angle {
        self.point.get_data().lat()
    }

    /// Longitude of the point as an [`Angle`].
    pub fn lon(&self) -> Angle {
        self.point.get_data().lon()
    }

    /// Radial distance, 1 for a bare direction.
    pub fn distance(&self) -> f64 {
        self.point.get_data().get_distance()
    }

    /// Name of the frame, e.g. `"ICRS"`.
    pub fn frame_name(&self) -> &'static str {
        F::NAME
    }

    /// Unit the frame stores its angles in, e.g. `"degree"`.
    pub fn unit_name(&self) -> &'static str {
        <F::Unit as AngleUnit>::NAME
    }

    /// Great-circle distance to `other` in radians, `[0, π]`.
    pub fn separation(&self, other: &Self) -> f64 {
        self.point.separation(&other.point)
    }

    pub fn separation_angle(&self, other: &Self) -> Angle {
        Angle::from_radians(self.separation(other))
    }

    /// Position angle of `other` seen from `self`, in radians `(-π, π]`.
    ///
    /// Measured from the direction of increasing latitude (north) toward
    /// increasing longitude (east). Both positions are taken in radians
    /// whatever unit the frame stores. Looking from a pole every direction
    /// is south (north), and the angle is set by the longitude difference
    /// alone: from the north pole to a point on the same meridian it is `π`.
    pub fn positional_angle(&self, other: &Self) -> f64 {
        let p1 = self.point.get_data().to_spherical::<Radian>();
        let p2 = other.point.get_data().to_spherical::<Radian>();
        math::position_angle(p1.get_lon(), p1.get_lat(), p2.get_lon(), p2.get_lat())
    }

    /// The point reached by travelling `separation` along the great circle
    /// leaving this one at `position_angle`.
    ///
    /// Distance and motion are copied unchanged; the longitude is wrapped
    /// into `[0, 2π)`.
    pub fn offset_by(&self, position_angle: Angle, separation: Angle) -> Self {
        let here = self.point.get_data().to_spherical::<Radian>();
        let (lon, lat) = math::offset_by(
            here.get_lon(),
            here.get_lat(),
            position_angle.radians(),
            separation.radians(),
        );

        let there = SphericalRepresentation::<Radian>::new(
            lat,
            wrap_0_2pi(lon),
            here.get_distance(),
        );
        Self::new(F::from_frame_data(FrameData::new(
            there.with_unit::<F::Unit>(),
            self.point.get_differential(),
        )))
    }

    /// True only when `G` is exactly `F`. Frames that differ in name or in
    /// angle unit are different systems.
    pub fn is_equivalent_system<G: Frame>(&self, _other: &SkyPoint<G>) -> bool {
        TypeId::of::<F>() == TypeId::of::<G>()
    }

    /// This point expressed in frame `G`. Converting to `F` itself returns an
    /// identical copy.
    pub fn transform_to<G: Frame>(&self) -> SkyPoint<G> {
        SkyPoint::from_sky_point(self)
    }

    /// Abbreviation of the constellation containing this point, from
    /// `catalog`.
    pub fn get_constellation<C>(&self, catalog: &C) -> CoordResult<String>
    where
        C: ConstellationCatalog + ?Sized,
    {
        let icrs = convert_frame::<F, Icrs<Radian>>(&self.point);
        catalog.constellation_for(&icrs.get_data())
    }
}

impl<F: Frame, G: Frame> From<&SkyPoint<G>> for SkyPoint<F> {
    fn from(other: &SkyPoint<G>) -> Self {
        Self::from_sky_point(other)
    }
}

impl<F: Frame + fmt::Display> fmt::Display for SkyPoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.point, f)
    }
}
