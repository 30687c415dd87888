//! Celestial reference frames.
//!
//! A frame is a coordinate system plus the data of one position in it: a
//! [`SphericalRepresentation`] and its motion as a
//! [`SphericalCoslatDifferential`]. Every frame here is a fixed rotation away
//! from ICRS, which is what [`Frame::to_icrs_matrix`] exposes and what
//! [`crate::transforms`] uses to move data between frames.
//!
//! | Frame | Latitude / longitude | Orientation |
//! |-------|----------------------|-------------|
//! | [`Icrs`] | Dec / RA | ICRS axes |
//! | [`Fk5`] | Dec / RA | Mean equator and equinox of J2000.0 |
//! | [`Galactic`] | b / l | IAU 1958 Galactic |
//! | [`Supergalactic`] | SGB / SGL | de Vaucouleurs supergalactic |
//! | [`Ecliptic`] | β / λ | Mean ecliptic and equinox of J2000.0 |
//!
//! Frames are generic over the angle unit of their stored data and default
//! to [`Degree`](crate::units::Degree).

pub mod ecliptic;
pub mod fk5;
pub mod galactic;
pub mod icrs;
pub mod supergalactic;

pub use ecliptic::Ecliptic;
pub use fk5::Fk5;
pub use galactic::Galactic;
pub use icrs::Icrs;
pub use supergalactic::Supergalactic;

use crate::differential::{Differential, SphericalCoslatDifferential};
use crate::representation::{Representation, SphericalRepresentation};
use crate::units::{AngleUnit, Radian};
use skypoint_core::math::angular_separation;
use skypoint_core::RotationMatrix3;
use std::fmt;

/// Position and motion held by every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct FrameData<U: AngleUnit> {
    position: SphericalRepresentation<U>,
    motion: SphericalCoslatDifferential,
}

impl<U: AngleUnit> FrameData<U> {
    pub fn new(position: SphericalRepresentation<U>, motion: SphericalCoslatDifferential) -> Self {
        Self { position, motion }
    }

    pub fn position(&self) -> SphericalRepresentation<U> {
        self.position
    }

    pub fn motion(&self) -> SphericalCoslatDifferential {
        self.motion
    }
}

/// Latitude 0, longitude 0, distance 1, no motion.
impl<U: AngleUnit> Default for FrameData<U> {
    fn default() -> Self {
        Self::new(
            SphericalRepresentation::default(),
            SphericalCoslatDifferential::zero(),
        )
    }
}

/// A celestial coordinate frame holding one position.
///
/// Implementors supply storage and their orientation relative to ICRS; the
/// constructors and queries come with the trait.
///
/// ```
/// use skypoint_coords::frames::{Frame, Galactic};
///
/// let g = Galactic::<skypoint_coords::units::Degree>::new(10.0, 20.0, 1.0);
/// assert_eq!(g.get_data().get_lat(), 10.0);
/// assert_eq!(g.get_data().get_lon(), 20.0);
/// assert!(g.get_differential().is_zero());
/// ```
pub trait Frame: Clone + fmt::Debug + PartialEq + Default + Send + Sync + 'static {
    /// Angle unit of the stored latitude and longitude.
    type Unit: AngleUnit;

    const NAME: &'static str;

    fn from_frame_data(data: FrameData<Self::Unit>) -> Self;

    fn frame_data(&self) -> &FrameData<Self::Unit>;

    /// Rotation taking this frame's Cartesian axes to ICRS:
    /// `v_icrs = M · v_frame`.
    fn to_icrs_matrix() -> RotationMatrix3;

    /// Position in `Self::Unit` with no motion.
    fn new(lat: f64, lon: f64, distance: f64) -> Self {
        Self::from_frame_data(FrameData::new(
            SphericalRepresentation::new(lat, lon, distance),
            SphericalCoslatDifferential::zero(),
        ))
    }

    /// Position plus proper motion `(pm_lat, pm_lon·cos(lat))` and radial
    /// velocity.
    fn with_motion(
        lat: f64,
        lon: f64,
        distance: f64,
        pm_lat: f64,
        pm_lon_coslat: f64,
        radial_velocity: f64,
    ) -> Self {
        Self::from_frame_data(FrameData::new(
            SphericalRepresentation::new(lat, lon, distance),
            SphericalCoslatDifferential::new(pm_lat, pm_lon_coslat, radial_velocity),
        ))
    }

    /// Builds the frame from any representation and differential, converting
    /// both to the frame's storage form.
    fn from_parts<R, D>(representation: &R, differential: &D) -> Self
    where
        R: Representation,
        D: Differential,
    {
        let position = representation.to_spherical::<Self::Unit>();
        let motion = differential.to_coslat(&position.with_unit::<Radian>());
        Self::from_frame_data(FrameData::new(position, motion))
    }

    /// Builds the frame from a representation with no motion.
    fn from_representation<R: Representation>(representation: &R) -> Self {
        Self::from_frame_data(FrameData::new(
            representation.to_spherical::<Self::Unit>(),
            SphericalCoslatDifferential::zero(),
        ))
    }

    fn get_data(&self) -> SphericalRepresentation<Self::Unit> {
        self.frame_data().position()
    }

    fn get_differential(&self) -> SphericalCoslatDifferential {
        self.frame_data().motion()
    }

    /// Great-circle distance to `other` in radians, in `[0, π]`.
    fn separation(&self, other: &Self) -> f64 {
        let a = self.get_data().with_unit::<Radian>();
        let b = other.get_data().with_unit::<Radian>();
        angular_separation(a.get_lon(), a.get_lat(), b.get_lon(), b.get_lat())
    }
}
