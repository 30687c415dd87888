//! Velocity representations.
//!
//! A differential describes how a position changes with time. Frames store
//! motion as a [`SphericalCoslatDifferential`] (latitude rate, longitude rate
//! scaled by `cos(lat)`, radial rate), the form proper motions are published
//! in. Other differentials convert to and from it at a given position.
//!
//! Angular rates in the spherical forms are plain numbers in whatever unit
//! the caller chose (mas/yr is customary). Conversions to and from
//! [`CartesianDifferential`] interpret them as radians per time unit.

mod cartesian;
mod spherical;

pub use cartesian::CartesianDifferential;
pub use spherical::{SphericalCoslatDifferential, SphericalDifferential};

use crate::representation::SphericalRepresentation;
use crate::units::Radian;
use std::fmt;

pub trait Differential: Clone + fmt::Debug + PartialEq {
    /// This motion in cos-lat form at `position`.
    fn to_coslat(&self, position: &SphericalRepresentation<Radian>) -> SphericalCoslatDifferential;

    fn from_coslat(
        motion: &SphericalCoslatDifferential,
        position: &SphericalRepresentation<Radian>,
    ) -> Self;
}
