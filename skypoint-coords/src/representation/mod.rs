//! Positional representations.
//!
//! A representation is the storage format of a position: Cartesian
//! `(x, y, z)` or spherical `(lat, lon, distance)`. Every representation
//! converts through Cartesian, which is what lets any of them be handed to a
//! frame constructor.
//!
//! Generic code accepts `R: Representation`; passing a type that is not a
//! representation is rejected at compile time.

mod cartesian;
mod spherical;

pub use cartesian::CartesianRepresentation;
pub use spherical::SphericalRepresentation;

use crate::units::AngleUnit;
use std::fmt;

pub trait Representation: Clone + fmt::Debug + PartialEq {
    fn to_cartesian(&self) -> CartesianRepresentation;

    fn from_cartesian(cartesian: &CartesianRepresentation) -> Self;

    /// This position as a spherical representation in unit `U`.
    ///
    /// The default goes through Cartesian; a zero-length position therefore
    /// comes back at latitude and longitude zero.
    fn to_spherical<U: AngleUnit>(&self) -> SphericalRepresentation<U> {
        SphericalRepresentation::from_cartesian(&self.to_cartesian())
    }
}
