//! Spherical-geometry building blocks for sky coordinates.
//!
//! `skypoint-core` holds the frame-independent math that sky points are built
//! on: a typed [`Angle`], 3-vectors and rotation matrices, the spherical
//! trigonometry for separations and position angles, and the IAU 1976
//! precession used to reach the B1875 epoch of the constellation boundaries.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, normalization, validation |
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`] |
//! | [`math`] | Great-circle separation, position angle, directional offset |
//! | [`precession`] | IAU 1976 equatorial precession between epochs |
//! | [`constants`] | Unit conversions, J2000/B1875 epochs, obliquity |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Re-exports
//!
//! ```
//! use skypoint_core::{Angle, Vector3, RotationMatrix3};
//! use skypoint_core::{AstroError, AstroResult, MathErrorKind};
//! ```
//!
//! # Conventions
//!
//! - **Radians internally**: every function here takes and returns radians.
//!   [`Angle`] converts at the edges.
//! - **Latitude/longitude order**: spherical helpers take `(lon, lat)` pairs the
//!   way [`Vector3::from_spherical`] does, with longitude measured from +X
//!   toward +Y and latitude from the XY plane.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod precession;

pub use angle::Angle;
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use matrix::{RotationMatrix3, Vector3};

pub mod test_helpers;
