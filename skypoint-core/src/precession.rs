//! IAU 1976 (Lieske) equatorial precession.
//!
//! The constellation boundaries are defined on the mean equator and equinox
//! of B1875.0; this is the precession model they were drawn with. The three
//! Euler angles `ζ`, `z`, `θ` carry a position from the mean equator of one
//! epoch to another:
//!
//! ```text
//! P = Rz(-z) · Ry(θ) · Rz(-ζ)
//! ```
//!
//! Epochs are TT Julian Dates. The model is accurate to well under an
//! arcsecond over the few centuries separating B1875 and J2000.
//!
//! ```
//! use skypoint_core::constants::{B1875_JD, J2000_JD};
//! use skypoint_core::precession::Precession76;
//!
//! let p = Precession76::between(J2000_JD, B1875_JD);
//! assert!(p.matrix().is_rotation_matrix(1e-14));
//! ```

use crate::constants::{ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, J2000_JD};
use crate::RotationMatrix3;

/// Precession angles in radians between two epochs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precession76 {
    pub zeta: f64,
    pub z: f64,
    pub theta: f64,
}

impl Precession76 {
    /// Angles carrying coordinates from the mean equator of `from_jd` to
    /// that of `to_jd`.
    pub fn between(from_jd: f64, to_jd: f64) -> Self {
        let t0 = (from_jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
        let t = (to_jd - from_jd) / DAYS_PER_JULIAN_CENTURY;
        let tas2r = t * ARCSEC_TO_RAD;

        let w = 2306.2181 + (1.39656 - 0.000139 * t0) * t0;

        let zeta = (w + ((0.30188 - 0.000344 * t0) + 0.017998 * t) * t) * tas2r;
        let z = (w + ((1.09468 + 0.000066 * t0) + 0.018203 * t) * t) * tas2r;
        let theta = ((2004.3109 + (-0.85330 - 0.000217 * t0) * t0)
            + ((-0.42665 - 0.000217 * t0) - 0.041833 * t) * t)
            * tas2r;

        Self { zeta, z, theta }
    }

    pub fn matrix(&self) -> RotationMatrix3 {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(-self.zeta);
        m.rotate_y(self.theta);
        m.rotate_z(-self.z);
        m
    }
}

/// Shorthand for `Precession76::between(from_jd, to_jd).matrix()`.
pub fn precession_matrix(from_jd: f64, to_jd: f64) -> RotationMatrix3 {
    Precession76::between(from_jd, to_jd).matrix()
}
