//! Angle wrapping.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Longitude, right ascension | [0, 2π) | [`wrap_0_2pi`] |
//! | Longitude differences, position angles | [-π, +π) | [`wrap_pm_pi`] |
//!
//! Wrapping keeps the direction on the sphere (370° is 10°).
//!
//! `fmod` is used instead of `%` so the reduction is well defined for
//! negative inputs before the sign is fixed up.

use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps to [-π, +π).
///
/// ```
/// use skypoint_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// assert!((wrap_pm_pi(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w >= PI {
        w - TWOPI
    } else if w < -PI {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps to [0, 2π).
///
/// ```
/// use skypoint_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// assert!((wrap_0_2pi(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        let shifted = w + TWOPI;
        // -1e-17 + 2π rounds to 2π
        if shifted >= TWOPI {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}
