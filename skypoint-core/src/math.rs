//! Spherical trigonometry on the unit sphere.
//!
//! All functions take radians. Latitude-like arguments are measured from the
//! equator, longitude-like arguments eastward from the origin meridian.

use crate::constants::PI;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Great-circle distance from precomputed latitude sines and cosines.
///
/// This is the Vincenty special case of the great-circle formula. It agrees
/// with the haversine form everywhere and stays well conditioned for both
/// tiny and near-antipodal separations.
#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}

/// Great-circle distance between `(lon1, lat1)` and `(lon2, lat2)`.
///
/// ```
/// use skypoint_core::math::angular_separation;
/// use std::f64::consts::FRAC_PI_2;
///
/// let sep = angular_separation(0.0, 0.0, FRAC_PI_2, 0.0);
/// assert!((sep - FRAC_PI_2).abs() < 1e-15);
/// ```
#[inline]
pub fn angular_separation(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (sin_lat1, cos_lat1) = libm::sincos(lat1);
    let (sin_lat2, cos_lat2) = libm::sincos(lat2);
    vincenty_angular_separation(sin_lat1, cos_lat1, sin_lat2, cos_lat2, lon2 - lon1)
}

/// Position angle of point 2 as seen from point 1.
///
/// Measured from the direction of increasing latitude (north) through
/// increasing longitude (east), returned in `(-π, π]`:
///
/// - `north = sin(lat2)·cos(lat1) − cos(lat2)·sin(lat1)·cos(Δlon)`
/// - `east = sin(Δlon)·cos(lat2)`
/// - `pa = atan2(east, north)`
///
/// No input validation is done. At a pole every direction is south (or
/// north), so the result there is set by the longitude difference alone:
/// from the north pole `Δlon = 0` gives exactly `π`.
///
/// ```
/// use skypoint_core::math::position_angle;
/// use std::f64::consts::{FRAC_PI_2, PI};
///
/// // Due east along the equator.
/// assert!((position_angle(0.0, 0.0, FRAC_PI_2, 0.0) - FRAC_PI_2).abs() < 1e-15);
///
/// // From the north pole, straight down the origin meridian.
/// assert_eq!(position_angle(0.0, FRAC_PI_2, 0.0, 0.0), PI);
/// ```
#[inline]
pub fn position_angle(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let delta_lon = lon2 - lon1;
    let (sin_lat1, cos_lat1) = libm::sincos(lat1);
    let (sin_lat2, cos_lat2) = libm::sincos(lat2);
    let (sin_dlon, cos_dlon) = libm::sincos(delta_lon);

    let north = sin_lat2 * cos_lat1 - cos_lat2 * sin_lat1 * cos_dlon;
    let east = sin_dlon * cos_lat2;

    // atan2(-0.0, negative) is -π; the range is half-open at -π.
    let pa = libm::atan2(east, north);
    if pa == -PI {
        PI
    } else {
        pa
    }
}

/// Moves `separation` along the great circle leaving `(lon, lat)` at
/// `position_angle` (north through east). Returns `(lon, lat)` of the
/// destination; the longitude is not wrapped.
///
/// This is the inverse of [`angular_separation`] and [`position_angle`].
#[inline]
pub fn offset_by(lon: f64, lat: f64, position_angle: f64, separation: f64) -> (f64, f64) {
    let (sin_lat, cos_lat) = libm::sincos(lat);
    let (sin_sep, cos_sep) = libm::sincos(separation);
    let (sin_pa, cos_pa) = libm::sincos(position_angle);

    let sin_lat2 = sin_lat * cos_sep + cos_lat * sin_sep * cos_pa;
    let lat2 = libm::asin(sin_lat2.clamp(-1.0, 1.0));

    let y = sin_pa * sin_sep * cos_lat;
    let x = cos_sep - sin_lat * sin_lat2;
    let lon2 = lon + libm::atan2(y, x);

    (lon2, lat2)
}
