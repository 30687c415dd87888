pub const J2000_JD: f64 = 2451545.0;

/// Besselian epoch B1875.0 as a Julian Date (the equinox of the IAU
/// constellation boundaries).
pub const B1875_JD: f64 = 2405889.258550475;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

/// Radians per hour of angle (15 degrees).
#[allow(clippy::excessive_precision)]
pub const HOUR_TO_RAD: f64 = 0.2617993877991494365385536;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const MILLIARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-9;

/// Mean obliquity of the ecliptic at J2000.0, IAU 2006 (84381.406 arcsec).
pub const J2000_OBLIQUITY_RAD: f64 = 84381.406 * ARCSEC_TO_RAD;
