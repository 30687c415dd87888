//! The [`Angle`] type.
//!
//! Angles are stored as radians and converted at construction and access
//! time. Sky coordinates mix degrees (latitude/longitude), hours (right
//! ascension) and milliarcseconds (proper motion); `Angle` keeps the unit out
//! of the arithmetic.
//!
//! ```
//! use skypoint_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-12);
//!
//! let pm = Angle::from_milliarcseconds(1000.0);
//! assert!((pm.degrees() * 3600.0 - 1.0).abs() < 1e-12);
//!
//! let (sin, cos) = Angle::from_degrees(30.0).sin_cos();
//! assert!((sin - 0.5).abs() < 1e-12);
//! # let _ = cos;
//! ```

use crate::constants::{HALF_PI, HOUR_TO_RAD, MILLIARCSEC_TO_RAD, PI};

/// An angular measurement stored as radians.
///
/// `PartialEq`/`PartialOrd` compare the radian values; `Eq`/`Ord` are absent
/// because the value may be NaN.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    pub const PI: Self = Self { rad: PI };

    pub const HALF_PI: Self = Self { rad: HALF_PI };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Hours of angle, 24h = 360°.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: h * HOUR_TO_RAD,
        }
    }

    /// Frame offsets and proper motions are usually quoted in mas.
    #[inline]
    pub fn from_milliarcseconds(mas: f64) -> Self {
        Self {
            rad: mas * MILLIARCSEC_TO_RAD,
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.rad / HOUR_TO_RAD
    }

    #[inline]
    pub fn milliarcseconds(self) -> f64 {
        self.rad / MILLIARCSEC_TO_RAD
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    /// Returns `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Wraps to [-π, +π).
    ///
    /// ```
    /// use skypoint_core::Angle;
    ///
    /// let wrapped = Angle::from_degrees(270.0).wrapped();
    /// assert!((wrapped.degrees() + 90.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn wrapped(self) -> Self {
        Self {
            rad: super::normalize::wrap_pm_pi(self.rad),
        }
    }

    /// Wraps to [0, 2π).
    ///
    /// ```
    /// use skypoint_core::Angle;
    ///
    /// let normalized = Angle::from_degrees(-90.0).normalized();
    /// assert!((normalized.degrees() - 270.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: super::normalize::wrap_0_2pi(self.rad),
        }
    }

    /// Finite and, unless `normalize` wraps it into [0, 2π), within [-π, +π].
    #[inline]
    pub fn validate_longitude(self, normalize: bool) -> crate::AstroResult<Self> {
        super::validate::validate_longitude(self, normalize)
    }

    /// Finite and within [-π/2, +π/2].
    #[inline]
    pub fn validate_latitude(self) -> crate::AstroResult<Self> {
        super::validate::validate_latitude(self)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_round_trips() {
        let a = Angle::from_degrees(123.456);
        assert!((a.degrees() - 123.456).abs() < 1e-12);
        assert!((Angle::from_hours(a.hours()).radians() - a.radians()).abs() < 1e-15);
        assert!(
            (Angle::from_milliarcseconds(a.milliarcseconds()).radians() - a.radians()).abs()
                < 1e-14
        );
    }

    #[test]
    fn test_hours_and_degrees_agree() {
        assert!((Angle::from_hours(1.0).degrees() - 15.0).abs() < 1e-12);
        assert!((Angle::from_hours(24.0).radians() - 2.0 * PI).abs() < 1e-15);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Angle::ZERO.radians(), 0.0);
        assert!((Angle::PI.degrees() - 180.0).abs() < 1e-12);
        assert!((Angle::HALF_PI.degrees() - 90.0).abs() < 1e-12);
        assert_eq!(Angle::default(), Angle::ZERO);
    }

    #[test]
    fn test_milliarcseconds() {
        let a = Angle::from_milliarcseconds(3_600_000.0);
        assert!((a.degrees() - 1.0).abs() < 1e-12);
        assert!((Angle::from_degrees(1.0).milliarcseconds() - 3_600_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.2}", Angle::from_degrees(45.0)), "45.00°");
        assert_eq!(format!("{}", Angle::ZERO), "0°");
    }

    #[test]
    fn test_wrapping() {
        assert!((Angle::from_degrees(450.0).normalized().degrees() - 90.0).abs() < 1e-10);
        assert!((Angle::from_degrees(-270.0).wrapped().degrees() - 90.0).abs() < 1e-10);
    }
}
