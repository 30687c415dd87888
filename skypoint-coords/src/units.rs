//! Angle units for stored coordinates.
//!
//! Representations and frames carry their angles as plain `f64` in a unit
//! chosen by a zero-sized type parameter. The unit is part of the type, so an
//! `Icrs<Degree>` and an `Icrs<Radian>` are distinct frame types even though
//! they describe the same system.
//!
//! ```
//! use skypoint_coords::units::{AngleUnit, Degree, Hour, Radian};
//!
//! assert_eq!(Radian::convert::<Radian>(0.25), 0.25);
//! assert!((Hour::convert::<Degree>(6.0) - 90.0).abs() < 1e-12);
//! ```

use skypoint_core::constants::{DEG_TO_RAD, HOUR_TO_RAD};
use std::any::TypeId;
use std::fmt;

pub trait AngleUnit:
    Copy + Clone + fmt::Debug + Default + PartialEq + Send + Sync + 'static
{
    const NAME: &'static str;
    const SYMBOL: &'static str;
    const RADIANS_PER_UNIT: f64;

    #[inline]
    fn to_radians(value: f64) -> f64 {
        value * Self::RADIANS_PER_UNIT
    }

    #[inline]
    fn from_radians(radians: f64) -> f64 {
        radians / Self::RADIANS_PER_UNIT
    }

    /// Re-expresses `value` in unit `V`. Converting to the same unit returns
    /// the value untouched.
    #[inline]
    fn convert<V: AngleUnit>(value: f64) -> f64 {
        if TypeId::of::<Self>() == TypeId::of::<V>() {
            value
        } else {
            V::from_radians(Self::to_radians(value))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Radian;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Degree;

/// Hours of angle (24h = 360°), the customary unit of right ascension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hour;

impl AngleUnit for Radian {
    const NAME: &'static str = "radian";
    const SYMBOL: &'static str = "rad";
    const RADIANS_PER_UNIT: f64 = 1.0;

    #[inline]
    fn to_radians(value: f64) -> f64 {
        value
    }

    #[inline]
    fn from_radians(radians: f64) -> f64 {
        radians
    }
}

impl AngleUnit for Degree {
    const NAME: &'static str = "degree";
    const SYMBOL: &'static str = "°";
    const RADIANS_PER_UNIT: f64 = DEG_TO_RAD;

    #[inline]
    fn to_radians(value: f64) -> f64 {
        value.to_radians()
    }

    #[inline]
    fn from_radians(radians: f64) -> f64 {
        radians.to_degrees()
    }
}

impl AngleUnit for Hour {
    const NAME: &'static str = "hour";
    const SYMBOL: &'static str = "h";
    const RADIANS_PER_UNIT: f64 = HOUR_TO_RAD;
}
