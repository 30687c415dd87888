use super::{Frame, FrameData};
use crate::units::{AngleUnit, Degree, Hour};
use skypoint_core::{Angle, RotationMatrix3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// International Celestial Reference System.
///
/// Latitude is declination and longitude is right ascension.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Icrs<U: AngleUnit = Degree> {
    data: FrameData<U>,
}

impl<U: AngleUnit> Frame for Icrs<U> {
    type Unit = U;
    const NAME: &'static str = "ICRS";

    fn from_frame_data(data: FrameData<U>) -> Self {
        Self { data }
    }

    fn frame_data(&self) -> &FrameData<U> {
        &self.data
    }

    fn to_icrs_matrix() -> RotationMatrix3 {
        RotationMatrix3::identity()
    }
}

impl Icrs<Degree> {
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(dec_deg, ra_deg, 1.0)
    }

    /// Right ascension in hours, declination in degrees.
    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> Self {
        Self::new(dec_deg, Hour::convert::<Degree>(ra_hours), 1.0)
    }
}

impl<U: AngleUnit> Icrs<U> {
    pub fn ra(&self) -> Angle {
        self.data.position().lon()
    }

    pub fn dec(&self) -> Angle {
        self.data.position().lat()
    }

    pub fn distance(&self) -> f64 {
        self.data.position().get_distance()
    }
}

impl<U: AngleUnit> fmt::Display for Icrs<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ICRS(RA={:.6}°, Dec={:.6}°)",
            self.ra().degrees(),
            self.dec().degrees()
        )
    }
}
