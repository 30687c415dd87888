use super::{Frame, FrameData};
use crate::constants::ICRS_TO_GALACTIC;
use crate::units::{AngleUnit, Degree};
use skypoint_core::{Angle, RotationMatrix3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// IAU 1958 Galactic coordinates.
///
/// Latitude is `b`, longitude is `l`. The origin points at the Galactic
/// centre and the pole at the north Galactic pole.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Galactic<U: AngleUnit = Degree> {
    data: FrameData<U>,
}

impl<U: AngleUnit> Frame for Galactic<U> {
    type Unit = U;
    const NAME: &'static str = "Galactic";

    fn from_frame_data(data: FrameData<U>) -> Self {
        Self { data }
    }

    fn frame_data(&self) -> &FrameData<U> {
        &self.data
    }

    fn to_icrs_matrix() -> RotationMatrix3 {
        RotationMatrix3::from_array(ICRS_TO_GALACTIC).transpose()
    }
}

impl Galactic<Degree> {
    pub fn from_degrees(l_deg: f64, b_deg: f64) -> Self {
        Self::new(b_deg, l_deg, 1.0)
    }
}

impl<U: AngleUnit> Galactic<U> {
    pub fn l(&self) -> Angle {
        self.data.position().lon()
    }

    pub fn b(&self) -> Angle {
        self.data.position().lat()
    }
}

impl<U: AngleUnit> fmt::Display for Galactic<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Galactic(l={:.6}°, b={:.6}°)",
            self.l().degrees(),
            self.b().degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skypoint_core::Vector3;

    #[test]
    fn test_galactic_centre_direction() {
        let v = Galactic::<Degree>::to_icrs_matrix() * Vector3::x_axis();
        let (ra, dec) = v.to_spherical();

        assert!((ra.to_degrees().rem_euclid(360.0) - 266.404995).abs() < 1e-5);
        assert!((dec.to_degrees() - -28.936174).abs() < 1e-5);
    }

    #[test]
    fn test_north_galactic_pole_direction() {
        let v = Galactic::<Degree>::to_icrs_matrix() * Vector3::z_axis();
        let (ra, dec) = v.to_spherical();

        assert!((ra.to_degrees().rem_euclid(360.0) - 192.859480).abs() < 1e-5);
        assert!((dec.to_degrees() - 27.128250).abs() < 1e-5);
    }

    #[test]
    fn test_accessors() {
        let g = Galactic::from_degrees(120.0, -5.0);
        assert!((g.l().degrees() - 120.0).abs() < 1e-12);
        assert!((g.b().degrees() + 5.0).abs() < 1e-12);
    }
}
