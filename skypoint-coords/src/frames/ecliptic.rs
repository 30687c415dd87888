use super::{Frame, FrameData};
use crate::units::{AngleUnit, Degree};
use skypoint_core::constants::J2000_OBLIQUITY_RAD;
use skypoint_core::{Angle, RotationMatrix3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean ecliptic and equinox of J2000.0.
///
/// Latitude is β, longitude is λ. The frame is the ICRS equator tilted by
/// the IAU 2006 J2000 obliquity about the equinox direction; the ~23 mas
/// frame bias between ICRS and the J2000 mean equator is neglected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Ecliptic<U: AngleUnit = Degree> {
    data: FrameData<U>,
}

impl<U: AngleUnit> Frame for Ecliptic<U> {
    type Unit = U;
    const NAME: &'static str = "Ecliptic";

    fn from_frame_data(data: FrameData<U>) -> Self {
        Self { data }
    }

    fn frame_data(&self) -> &FrameData<U> {
        &self.data
    }

    fn to_icrs_matrix() -> RotationMatrix3 {
        let mut m = RotationMatrix3::identity();
        m.rotate_x(-J2000_OBLIQUITY_RAD);
        m
    }
}

impl Ecliptic<Degree> {
    pub fn from_degrees(lambda_deg: f64, beta_deg: f64) -> Self {
        Self::new(beta_deg, lambda_deg, 1.0)
    }
}

impl<U: AngleUnit> Ecliptic<U> {
    pub fn lambda(&self) -> Angle {
        self.data.position().lon()
    }

    pub fn beta(&self) -> Angle {
        self.data.position().lat()
    }
}

impl<U: AngleUnit> fmt::Display for Ecliptic<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ecliptic(λ={:.6}°, β={:.6}°)",
            self.lambda().degrees(),
            self.beta().degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skypoint_core::Vector3;

    #[test]
    fn test_ecliptic_pole_in_icrs() {
        let v = Ecliptic::<Degree>::to_icrs_matrix() * Vector3::z_axis();
        let (ra, dec) = v.to_spherical();

        assert!((ra.to_degrees().rem_euclid(360.0) - 270.0).abs() < 1e-10);
        assert!((dec.to_degrees() - 66.560720555).abs() < 1e-8);
    }

    #[test]
    fn test_equinox_is_shared() {
        let v = Ecliptic::<Degree>::to_icrs_matrix() * Vector3::x_axis();
        assert!((v - Vector3::x_axis()).magnitude() < 1e-15);
    }
}
