use super::{Frame, FrameData, Galactic};
use crate::constants::{
    SUPERGALACTIC_ORIGIN_L_DEG, SUPERGALACTIC_POLE_B_DEG, SUPERGALACTIC_POLE_L_DEG,
};
use crate::units::{AngleUnit, Degree};
use skypoint_core::{Angle, RotationMatrix3, Vector3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// de Vaucouleurs supergalactic coordinates.
///
/// Latitude is SGB, longitude is SGL. The equator follows the plane of the
/// Local Supercluster; axes are defined in Galactic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Supergalactic<U: AngleUnit = Degree> {
    data: FrameData<U>,
}

/// Rotation from Galactic to supergalactic axes.
pub fn galactic_to_supergalactic() -> RotationMatrix3 {
    let x = Vector3::from_spherical(SUPERGALACTIC_ORIGIN_L_DEG.to_radians(), 0.0);
    let z = Vector3::from_spherical(
        SUPERGALACTIC_POLE_L_DEG.to_radians(),
        SUPERGALACTIC_POLE_B_DEG.to_radians(),
    );
    let y = z.cross(&x);
    RotationMatrix3::from_rows(x, y, z)
}

impl<U: AngleUnit> Frame for Supergalactic<U> {
    type Unit = U;
    const NAME: &'static str = "Supergalactic";

    fn from_frame_data(data: FrameData<U>) -> Self {
        Self { data }
    }

    fn frame_data(&self) -> &FrameData<U> {
        &self.data
    }

    fn to_icrs_matrix() -> RotationMatrix3 {
        Galactic::<Degree>::to_icrs_matrix() * galactic_to_supergalactic().transpose()
    }
}

impl Supergalactic<Degree> {
    pub fn from_degrees(sgl_deg: f64, sgb_deg: f64) -> Self {
        Self::new(sgb_deg, sgl_deg, 1.0)
    }
}

impl<U: AngleUnit> Supergalactic<U> {
    pub fn sgl(&self) -> Angle {
        self.data.position().lon()
    }

    pub fn sgb(&self) -> Angle {
        self.data.position().lat()
    }
}

impl<U: AngleUnit> fmt::Display for Supergalactic<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Supergalactic(SGL={:.6}°, SGB={:.6}°)",
            self.sgl().degrees(),
            self.sgb().degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_are_orthonormal() {
        let m = galactic_to_supergalactic();
        assert!(m.is_rotation_matrix(1e-14));
    }

    #[test]
    fn test_pole_in_icrs() {
        let v = Supergalactic::<Degree>::to_icrs_matrix() * Vector3::z_axis();
        let (ra, dec) = v.to_spherical();

        assert!((ra.to_degrees().rem_euclid(360.0) - 283.754090).abs() < 1e-5);
        assert!((dec.to_degrees() - 15.708936).abs() < 1e-5);
    }

    #[test]
    fn test_origin_in_icrs() {
        let v = Supergalactic::<Degree>::to_icrs_matrix() * Vector3::x_axis();
        let (ra, dec) = v.to_spherical();

        assert!((ra.to_degrees().rem_euclid(360.0) - 42.310123).abs() < 1e-5);
        assert!((dec.to_degrees() - 59.528350).abs() < 1e-5);
    }
}
