use super::{Frame, FrameData};
use crate::constants::FK5_ORIENTATION_MAS;
use crate::units::{AngleUnit, Degree};
use skypoint_core::{Angle, RotationMatrix3, Vector3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// FK5 catalogue frame at equinox J2000.0.
///
/// Differs from ICRS by a rotation of a few tens of milliarcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Fk5<U: AngleUnit = Degree> {
    data: FrameData<U>,
}

impl<U: AngleUnit> Frame for Fk5<U> {
    type Unit = U;
    const NAME: &'static str = "FK5";

    fn from_frame_data(data: FrameData<U>) -> Self {
        Self { data }
    }

    fn frame_data(&self) -> &FrameData<U> {
        &self.data
    }

    fn to_icrs_matrix() -> RotationMatrix3 {
        let [x, y, z] = FK5_ORIENTATION_MAS;
        RotationMatrix3::from_rotation_vector(Vector3::new(
            Angle::from_milliarcseconds(x).radians(),
            Angle::from_milliarcseconds(y).radians(),
            Angle::from_milliarcseconds(z).radians(),
        ))
    }
}

impl Fk5<Degree> {
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(dec_deg, ra_deg, 1.0)
    }
}

impl<U: AngleUnit> Fk5<U> {
    pub fn ra(&self) -> Angle {
        self.data.position().lon()
    }

    pub fn dec(&self) -> Angle {
        self.data.position().lat()
    }
}

impl<U: AngleUnit> fmt::Display for Fk5<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FK5(RA={:.6}°, Dec={:.6}°)",
            self.ra().degrees(),
            self.dec().degrees()
        )
    }
}
