use super::Representation;
use skypoint_core::Vector3;
use std::fmt;

/// Rectangular position `(x, y, z)` in the distance unit of the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartesianRepresentation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianRepresentation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_vector(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    pub fn as_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn norm(&self) -> f64 {
        self.as_vector().magnitude()
    }
}

impl Representation for CartesianRepresentation {
    fn to_cartesian(&self) -> CartesianRepresentation {
        *self
    }

    fn from_cartesian(cartesian: &CartesianRepresentation) -> Self {
        *cartesian
    }
}

impl From<Vector3> for CartesianRepresentation {
    fn from(v: Vector3) -> Self {
        Self::from_vector(v)
    }
}

impl fmt::Display for CartesianRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Degree, Radian};

    #[test]
    fn test_round_trip_is_identity() {
        let c = CartesianRepresentation::new(1.0, -2.0, 3.5);
        assert_eq!(CartesianRepresentation::from_cartesian(&c.to_cartesian()), c);
    }

    #[test]
    fn test_norm() {
        assert_eq!(CartesianRepresentation::new(3.0, 4.0, 12.0).norm(), 13.0);
    }

    #[test]
    fn test_to_spherical_along_axes() {
        let y = CartesianRepresentation::new(0.0, 2.0, 0.0).to_spherical::<Degree>();
        assert!((y.get_lon() - 90.0).abs() < 1e-12);
        assert_eq!(y.get_lat(), 0.0);
        assert_eq!(y.get_distance(), 2.0);

        let z = CartesianRepresentation::new(0.0, 0.0, 5.0).to_spherical::<Radian>();
        assert!((z.get_lat() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert_eq!(z.get_distance(), 5.0);
    }
}
