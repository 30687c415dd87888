use super::{Differential, SphericalCoslatDifferential};
use crate::representation::SphericalRepresentation;
use crate::units::Radian;
use skypoint_core::Vector3;

/// Rectangular velocity `(d_x, d_y, d_z)` in distance units per time unit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartesianDifferential {
    pub d_x: f64,
    pub d_y: f64,
    pub d_z: f64,
}

impl CartesianDifferential {
    pub fn new(d_x: f64, d_y: f64, d_z: f64) -> Self {
        Self { d_x, d_y, d_z }
    }

    pub fn as_vector(&self) -> Vector3 {
        Vector3::new(self.d_x, self.d_y, self.d_z)
    }
}

impl Differential for CartesianDifferential {
    /// Splits the velocity into radial and tangential parts on the local
    /// basis at `position`. Angular rates come out in radians per time unit;
    /// at zero distance they are zero.
    fn to_coslat(&self, position: &SphericalRepresentation<Radian>) -> SphericalCoslatDifferential {
        let (lon, lat) = (position.get_lon(), position.get_lat());
        let v = self.as_vector();
        let radial = Vector3::from_spherical(lon, lat);
        let (east, north) = Vector3::east_north_basis(lon, lat);

        let distance = position.get_distance();
        let d_distance = v.dot(&radial);
        if distance == 0.0 {
            return SphericalCoslatDifferential::new(0.0, 0.0, d_distance);
        }

        SphericalCoslatDifferential::new(
            v.dot(&north) / distance,
            v.dot(&east) / distance,
            d_distance,
        )
    }

    fn from_coslat(
        motion: &SphericalCoslatDifferential,
        position: &SphericalRepresentation<Radian>,
    ) -> Self {
        let (lon, lat) = (position.get_lon(), position.get_lat());
        let radial = Vector3::from_spherical(lon, lat);
        let (east, north) = Vector3::east_north_basis(lon, lat);
        let distance = position.get_distance();

        let v = radial * motion.d_distance()
            + east * (motion.d_lon_coslat() * distance)
            + north * (motion.d_lat() * distance);

        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_velocity_along_x_axis() {
        let position = SphericalRepresentation::<Radian>::new(0.0, 0.0, 10.0);
        let c = CartesianDifferential::new(5.0, 0.0, 0.0).to_coslat(&position);

        assert_eq!(c.d_distance(), 5.0);
        assert_eq!(c.d_lat(), 0.0);
        assert_eq!(c.d_lon_coslat(), 0.0);
    }

    #[test]
    fn test_tangential_velocity_scales_with_distance() {
        let position = SphericalRepresentation::<Radian>::new(0.0, 0.0, 10.0);
        let c = CartesianDifferential::new(0.0, 2.0, 1.0).to_coslat(&position);

        assert!((c.d_lon_coslat() - 0.2).abs() < 1e-15);
        assert!((c.d_lat() - 0.1).abs() < 1e-15);
        assert!(c.d_distance().abs() < 1e-15);
    }

    #[test]
    fn test_round_trip_off_axis() {
        let position = SphericalRepresentation::<Radian>::new(0.4, 2.1, 3.0);
        let v = CartesianDifferential::new(0.3, -1.2, 0.7);
        let back = CartesianDifferential::from_coslat(&v.to_coslat(&position), &position);

        assert!((back.d_x - v.d_x).abs() < 1e-14);
        assert!((back.d_y - v.d_y).abs() < 1e-14);
        assert!((back.d_z - v.d_z).abs() < 1e-14);
    }

    #[test]
    fn test_zero_distance_keeps_radial_rate() {
        let position = SphericalRepresentation::<Radian>::new(0.0, 0.0, 0.0);
        let c = CartesianDifferential::new(1.0, 1.0, 1.0).to_coslat(&position);

        assert_eq!(c.d_distance(), 1.0);
        assert_eq!(c.d_lat(), 0.0);
        assert_eq!(c.d_lon_coslat(), 0.0);
    }
}
