use super::Differential;
use crate::representation::SphericalRepresentation;
use crate::units::Radian;

/// Motion as `(d_lat, d_lon·cos(lat), d_distance)`.
///
/// This is the storage form inside every frame. For stars it reads as
/// `(pm_dec, pm_ra_cosdec, radial_velocity)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalCoslatDifferential {
    d_lat: f64,
    d_lon_coslat: f64,
    d_distance: f64,
}

impl SphericalCoslatDifferential {
    pub fn new(d_lat: f64, d_lon_coslat: f64, d_distance: f64) -> Self {
        Self {
            d_lat,
            d_lon_coslat,
            d_distance,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn d_lat(&self) -> f64 {
        self.d_lat
    }

    #[inline]
    pub fn d_lon_coslat(&self) -> f64 {
        self.d_lon_coslat
    }

    #[inline]
    pub fn d_distance(&self) -> f64 {
        self.d_distance
    }

    pub fn is_zero(&self) -> bool {
        self.d_lat == 0.0 && self.d_lon_coslat == 0.0 && self.d_distance == 0.0
    }
}

impl Differential for SphericalCoslatDifferential {
    fn to_coslat(
        &self,
        _position: &SphericalRepresentation<Radian>,
    ) -> SphericalCoslatDifferential {
        *self
    }

    fn from_coslat(
        motion: &SphericalCoslatDifferential,
        _position: &SphericalRepresentation<Radian>,
    ) -> Self {
        *motion
    }
}

/// Motion as `(d_lat, d_lon, d_distance)` with an unscaled longitude rate.
///
/// Converting to this form divides by `cos(lat)`, so the longitude rate is
/// unbounded at the poles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalDifferential {
    d_lat: f64,
    d_lon: f64,
    d_distance: f64,
}

impl SphericalDifferential {
    pub fn new(d_lat: f64, d_lon: f64, d_distance: f64) -> Self {
        Self {
            d_lat,
            d_lon,
            d_distance,
        }
    }

    #[inline]
    pub fn d_lat(&self) -> f64 {
        self.d_lat
    }

    #[inline]
    pub fn d_lon(&self) -> f64 {
        self.d_lon
    }

    #[inline]
    pub fn d_distance(&self) -> f64 {
        self.d_distance
    }
}

impl Differential for SphericalDifferential {
    fn to_coslat(&self, position: &SphericalRepresentation<Radian>) -> SphericalCoslatDifferential {
        let cos_lat = libm::cos(position.get_lat());
        SphericalCoslatDifferential::new(self.d_lat, self.d_lon * cos_lat, self.d_distance)
    }

    fn from_coslat(
        motion: &SphericalCoslatDifferential,
        position: &SphericalRepresentation<Radian>,
    ) -> Self {
        let cos_lat = libm::cos(position.get_lat());
        Self::new(
            motion.d_lat(),
            motion.d_lon_coslat() / cos_lat,
            motion.d_distance(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coslat_scaling_at_sixty_degrees() {
        let position = SphericalRepresentation::<Radian>::new(60f64.to_radians(), 0.0, 1.0);
        let d = SphericalDifferential::new(1.0, 10.0, 3.0);

        let c = d.to_coslat(&position);
        assert_eq!(c.d_lat(), 1.0);
        assert!((c.d_lon_coslat() - 5.0).abs() < 1e-12);
        assert_eq!(c.d_distance(), 3.0);

        let back = SphericalDifferential::from_coslat(&c, &position);
        assert!((back.d_lon() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_coslat_is_unchanged_by_its_own_conversion() {
        let position = SphericalRepresentation::<Radian>::default();
        let c = SphericalCoslatDifferential::new(-2.0, 7.5, 12.0);
        assert_eq!(c.to_coslat(&position), c);
        assert_eq!(SphericalCoslatDifferential::from_coslat(&c, &position), c);
    }

    #[test]
    fn test_zero_motion() {
        assert!(SphericalCoslatDifferential::zero().is_zero());
        assert!(!SphericalCoslatDifferential::new(0.0, 0.0, 1.0).is_zero());
    }
}
