use super::{CartesianRepresentation, Representation};
use crate::units::{AngleUnit, Degree};
use skypoint_core::angle::wrap_0_2pi;
use skypoint_core::{Angle, Vector3};
use std::fmt;
use std::marker::PhantomData;

/// Spherical position: latitude, longitude and distance.
///
/// Angles are stored as plain numbers in unit `U`. Distance is in whatever
/// unit the caller uses and defaults to `1.0`, which makes the position a
/// pure direction.
///
/// ```
/// use skypoint_coords::representation::SphericalRepresentation;
/// use skypoint_coords::units::{Degree, Radian};
///
/// let s = SphericalRepresentation::<Degree>::new(45.0, 90.0, 2.0);
/// let r: SphericalRepresentation<Radian> = s.with_unit();
/// assert!((r.get_lat() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// assert_eq!(r.get_distance(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct SphericalRepresentation<U: AngleUnit = Degree> {
    lat: f64,
    lon: f64,
    distance: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

impl<U: AngleUnit> SphericalRepresentation<U> {
    pub fn new(lat: f64, lon: f64, distance: f64) -> Self {
        Self {
            lat,
            lon,
            distance,
            unit: PhantomData,
        }
    }

    /// Direction only, at distance `1.0`.
    pub fn unit_sphere(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, 1.0)
    }

    /// Re-expresses any representation's data in this unit.
    pub fn from_representation<R: Representation>(representation: &R) -> Self {
        representation.to_spherical::<U>()
    }

    #[inline]
    pub fn get_lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn get_lon(&self) -> f64 {
        self.lon
    }

    #[inline]
    pub fn get_distance(&self) -> f64 {
        self.distance
    }

    pub fn lat(&self) -> Angle {
        Angle::from_radians(U::to_radians(self.lat))
    }

    pub fn lon(&self) -> Angle {
        Angle::from_radians(U::to_radians(self.lon))
    }

    /// Same position in unit `V`. The distance is carried unchanged.
    pub fn with_unit<V: AngleUnit>(&self) -> SphericalRepresentation<V> {
        SphericalRepresentation::new(
            U::convert::<V>(self.lat),
            U::convert::<V>(self.lon),
            self.distance,
        )
    }

    /// Unit vector pointing at this position, ignoring distance.
    pub fn unit_vector(&self) -> Vector3 {
        Vector3::from_spherical(U::to_radians(self.lon), U::to_radians(self.lat))
    }
}

impl<U: AngleUnit> Default for SphericalRepresentation<U> {
    fn default() -> Self {
        Self::unit_sphere(0.0, 0.0)
    }
}

impl<U: AngleUnit> Representation for SphericalRepresentation<U> {
    fn to_cartesian(&self) -> CartesianRepresentation {
        CartesianRepresentation::from_vector(self.unit_vector() * self.distance)
    }

    /// Longitude comes back in `[0, 2π)` expressed in `U`.
    fn from_cartesian(cartesian: &CartesianRepresentation) -> Self {
        let v = cartesian.as_vector();
        let (lon, lat) = v.to_spherical();
        Self::new(
            U::from_radians(lat),
            U::from_radians(wrap_0_2pi(lon)),
            v.magnitude(),
        )
    }

    // Rescale directly so a zero-distance position keeps its direction.
    fn to_spherical<V: AngleUnit>(&self) -> SphericalRepresentation<V> {
        self.with_unit::<V>()
    }
}

impl<U: AngleUnit> fmt::Display for SphericalRepresentation<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(lat={}{}, lon={}{}, distance={})",
            self.lat,
            U::SYMBOL,
            self.lon,
            U::SYMBOL,
            self.distance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Hour, Radian};

    #[test]
    fn test_default_is_origin_on_unit_sphere() {
        let s = SphericalRepresentation::<Degree>::default();
        assert_eq!(s.get_lat(), 0.0);
        assert_eq!(s.get_lon(), 0.0);
        assert_eq!(s.get_distance(), 1.0);
    }

    #[test]
    fn test_cartesian_round_trip() {
        let s = SphericalRepresentation::<Degree>::new(-30.0, 200.0, 4.0);
        let back = SphericalRepresentation::<Degree>::from_cartesian(&s.to_cartesian());

        assert!((back.get_lat() - -30.0).abs() < 1e-12);
        assert!((back.get_lon() - 200.0).abs() < 1e-12);
        assert!((back.get_distance() - 4.0).abs() < 1e-14);
    }

    #[test]
    fn test_from_cartesian_wraps_longitude() {
        let c = CartesianRepresentation::new(0.0, -1.0, 0.0);
        let s = SphericalRepresentation::<Degree>::from_cartesian(&c);
        assert!((s.get_lon() - 270.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_change_keeps_direction_at_zero_distance() {
        let s = SphericalRepresentation::<Degree>::new(10.0, 20.0, 0.0);
        let r = s.to_spherical::<Radian>();

        assert!((r.get_lat() - 10f64.to_radians()).abs() < 1e-15);
        assert!((r.get_lon() - 20f64.to_radians()).abs() < 1e-15);
        assert_eq!(r.get_distance(), 0.0);
    }

    #[test]
    fn test_from_representation_changes_unit() {
        let s = SphericalRepresentation::<Hour>::new(0.0, 6.0, 1.0);
        let d = SphericalRepresentation::<Degree>::from_representation(&s);
        assert!((d.get_lon() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_accessors() {
        let s = SphericalRepresentation::<Degree>::new(45.0, 90.0, 1.0);
        assert!((s.lat().degrees() - 45.0).abs() < 1e-12);
        assert!((s.lon().degrees() - 90.0).abs() < 1e-12);
    }
}
