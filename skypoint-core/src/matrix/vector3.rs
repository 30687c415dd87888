//! 3D Cartesian vectors.
//!
//! Sky positions are spherical, but frame rotations are cleanest in
//! Cartesian form:
//!
//! 1. [`Vector3::from_spherical`] turns `(lon, lat)` into a unit vector
//! 2. a [`RotationMatrix3`](super::RotationMatrix3) rotates it
//! 3. [`Vector3::to_spherical`] turns it back
//!
//! Proper motions ride along as tangent vectors built on the local
//! east/north basis from [`Vector3::east_north_basis`].
//!
//! ```
//! use skypoint_core::Vector3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = Vector3::from_spherical(FRAC_PI_2, 0.0);
//! assert!((v.y - 1.0).abs() < 1e-15);
//!
//! let (lon, lat) = v.to_spherical();
//! assert!((lon - FRAC_PI_2).abs() < 1e-15);
//! assert_eq!(lat, 0.0);
//! ```

use std::fmt;

/// A 3D Cartesian vector. Components are public.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit vector in the same direction; the zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            Self::new(self.x / mag, self.y / mag, self.z / mag)
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product: `x_axis × y_axis = z_axis`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Unit vector for longitude `lon` (from +X toward +Y) and latitude `lat`
    /// (from the XY plane), both in radians.
    pub fn from_spherical(lon: f64, lat: f64) -> Self {
        let (sin_lon, cos_lon) = libm::sincos(lon);
        let (sin_lat, cos_lat) = libm::sincos(lat);
        Self::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Returns `(lon, lat)` in radians, `lon` in `(-π, π]`.
    ///
    /// Magnitude is ignored. The zero vector, and the longitude at either
    /// pole, come back as `0.0`.
    pub fn to_spherical(&self) -> (f64, f64) {
        let d2 = self.x * self.x + self.y * self.y;

        let lon = if d2 == 0.0 {
            0.0
        } else {
            libm::atan2(self.y, self.x)
        };
        let lat = if self.z == 0.0 {
            0.0
        } else {
            libm::atan2(self.z, libm::sqrt(d2))
        };

        (lon, lat)
    }

    /// Local `(east, north)` unit vectors at `(lon, lat)`.
    ///
    /// East points along increasing longitude, north along increasing
    /// latitude. Together with [`from_spherical`](Self::from_spherical) they
    /// form a right-handed triad `(radial, east, north)`.
    pub fn east_north_basis(lon: f64, lat: f64) -> (Self, Self) {
        let (sin_lon, cos_lon) = libm::sincos(lon);
        let (sin_lat, cos_lat) = libm::sincos(lat);

        let east = Self::new(-sin_lon, cos_lon, 0.0);
        let north = Self::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);

        (east, north)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.9}, {:.9}, {:.9}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_vector3_dot_cross() {
        let a = Vector3::x_axis();
        let b = Vector3::y_axis();
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), Vector3::z_axis());

        let c = Vector3::new(1.0, 2.0, 3.0);
        let d = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(c.dot(&d), 32.0);
    }

    #[test]
    fn test_spherical_round_trip() {
        let v = Vector3::from_spherical(FRAC_PI_4, 0.5);
        assert!((v.magnitude() - 1.0).abs() < 1e-15);

        let (lon, lat) = v.to_spherical();
        assert!((lon - FRAC_PI_4).abs() < 1e-15);
        assert!((lat - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_to_spherical_poles_and_zero() {
        assert_eq!(Vector3::new(0.0, 0.0, 1.0).to_spherical(), (0.0, FRAC_PI_2));
        assert_eq!(Vector3::new(0.0, 0.0, -1.0).to_spherical(), (0.0, -FRAC_PI_2));
        assert_eq!(Vector3::zeros().to_spherical(), (0.0, 0.0));
    }

    #[test]
    fn test_normalize() {
        let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
        assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
        assert_eq!(Vector3::zeros().normalize(), Vector3::zeros());
    }

    #[test]
    fn test_east_north_basis_is_orthonormal() {
        for &(lon, lat) in &[(0.0, 0.0), (1.3, 0.7), (-2.5, -1.2), (3.0, 1.5)] {
            let r = Vector3::from_spherical(lon, lat);
            let (east, north) = Vector3::east_north_basis(lon, lat);

            assert!((east.magnitude() - 1.0).abs() < 1e-15);
            assert!((north.magnitude() - 1.0).abs() < 1e-15);
            assert!(east.dot(&north).abs() < 1e-15);
            assert!(east.dot(&r).abs() < 1e-15);
            assert!(north.dot(&r).abs() < 1e-15);

            // (radial, east, north) is right-handed
            let z = r.cross(&east);
            assert!((z - north).magnitude() < 1e-15);
        }
    }

    #[test]
    fn test_east_north_basis_at_origin() {
        let (east, north) = Vector3::east_north_basis(0.0, 0.0);
        assert_eq!(east, Vector3::new(-0.0, 1.0, 0.0));
        assert_eq!(north, Vector3::new(-0.0, -0.0, 1.0));
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_display_formatting() {
        let v = Vector3::new(1.0, -0.5, 0.25);
        assert_eq!(format!("{}", v), "[1.000000000, -0.500000000, 0.250000000]");
    }
}
