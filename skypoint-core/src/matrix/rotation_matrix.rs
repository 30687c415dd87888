//! 3x3 rotation matrices for frame-to-frame transformations.
//!
//! Every fixed celestial frame differs from ICRS by a constant rotation, so a
//! conversion between two frames is one matrix product applied to a position
//! (and to its proper-motion tangent vector).
//!
//! # Conventions (ERFA-compatible)
//!
//! `rotate_x/y/z(angle)` pre-multiply by the elementary rotation, which turns
//! the *frame*: a positive 90° turn about Z takes `[1, 0, 0]` to `[0, -1, 0]`.
//! Matrices compose right to left, `B * A` applies `A` first. Storage is row
//! major, `matrix[(row, col)]`.
//!
//! ```
//! use skypoint_core::{RotationMatrix3, Vector3};
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(0.5);
//! m.rotate_x(0.3);
//!
//! let v = Vector3::new(1.0, 2.0, 3.0);
//! let back = m.transpose() * (m * v);
//! assert!((back - v).magnitude() < 1e-14);
//! ```

use super::Vector3;
use std::fmt;

/// A proper rotation matrix (orthogonal, determinant +1), row major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// `elements[i][j]` is row `i`, column `j`. Not checked for orthogonality;
    /// see [`is_rotation_matrix`](Self::is_rotation_matrix).
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Builds the matrix whose rows are the target frame's axes expressed in
    /// the source frame. Applying it projects a source vector onto those axes.
    pub fn from_rows(x_axis: Vector3, y_axis: Vector3, z_axis: Vector3) -> Self {
        Self::from_array([x_axis.to_array(), y_axis.to_array(), z_axis.to_array()])
    }

    /// Rotation matrix from a rotation vector (axis times angle in radians),
    /// as ERFA's `rv2m`.
    ///
    /// ```
    /// use skypoint_core::{RotationMatrix3, Vector3};
    ///
    /// let by_vector = RotationMatrix3::from_rotation_vector(Vector3::new(0.0, 0.0, 0.4));
    /// let mut by_axis = RotationMatrix3::identity();
    /// by_axis.rotate_z(0.4);
    /// assert!(by_vector.max_difference(&by_axis) < 1e-15);
    /// ```
    pub fn from_rotation_vector(w: Vector3) -> Self {
        let phi = w.magnitude();
        let (s, c) = libm::sincos(phi);
        let f = 1.0 - c;

        let (x, y, z) = if phi > 0.0 {
            (w.x / phi, w.y / phi, w.z / phi)
        } else {
            (w.x, w.y, w.z)
        };

        Self::from_array([
            [x * x * f + c, x * y * f + z * s, x * z * f - y * s],
            [y * x * f - z * s, y * y * f + c, y * z * f + x * s],
            [z * x * f + y * s, z * y * f - x * s, z * z * f + c],
        ])
    }

    /// Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// `self = Rx(phi) * self`.
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = libm::sincos(phi);

        let a10 = c * self.elements[1][0] + s * self.elements[2][0];
        let a11 = c * self.elements[1][1] + s * self.elements[2][1];
        let a12 = c * self.elements[1][2] + s * self.elements[2][2];
        let a20 = -s * self.elements[1][0] + c * self.elements[2][0];
        let a21 = -s * self.elements[1][1] + c * self.elements[2][1];
        let a22 = -s * self.elements[1][2] + c * self.elements[2][2];

        self.elements[1] = [a10, a11, a12];
        self.elements[2] = [a20, a21, a22];
    }

    /// `self = Ry(theta) * self`.
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);

        let a00 = c * self.elements[0][0] - s * self.elements[2][0];
        let a01 = c * self.elements[0][1] - s * self.elements[2][1];
        let a02 = c * self.elements[0][2] - s * self.elements[2][2];
        let a20 = s * self.elements[0][0] + c * self.elements[2][0];
        let a21 = s * self.elements[0][1] + c * self.elements[2][1];
        let a22 = s * self.elements[0][2] + c * self.elements[2][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[2] = [a20, a21, a22];
    }

    /// `self = Rz(psi) * self`.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);

        let a00 = c * self.elements[0][0] + s * self.elements[1][0];
        let a01 = c * self.elements[0][1] + s * self.elements[1][1];
        let a02 = c * self.elements[0][2] + s * self.elements[1][2];
        let a10 = -s * self.elements[0][0] + c * self.elements[1][0];
        let a11 = -s * self.elements[0][1] + c * self.elements[1][1];
        let a12 = -s * self.elements[0][2] + c * self.elements[1][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[1] = [a10, a11, a12];
    }

    /// `self * other`: `other` acts first.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    pub fn apply(&self, v: &Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// The inverse rotation.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        let product = self.multiply(&self.transpose());
        let identity = Self::identity();

        product.max_difference(&identity) <= tolerance
    }

    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                max_diff = max_diff.max((self.elements[i][j] - other.elements[i][j]).abs());
            }
        }

        max_diff
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply(&v)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.apply(&v)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.elements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{:+.15} {:+.15} {:+.15}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
