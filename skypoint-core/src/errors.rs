//! Error types for the spherical-geometry layer.
//!
//! [`AstroError`] reports a value the angle validators refuse: non-finite
//! input or a latitude outside ±90°. [`MathErrorKind`] says which.
//!
//! ```
//! use skypoint_core::{AstroError, MathErrorKind};
//!
//! fn checked_colatitude(lat: f64) -> Result<f64, AstroError> {
//!     if !lat.is_finite() {
//!         return Err(AstroError::math_error(
//!             "checked_colatitude",
//!             MathErrorKind::NotFinite,
//!             "latitude is not finite",
//!         ));
//!     }
//!     Ok(std::f64::consts::FRAC_PI_2 - lat)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors carried by [`AstroError::MathError`].
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Value is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }
}
