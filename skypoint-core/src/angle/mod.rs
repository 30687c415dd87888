mod core;
mod normalize;
mod ops;
#[cfg(feature = "serde")]
mod serde_;
mod validate;

pub use core::Angle;
pub use normalize::{wrap_0_2pi, wrap_pm_pi};
pub use validate::{validate_latitude, validate_longitude};
