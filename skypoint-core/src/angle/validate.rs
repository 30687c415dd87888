use super::core::Angle;
use crate::constants::{HALF_PI, PI};
use crate::{AstroError, AstroResult, MathErrorKind};

pub fn validate_latitude(angle: Angle) -> AstroResult<Angle> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(AstroError::math_error(
            "validate_latitude",
            MathErrorKind::NotFinite,
            "Lat not finite",
        ));
    }

    if (-HALF_PI..=HALF_PI).contains(&rad) {
        return Ok(angle);
    }

    Err(AstroError::math_error(
        "validate_latitude",
        MathErrorKind::OutOfRange,
        &format!("Lat {:.2}° out of range [-90°, +90°]", angle.degrees()),
    ))
}

/// With `normalize`, any finite longitude is wrapped into [0, 2π);
/// otherwise it must already lie in [-π, +π].
pub fn validate_longitude(angle: Angle, normalize: bool) -> AstroResult<Angle> {
    let rad = angle.radians();
    if !rad.is_finite() {
        return Err(AstroError::math_error(
            "validate_longitude",
            MathErrorKind::NotFinite,
            "Lon not finite",
        ));
    }

    if normalize {
        return Ok(Angle::from_radians(super::normalize::wrap_0_2pi(rad)));
    }

    if (-PI..=PI).contains(&rad) {
        return Ok(angle);
    }

    Err(AstroError::math_error(
        "validate_longitude",
        MathErrorKind::OutOfRange,
        &format!("Lon {:.2}° out of range [-180°, +180°]", angle.degrees()),
    ))
}
