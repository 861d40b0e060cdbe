use crate::error::{GeometryError, Result};

/// 3D vector type, used for axis-aligned extents.
pub type Vector3 = nalgebra::Vector3<f64>;

/// The circle constant used by every formula.
pub const PI: f64 = std::f64::consts::PI;

/// Exponent of the Knud Thomsen approximation for triaxial ellipsoid area.
pub const TRIAXIAL_EXPONENT: f64 = 1.6075;

/// Returns `value` if it is finite and strictly positive.
///
/// # Errors
///
/// Returns [`GeometryError::NonPositiveDimension`] naming the offending dimension.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositiveDimension { name, value }.into())
    }
}

/// Whether a stored dimension would pass [`ensure_positive`].
#[must_use]
pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive() {
        assert!(ensure_positive("side", 2.5).is_ok());
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        assert!(ensure_positive("side", 0.0).is_err());
        assert!(ensure_positive("side", -1.0).is_err());
        assert!(ensure_positive("side", f64::NAN).is_err());
        assert!(ensure_positive("side", f64::INFINITY).is_err());
    }

    #[test]
    fn error_names_dimension() {
        let err = ensure_positive("radius", -3.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "dimension radius = -3 must be finite and positive"
        );
    }
}
