//! Number formatting for shape reports.
//!
//! Values are printed in "general" notation with six significant digits:
//! fixed-point when the decimal exponent is in `-4..6`, scientific otherwise,
//! with trailing zeros removed in both cases.

/// Significant digits used by [`general`].
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Formats `value` in general notation with [`SIGNIFICANT_DIGITS`] digits.
#[must_use]
pub fn general(value: f64) -> String {
    general_with_precision(value, SIGNIFICANT_DIGITS)
}

/// Formats `value` in general notation with `precision` significant digits.
#[must_use]
pub fn general_with_precision(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if value == 0.0 {
        return "0".into();
    }

    let precision = precision.max(1);
    // Round first so that e.g. 999999.7 is classified with exponent 6.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let max_exponent = i32::try_from(precision).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
