use crate::{error::SemanticError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Compares two floats within machine epsilon.
///
/// The absolute difference must not exceed `f64::EPSILON`. A NaN difference
/// (either side NaN, or opposite infinities) never compares equal.
///
/// # Example
/// ```
/// use plotscript::util::num::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(!approx_eq(1.0, 1.0 + 1e-9));
/// assert!(!approx_eq(f64::NAN, f64::NAN));
/// ```
#[must_use]
pub fn approx_eq(left: f64, right: f64) -> bool {
    let diff = (left - right).abs();
    !diff.is_nan() && diff <= f64::EPSILON
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns a domain error naming `procedure` if the value exceeds
/// `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use plotscript::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(3, "length").unwrap(), 3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, procedure: &str) -> EvalResult<f64> {
    if value as u64 > MAX_SAFE_U64_INT {
        return Err(SemanticError::DomainError { procedure: procedure.to_string(),
                                                details:   "value too large".to_string(), });
    }
    Ok(value as f64)
}

/// Formats a float with at most `digits` significant digits, the way the C
/// `%g` conversion does: fixed notation for moderate exponents, scientific
/// notation otherwise, trailing zeros removed.
///
/// ## Example
/// ```
/// use plotscript::util::num::format_significant;
///
/// assert_eq!(format_significant(10.0, 2), "10");
/// assert_eq!(format_significant(-1.0, 2), "-1");
/// assert_eq!(format_significant(0.1234, 2), "0.12");
/// assert_eq!(format_significant(250.0, 2), "2.5e+02");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs());
    }

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Strips trailing zeros (and a dangling point) from a fixed-notation number.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
