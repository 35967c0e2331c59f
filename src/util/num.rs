use crate::error::WordsError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// ## Errors
/// Returns an error for non-finite, negative, out-of-range, or fractional
/// values.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// - `Ok(u64)`: The converted value if safe.
/// - `Err(WordsError)`: If conversion is invalid.
///
/// # Example
/// ```
/// use wordcalc::{error::WordsError, util::num::f64_to_u64_checked};
///
/// // Safe
/// assert_eq!(f64_to_u64_checked(7.0), Ok(7));
///
/// // Negative value
/// assert_eq!(f64_to_u64_checked(-5.0), Err(WordsError::Negative { value: -5.0 }));
///
/// // Fractional value
/// assert_eq!(f64_to_u64_checked(1.25), Err(WordsError::Fractional { value: 1.25 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> Result<u64, WordsError> {
    if !value.is_finite() {
        return Err(WordsError::NonFinite { value });
    }
    if value.fract() != 0.0 {
        return Err(WordsError::Fractional { value });
    }
    if value < 0.0 {
        return Err(WordsError::Negative { value });
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(WordsError::TooLarge { value });
    }
    Ok(value as u64)
}

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns an error if the value exceeds `MAX_SAFE_U64_INT`.
///
/// # Example
/// ```
/// use wordcalc::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(1234), Ok(1234.0));
/// assert!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64_checked(value: u64) -> Result<f64, WordsError> {
    if value > MAX_SAFE_U64_INT {
        return Err(WordsError::TooLarge { value: value as f64 });
    }
    Ok(value as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_before_anything_else() {
        assert!(matches!(f64_to_u64_checked(f64::INFINITY), Err(WordsError::NonFinite { .. })));
        assert!(matches!(f64_to_u64_checked(f64::NEG_INFINITY),
                         Err(WordsError::NonFinite { .. })));
        assert!(matches!(f64_to_u64_checked(f64::NAN), Err(WordsError::NonFinite { .. })));
    }

    #[test]
    fn limits() {
        assert_eq!(f64_to_u64_checked(0.0), Ok(0));
        assert_eq!(f64_to_u64_checked(9_007_199_254_740_991.0), Ok(MAX_SAFE_U64_INT));
        assert!(matches!(f64_to_u64_checked(1e16), Err(WordsError::TooLarge { .. })));
        assert!(matches!(f64_to_u64_checked(-0.5), Err(WordsError::Fractional { .. })));
    }
}
