use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use sgl::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `RuntimeError::InvalidArgument` if the value exceeds
/// `MAX_SAFE_U64_INT`.
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, line: usize) -> EvalResult<f64> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(v as f64),
        _ => Err(RuntimeError::InvalidArgument { details: format!("{value} cannot be represented as a number"),
                                                 line }),
    }
}

/// Truncates an `f64` towards zero and converts it to `i64`.
///
/// Range bounds are truncated rather than rejected when fractional, so `2.9`
/// becomes `2` and `-2.9` becomes `-2`.
///
/// ## Errors
/// Returns `RuntimeError::InvalidArgument` for non-finite values and values
/// whose magnitude exceeds `MAX_SAFE_I64_INT`.
///
/// ## Example
/// ```
/// use sgl::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(2.9, 1).unwrap(), 2);
/// assert_eq!(f64_to_i64_truncated(-2.9, 1).unwrap(), -2);
/// assert!(f64_to_i64_truncated(f64::NAN, 1).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details: format!("cannot convert non-finite value {value} to an integer"),
                                                   line });
    }
    let truncated = value.trunc();
    if truncated.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is too large to be used as an integer"),
                                                   line });
    }
    Ok(truncated as i64)
}

/// Converts an `f64` to a list index.
///
/// The value must be finite, non-negative and integral. Bounds against a
/// concrete list are checked by the caller.
///
/// ## Errors
/// Returns `RuntimeError::InvalidArgument` when the value is not a valid index.
///
/// ## Example
/// ```
/// use sgl::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(3.0, 1).unwrap(), 3);
/// assert!(f64_to_index(-1.0, 1).is_err());
/// assert!(f64_to_index(1.5, 1).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_index(value: f64, line: usize) -> EvalResult<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is not a valid list index"),
                                                   line });
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is too large to be used as an index"),
                                                   line });
    }
    usize::try_from(value as u64).map_err(|_| RuntimeError::InvalidArgument { details: format!("{value} is too large to be used as an index"),
                                                                              line })
}
