//! The odd-successor computation.
//!
//! Every entry point funnels into [`next_odd_int`]: float input is validated
//! as finite, truncated toward zero and range-checked first, and dynamically
//! typed or textual input is converted to a number before that.

use serde_json::Value;
use tracing::{debug, trace};

use crate::errors::NextOddError;

/// Smallest `f64` that is not representable as an `i64` (2^63).
const I64_UPPER_EXCLUSIVE: f64 = 9_223_372_036_854_775_808.0;
/// `i64::MIN` as a float (-2^63), exactly representable.
const I64_LOWER_INCLUSIVE: f64 = -9_223_372_036_854_775_808.0;

/// Returns true when `n` is odd. Works for negative values too.
pub fn is_odd(n: i64) -> bool {
    n & 1 != 0
}

/// Next odd integer strictly greater than `n`.
///
/// Even values advance by one, odd values by two. Fails only when the
/// successor does not fit in an `i64`.
pub fn next_odd_int(n: i64) -> Result<i64, NextOddError> {
    let step = if is_odd(n) { 2 } else { 1 };
    let result = n.checked_add(step).ok_or_else(|| {
        debug!("Rejecting {}: successor overflows i64", n);
        NextOddError::out_of_range(n)
    })?;
    trace!("next_odd({}) = {}", n, result);
    Ok(result)
}

/// Next odd integer strictly greater than the truncation of `n`.
///
/// Truncation rounds toward zero, so `2.9` is treated as `2` and `-1.9`
/// as `-1`. NaN and the infinities fail with
/// [`NextOddError::InvalidArgument`] before any arithmetic happens.
///
/// ```
/// use next_odd::next_odd;
///
/// assert_eq!(next_odd(3.0).unwrap(), 5);
/// assert_eq!(next_odd(2.9).unwrap(), 3);
/// assert!(next_odd(f64::NAN).is_err());
/// ```
pub fn next_odd(n: f64) -> Result<i64, NextOddError> {
    if !n.is_finite() {
        debug!("Rejecting non-finite input {}", n);
        return Err(NextOddError::not_finite(n));
    }

    let truncated = n.trunc();
    if !(I64_LOWER_INCLUSIVE..I64_UPPER_EXCLUSIVE).contains(&truncated) {
        debug!("Rejecting {}: truncation does not fit in i64", n);
        return Err(NextOddError::out_of_range(n));
    }

    // In range and integral, so the cast is exact.
    next_odd_int(truncated as i64)
}

/// Next odd integer for a dynamically typed value.
///
/// Only JSON numbers are accepted. Integers take the exact integer path;
/// every other number goes through [`next_odd`]. Strings, booleans, null,
/// arrays and objects are not numbers and are rejected.
pub fn next_odd_value(value: &Value) -> Result<i64, NextOddError> {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(int) => next_odd_int(int),
            None => match number.as_f64() {
                Some(float) => next_odd(float),
                None => Err(NextOddError::not_finite(number)),
            },
        },
        other => {
            debug!("Rejecting non-numeric value {}", other);
            Err(NextOddError::not_finite(other))
        }
    }
}

/// Parse textual input as a number.
///
/// Surrounding whitespace is ignored. Spellings of infinity and NaN parse
/// successfully and are rejected later by [`next_odd`].
pub fn parse_number(input: &str) -> Result<f64, NextOddError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| NextOddError::not_finite(format!("{input:?}")))
}

/// Next odd integer for textual input.
///
/// Integer text is evaluated exactly, without a float round trip, so
/// values beyond 2^53 keep their parity.
pub fn next_odd_str(input: &str) -> Result<i64, NextOddError> {
    if let Ok(int) = input.trim().parse::<i64>() {
        return next_odd_int(int);
    }
    next_odd(parse_number(input)?)
}
