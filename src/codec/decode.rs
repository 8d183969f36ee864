// ============================================================================
// CSD Decoders
// Strict and lenient parsing from CSD strings back to numeric values
// ============================================================================

use super::digit::CsdDigit;
use super::errors::{CsdError, CsdResult};
use num_bigint::BigInt;
use num_traits::Zero;

/// Decode a CSD string to a floating-point value (double-and-adjust).
///
/// Traverses left to right, doubling an accumulator and adding each digit's
/// weight; the fractional correction is a single division by `2^k` at the
/// end, where `k` is the number of digits after the radix point. Works
/// uniformly for integer-only and fixed-point strings.
///
/// Strict by default: an unexpected character fails with
/// [`CsdError::InvalidDigit`] and a second radix point with
/// [`CsdError::MalformedInput`]. See [`decode_lossy`] for the lenient
/// alternative.
///
/// # Example
/// ```
/// use csdigit::codec::decode;
///
/// assert_eq!(decode("+00-00.+").unwrap(), 28.5);
/// assert_eq!(decode("0.-").unwrap(), -0.5);
/// assert_eq!(decode("0").unwrap(), 0.0);
/// ```
pub fn decode(csd: &str) -> CsdResult<f64> {
    let mut value = 0.0f64;
    let mut seen_point = false;
    let mut fractional_digits = 0i32;

    for (position, ch) in csd.chars().enumerate() {
        if ch == '.' {
            if seen_point {
                return Err(CsdError::MalformedInput { position });
            }
            seen_point = true;
            continue;
        }
        let digit = CsdDigit::from_char(ch).ok_or(CsdError::InvalidDigit {
            digit: ch,
            position,
        })?;
        value = value * 2.0 + f64::from(digit.weight());
        if seen_point {
            fractional_digits += 1;
        }
    }

    if seen_point {
        value /= 2.0f64.powi(fractional_digits);
    }
    Ok(value)
}

/// Decode a CSD string by direct positional summation.
///
/// Computes the power of the most significant digit from the string length
/// and radix-point position, then sums `weight * 2^power` per digit. Kept as
/// an independent cross-check of [`decode`]; the two must agree on every
/// valid input.
pub fn decode_positional(csd: &str) -> CsdResult<f64> {
    let chars: Vec<char> = csd.chars().collect();

    let mut point_index: Option<usize> = None;
    for (position, &ch) in chars.iter().enumerate() {
        if ch == '.' {
            if point_index.is_some() {
                return Err(CsdError::MalformedInput { position });
            }
            point_index = Some(position);
        } else if CsdDigit::from_char(ch).is_none() {
            return Err(CsdError::InvalidDigit {
                digit: ch,
                position,
            });
        }
    }

    let mut power = match point_index {
        Some(p) => p as i32 - 1,
        None => chars.len() as i32 - 1,
    };
    let mut value = 0.0f64;
    for &ch in &chars {
        if let Some(digit) = CsdDigit::from_char(ch) {
            value += f64::from(digit.weight()) * 2.0f64.powi(power);
            power -= 1;
        }
    }
    Ok(value)
}

/// Decode a CSD string, skipping malformed characters instead of failing.
///
/// A character outside `{+, -, 0, .}` consumes no digit position: the
/// accumulator is not doubled and decoding continues with the remaining
/// valid characters. Each skip emits a `tracing` warning. A radix point
/// after the first is skipped the same way.
///
/// # Example
/// ```
/// use csdigit::codec::decode_lossy;
///
/// // The stray 'x' is dropped; the rest decodes normally.
/// assert_eq!(decode_lossy("+0x0-00.+"), 28.5);
/// ```
pub fn decode_lossy(csd: &str) -> f64 {
    let mut value = 0.0f64;
    let mut seen_point = false;
    let mut fractional_digits = 0i32;

    for (position, ch) in csd.chars().enumerate() {
        if ch == '.' {
            if seen_point {
                tracing::warn!(position, "skipping repeated radix point");
            } else {
                seen_point = true;
            }
            continue;
        }
        match CsdDigit::from_char(ch) {
            Some(digit) => {
                value = value * 2.0 + f64::from(digit.weight());
                if seen_point {
                    fractional_digits += 1;
                }
            },
            None => {
                tracing::warn!(character = %ch, position, "skipping unknown character");
            },
        }
    }

    if seen_point {
        value /= 2.0f64.powi(fractional_digits);
    }
    value
}

/// Decode an integer-only CSD string to an arbitrary-precision integer.
///
/// Rejects any radix point with [`CsdError::MalformedInput`]; integer CSD
/// strings carry none. Arbitrary-precision throughout, so values of any
/// magnitude round-trip exactly with
/// [`encode_integer`](super::encode_integer).
///
/// # Example
/// ```
/// use csdigit::codec::decode_integer;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode_integer("+00-00").unwrap(), BigInt::from(28));
/// assert!(decode_integer("+0.-").is_err());
/// ```
pub fn decode_integer(csd: &str) -> CsdResult<BigInt> {
    let mut value = BigInt::zero();

    for (position, ch) in csd.chars().enumerate() {
        if ch == '.' {
            return Err(CsdError::MalformedInput { position });
        }
        let digit = CsdDigit::from_char(ch).ok_or(CsdError::InvalidDigit {
            digit: ch,
            position,
        })?;
        value = (value << 1) + digit.weight();
    }
    Ok(value)
}
