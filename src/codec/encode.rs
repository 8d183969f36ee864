// ============================================================================
// CSD Encoders
// Greedy threshold conversion from numeric values to CSD strings
// ============================================================================

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Epsilon below which a fixed-point remainder is treated as fully consumed
/// by the budget-bounded encoder.
const NEGLIGIBLE: f64 = 1e-100;

/// Smallest exponent `rem` with `2^rem >= 1.5 * |value|`, computed exactly
/// from the bit length of `3 * |value|`.
///
/// `3 * |value|` always carries a factor of 3 for non-zero input, so it is
/// never a power of two and the bound is simply its bit length minus one.
fn leading_power(value: &BigInt) -> u64 {
    let scaled = value.magnitude() * 3u32;
    scaled.bits() - 1
}

/// Convert a signed arbitrary-precision integer to its CSD representation.
///
/// The result is the unique minimal-non-zero-count signed-digit string for
/// the value, with no radix point and no two adjacent non-zero digits.
///
/// At each position the tripled remainder is compared against the current
/// power of two: `3 * remainder > p2n` selects `+`, `3 * remainder < -p2n`
/// selects `-`, anything in between selects `0`. Choosing a non-zero digit
/// pulls the next comparison toward zero, which is what keeps non-zero
/// digits from ever being adjacent.
///
/// # Example
/// ```
/// use csdigit::codec::encode_integer;
/// use num_bigint::BigInt;
///
/// assert_eq!(encode_integer(&BigInt::from(28)), "+00-00");
/// assert_eq!(encode_integer(&BigInt::from(-5)), "-0-");
/// assert_eq!(encode_integer(&BigInt::from(0)), "0");
/// ```
pub fn encode_integer(value: &BigInt) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let mut remainder = value.clone();
    let mut p2n = BigInt::one() << leading_power(value);
    let mut csd = String::new();

    while p2n > BigInt::one() {
        let p2n_half = &p2n >> 1;
        let det = &remainder * 3;
        if det > p2n {
            csd.push('+');
            remainder -= &p2n_half;
        } else if det < -(&p2n) {
            csd.push('-');
            remainder += &p2n_half;
        } else {
            csd.push('0');
        }
        p2n = p2n_half;
    }
    csd
}

/// Convert a floating-point value to a CSD string with exactly `places`
/// digits after the radix point.
///
/// The radix point is always present. Values with `|value| < 1` start with
/// an explicit `0` integral digit, and `encode_fixed(0.0, 0)` yields `"0."`
/// (a bare point with no fractional digits) by contract.
///
/// The threshold comparisons run on plain IEEE doubles with no tolerance;
/// each step's decision depends only on the exact running remainder, so
/// rounding errors do not accumulate across positions.
///
/// # Example
/// ```
/// use csdigit::codec::encode_fixed;
///
/// assert_eq!(encode_fixed(28.5, 2), "+00-00.+0");
/// assert_eq!(encode_fixed(-0.5, 2), "0.-0");
/// assert_eq!(encode_fixed(0.0, 2), "0.00");
/// assert_eq!(encode_fixed(0.0, 0), "0.");
/// ```
pub fn encode_fixed(value: f64, places: u32) -> String {
    let absnum = value.abs();
    let (rem, mut csd) = if absnum < 1.0 {
        (0, String::from("0"))
    } else {
        ((absnum * 1.5).log2().ceil() as i32, String::new())
    };

    let mut remainder = value;
    let mut p2n = 2.0f64.powi(rem);

    for power in (-(places as i32)..rem).rev() {
        if power == -1 {
            csd.push('.');
        }
        p2n /= 2.0;
        let det = 1.5 * remainder;
        if det > p2n {
            csd.push('+');
            remainder -= p2n;
        } else if det < -p2n {
            csd.push('-');
            remainder += p2n;
        } else {
            csd.push('0');
        }
    }
    if places == 0 {
        csd.push('.');
    }
    csd
}

/// Convert an integer to CSD using at most `max_nonzero` non-zero digits.
///
/// Identical traversal to [`encode_integer`], but every `+`/`-` consumes one
/// unit of budget and an exhausted budget forces the remaining digits to
/// zero. The result is a sparse approximation of the input: it may no longer
/// decode back to the same value, by design.
///
/// # Example
/// ```
/// use csdigit::codec::encode_integer_bounded;
/// use num_bigint::BigInt;
///
/// assert_eq!(encode_integer_bounded(&BigInt::from(28), 4), "+00-00");
/// assert_eq!(encode_integer_bounded(&BigInt::from(37), 2), "+00+00");
/// assert_eq!(encode_integer_bounded(&BigInt::from(158), 2), "+0+00000");
/// ```
pub fn encode_integer_bounded(value: &BigInt, max_nonzero: u32) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let mut remainder = value.clone();
    let mut p2n = BigInt::one() << leading_power(value);
    let mut csd = String::new();
    let mut budget = max_nonzero;

    while p2n > BigInt::one() {
        let p2n_half = &p2n >> 1;
        let det = &remainder * 3;
        if budget > 0 && det > p2n {
            csd.push('+');
            remainder -= &p2n_half;
            budget -= 1;
        } else if budget > 0 && det < -(&p2n) {
            csd.push('-');
            remainder += &p2n_half;
            budget -= 1;
        } else {
            csd.push('0');
        }
        p2n = p2n_half;
        if budget == 0 {
            remainder.set_zero();
        }
    }
    csd
}

/// Convert a floating-point value to CSD using at most `max_nonzero`
/// non-zero digits.
///
/// The integral part is always emitted in full; fractional digits continue
/// only while budget remains and the running remainder is above a negligible
/// threshold. Zero input yields `"0"` with no radix point. As with
/// [`encode_integer_bounded`], the result is an approximation once the
/// budget is the binding constraint.
///
/// # Example
/// ```
/// use csdigit::codec::encode_fixed_bounded;
///
/// assert_eq!(encode_fixed_bounded(28.5, 4), "+00-00.+");
/// assert_eq!(encode_fixed_bounded(-0.5, 4), "0.-");
/// assert_eq!(encode_fixed_bounded(0.0, 4), "0");
/// assert_eq!(encode_fixed_bounded(0.5, 4), "0.+");
/// ```
pub fn encode_fixed_bounded(value: f64, max_nonzero: u32) -> String {
    let absnum = value.abs();
    let (mut rem, mut csd) = if absnum < 1.0 {
        (0i32, String::from("0"))
    } else {
        ((absnum * 1.5).log2().ceil() as i32, String::new())
    };

    let mut remainder = value;
    let mut p2n = 2.0f64.powi(rem);
    let mut budget = max_nonzero;

    while rem > 0 || (budget > 0 && remainder.abs() > NEGLIGIBLE) {
        if rem == 0 {
            csd.push('.');
        }
        p2n /= 2.0;
        rem -= 1;
        let det = 1.5 * remainder;
        if budget > 0 && det > p2n {
            csd.push('+');
            remainder -= p2n;
            budget -= 1;
        } else if budget > 0 && det < -p2n {
            csd.push('-');
            remainder += p2n;
            budget -= 1;
        } else {
            csd.push('0');
        }
        if budget == 0 {
            remainder = 0.0;
        }
    }
    csd
}
