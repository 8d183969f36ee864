// ============================================================================
// CSD Digit Library
// Canonical signed digit conversion and constant-multiplier utilities
// ============================================================================

//! # csdigit
//!
//! Conversion between numeric values and Canonical Signed Digit (CSD)
//! strings, plus the small utilities that consume them.
//!
//! CSD is a redundant base-2 encoding over the digits `{-1, 0, +1}` (written
//! `-`, `0`, `+`) in which no two adjacent digits are non-zero. For a given
//! value and precision the representation is unique and has minimum Hamming
//! weight, which is why it shows up in DSP and hardware synthesis: one adder
//! or subtractor per non-zero digit is all a constant multiplier needs.
//!
//! ## Features
//!
//! - **Codec**: integer and fixed-point encoders (exact), budget-bounded
//!   encoders (sparse approximations), strict and lenient decoders
//! - **Arbitrary precision**: integer conversions run on `BigInt`, so
//!   values of any magnitude round-trip exactly
//! - **Pattern analysis**: longest repeated non-overlapping substring finder
//!   for spotting factorable digit patterns
//! - **Code generation**: Verilog constant-multiplier module emitter
//!
//! ## Example
//!
//! ```rust
//! use csdigit::prelude::*;
//! use num_bigint::BigInt;
//!
//! // Fixed-point encode with two fractional digits
//! assert_eq!(encode_fixed(28.5, 2), "+00-00.+0");
//!
//! // Decode back (strict: malformed input is an error)
//! assert_eq!(decode("+00-00.+").unwrap(), 28.5);
//!
//! // Integers round-trip exactly at any magnitude
//! let n = BigInt::from(28);
//! assert_eq!(encode_integer(&n), "+00-00");
//! assert_eq!(decode_integer("+00-00").unwrap(), n);
//!
//! // Sparse approximation: at most two non-zero digits
//! assert_eq!(encode_integer_bounded(&BigInt::from(158), 2), "+0+00000");
//! ```

pub mod analysis;
pub mod codec;
pub mod hdl;

// Re-exports for convenience
pub mod prelude {
    pub use crate::analysis::longest_repeated_substring;
    pub use crate::codec::{
        decode, decode_integer, decode_lossy, decode_positional, encode_fixed,
        encode_fixed_bounded, encode_integer, encode_integer_bounded, CsdDigit, CsdError,
        CsdResult,
    };
    pub use crate::hdl::generate_multiplier_expression;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    #[test]
    fn test_end_to_end_reference_vectors() {
        assert_eq!(encode_fixed(28.5, 2), "+00-00.+0");
        assert_eq!(decode("+00-00.+").unwrap(), 28.5);
        assert_eq!(encode_integer(&BigInt::from(28)), "+00-00");
        assert_eq!(encode_integer_bounded(&BigInt::from(158), 2), "+0+00000");
    }

    #[test]
    fn test_encode_analyze_generate_pipeline() {
        let csd = encode_integer(&BigInt::from(28));

        // The same string feeds both downstream consumers independently
        let pattern = longest_repeated_substring(&csd);
        assert!(pattern.is_empty() || csd.contains(&pattern));

        let max_power = csd.len() as u32 - 1;
        let verilog = generate_multiplier_expression(&csd, 8, max_power).unwrap();
        assert_eq!(verilog.matches("module csd_multiplier").count(), 1);
        assert_eq!(verilog.matches("endmodule").count(), 1);
    }

    proptest! {
        #[test]
        fn prop_integer_round_trip(n in any::<i64>()) {
            let v = BigInt::from(n);
            prop_assert_eq!(decode_integer(&encode_integer(&v)).unwrap(), v);
        }

        #[test]
        fn prop_fixed_round_trip_eighths(n in any::<i64>()) {
            // Multiples of 1/8 with four fractional digits decode exactly
            let f = n as f64 / 8.0;
            prop_assert_eq!(decode(&encode_fixed(f, 4)).unwrap(), f);
        }

        #[test]
        fn prop_no_adjacent_nonzero(n in any::<i64>()) {
            let csd = encode_integer(&BigInt::from(n));
            let digits: Vec<char> = csd.chars().collect();
            for pair in digits.windows(2) {
                prop_assert!(pair[0] == '0' || pair[1] == '0', "{}", csd);
            }
        }

        #[test]
        fn prop_decode_strategies_agree(n in any::<i32>(), places in 0u32..8) {
            let csd = encode_fixed(n as f64 / 16.0, places);
            prop_assert_eq!(
                decode(&csd).unwrap(),
                decode_positional(&csd).unwrap()
            );
        }
    }

    quickcheck::quickcheck! {
        fn qc_bounded_budget_respected(n: i64, k: u8) -> bool {
            let csd = encode_integer_bounded(&BigInt::from(n), k as u32);
            csd.chars().filter(|&c| c != '0').count() <= k as usize
        }

        fn qc_lossy_matches_strict_on_valid_input(n: i32) -> bool {
            let csd = encode_fixed(n as f64 / 4.0, 3);
            decode_lossy(&csd) == decode(&csd).unwrap()
        }
    }
}
