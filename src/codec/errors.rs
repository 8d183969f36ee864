// ============================================================================
// Codec Errors
// Error types for CSD parsing, decoding and code generation
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors produced by the strict decoders and the Verilog generator.
///
/// Encoders are total over their documented domain and never fail; everything
/// that consumes a CSD string validates eagerly and reports one of these
/// kinds instead of producing a silently wrong value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CsdError {
    /// A character other than `+`, `-`, `0` or `.` in a decoded string
    InvalidDigit { digit: char, position: usize },
    /// Radix point present where forbidden, or more than one radix point
    MalformedInput { position: usize },
    /// CSD string length disagrees with the declared highest power
    LengthMismatch { length: usize, max_power: u32 },
    /// A character outside `{+, -, 0}` passed to the Verilog generator
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for CsdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsdError::InvalidDigit { digit, position } => {
                write!(f, "invalid CSD digit {:?} at position {}", digit, position)
            },
            CsdError::MalformedInput { position } => {
                write!(f, "unexpected radix point at position {}", position)
            },
            CsdError::LengthMismatch { length, max_power } => write!(
                f,
                "CSD length {} does not match max power {} (expected {})",
                length,
                max_power,
                max_power + 1
            ),
            CsdError::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "invalid character {:?} at position {}: only '+', '-' and '0' are allowed",
                    character, position
                )
            },
        }
    }
}

impl std::error::Error for CsdError {}

/// Result type alias for CSD operations
pub type CsdResult<T> = Result<T, CsdError>;
