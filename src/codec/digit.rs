// ============================================================================
// CSD Digit
// The three-valued digit of a canonical signed digit sequence
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single canonical signed digit with weight -1, 0 or +1.
///
/// A valid CSD sequence never places two non-zero digits next to each other.
/// The encoders uphold that invariant through their threshold rule; it is not
/// re-checked after construction.
///
/// # Example
/// ```
/// use csdigit::codec::CsdDigit;
///
/// assert_eq!(CsdDigit::from_char('+'), Some(CsdDigit::Plus));
/// assert_eq!(CsdDigit::Minus.weight(), -1);
/// assert_eq!(CsdDigit::Zero.to_char(), '0');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CsdDigit {
    /// Weight -1, written `-`
    Minus,
    /// Weight 0, written `0`
    Zero,
    /// Weight +1, written `+`
    Plus,
}

impl CsdDigit {
    /// Numeric weight of this digit.
    #[inline]
    pub const fn weight(self) -> i8 {
        match self {
            CsdDigit::Minus => -1,
            CsdDigit::Zero => 0,
            CsdDigit::Plus => 1,
        }
    }

    /// Character used in the textual serialization.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            CsdDigit::Minus => '-',
            CsdDigit::Zero => '0',
            CsdDigit::Plus => '+',
        }
    }

    /// Parse a single CSD character. Returns `None` for anything outside
    /// `{'+', '-', '0'}` (including the radix point).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(CsdDigit::Minus),
            '0' => Some(CsdDigit::Zero),
            '+' => Some(CsdDigit::Plus),
            _ => None,
        }
    }

    /// Check if the digit carries a non-zero weight.
    #[inline]
    pub const fn is_nonzero(self) -> bool {
        !matches!(self, CsdDigit::Zero)
    }
}

impl fmt::Display for CsdDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights() {
        assert_eq!(CsdDigit::Minus.weight(), -1);
        assert_eq!(CsdDigit::Zero.weight(), 0);
        assert_eq!(CsdDigit::Plus.weight(), 1);
    }

    #[test]
    fn test_char_round_trip() {
        for d in [CsdDigit::Minus, CsdDigit::Zero, CsdDigit::Plus] {
            assert_eq!(CsdDigit::from_char(d.to_char()), Some(d));
        }
    }

    #[test]
    fn test_from_char_rejects_non_digits() {
        assert_eq!(CsdDigit::from_char('.'), None);
        assert_eq!(CsdDigit::from_char('1'), None);
        assert_eq!(CsdDigit::from_char('x'), None);
    }

    #[test]
    fn test_is_nonzero() {
        assert!(CsdDigit::Plus.is_nonzero());
        assert!(CsdDigit::Minus.is_nonzero());
        assert!(!CsdDigit::Zero.is_nonzero());
    }

    #[test]
    fn test_display() {
        assert_eq!(CsdDigit::Plus.to_string(), "+");
        assert_eq!(CsdDigit::Minus.to_string(), "-");
        assert_eq!(CsdDigit::Zero.to_string(), "0");
    }
}
