// ============================================================================
// Codec Module
// Conversion between numeric values and canonical signed digit strings
// ============================================================================

pub mod decode;
pub mod digit;
pub mod encode;
pub mod errors;

pub use decode::{decode, decode_integer, decode_lossy, decode_positional};
pub use digit::CsdDigit;
pub use encode::{encode_fixed, encode_fixed_bounded, encode_integer, encode_integer_bounded};
pub use errors::{CsdError, CsdResult};
