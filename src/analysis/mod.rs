// ============================================================================
// Analysis Module
// String-level analysis helpers for CSD digit patterns
// ============================================================================

pub mod lcsre;

pub use lcsre::longest_repeated_substring;
