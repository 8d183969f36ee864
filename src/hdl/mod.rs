// ============================================================================
// HDL Module
// Verilog code generation for CSD constant multipliers
// ============================================================================

pub mod multiplier;

pub use multiplier::generate_multiplier_expression;
