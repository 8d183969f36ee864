// ============================================================================
// CSD Constant Multiplier Generator
// Emits a combinational Verilog module computing x * constant
// ============================================================================

use crate::codec::digit::CsdDigit;
use crate::codec::errors::{CsdError, CsdResult};
use std::fmt::Write;

/// Generate a Verilog module computing `result = x * constant` for the
/// constant described by `csd`.
///
/// Each non-zero digit becomes one arithmetically-shifted copy of the signed
/// input `x` (shift amount = the digit's power), and the result is their
/// sum/difference. An all-zero digit string produces a constant-zero
/// assignment with no shift wires. The output is static text only; nothing
/// is simulated or synthesized here.
///
/// `input_width` is the bit width of `x` (must be at least 1); `max_power`
/// is the power of the most significant digit, so `csd` must contain exactly
/// `max_power + 1` characters.
///
/// Known quirk, kept for conformance with the reference vectors: the first
/// non-zero term is emitted without a sign, so a leading `-` digit
/// contributes positively to the expression.
///
/// # Errors
/// - [`CsdError::LengthMismatch`] if `csd.len() != max_power + 1`
/// - [`CsdError::InvalidCharacter`] for any character outside `{+, -, 0}`
///
/// # Example
/// ```
/// use csdigit::hdl::generate_multiplier_expression;
///
/// let verilog = generate_multiplier_expression("+00-00+0", 8, 7).unwrap();
/// assert!(verilog.contains("module csd_multiplier"));
/// assert!(verilog.contains("input signed [7:0] x"));
/// assert!(verilog.contains("output signed [14:0] result"));
/// ```
pub fn generate_multiplier_expression(
    csd: &str,
    input_width: u32,
    max_power: u32,
) -> CsdResult<String> {
    let length = csd.chars().count();
    if length != max_power as usize + 1 {
        return Err(CsdError::LengthMismatch { length, max_power });
    }

    let mut terms: Vec<(u32, CsdDigit)> = Vec::new();
    for (position, ch) in csd.chars().enumerate() {
        let digit = match CsdDigit::from_char(ch) {
            Some(d) => d,
            None => {
                return Err(CsdError::InvalidCharacter {
                    character: ch,
                    position,
                })
            },
        };
        if digit.is_nonzero() {
            // Most significant digit carries the highest power
            terms.push((max_power - position as u32, digit));
        }
    }

    let result_width = input_width + max_power;
    let mut verilog = format!(
        "\nmodule csd_multiplier (\n    input signed [{}:0] x,      // Input value\n    output signed [{}:0] result // Result of multiplication\n);",
        input_width - 1,
        result_width - 1
    );

    if !terms.is_empty() {
        verilog.push_str("\n\n    // Create shifted versions of input");
        let mut powers: Vec<u32> = terms.iter().map(|&(p, _)| p).collect();
        powers.sort_unstable_by(|a, b| b.cmp(a));
        powers.dedup();
        for p in powers {
            let _ = write!(
                verilog,
                "\n    wire signed [{}:0] x_shift{} = x <<< {};",
                result_width - 1,
                p,
                p
            );
        }
    }

    verilog.push_str("\n\n    // CSD implementation");
    if terms.is_empty() {
        verilog.push_str("\n    assign result = 0;");
    } else {
        let (first_power, _) = terms[0];
        let mut expr = format!("x_shift{}", first_power);
        for &(power, digit) in &terms[1..] {
            let op = if digit == CsdDigit::Plus { '+' } else { '-' };
            let _ = write!(expr, " {} x_shift{}", op, power);
        }
        let _ = write!(verilog, "\n    assign result = {};", expr);
    }

    verilog.push_str("\nendmodule\n");
    Ok(verilog)
}
