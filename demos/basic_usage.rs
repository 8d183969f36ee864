// ============================================================================
// Basic Usage Example
// ============================================================================

use csdigit::prelude::*;
use num_bigint::BigInt;

fn main() {
    println!("=== CSD Conversion Example ===\n");

    // Integer encode/decode round trip
    let value = BigInt::from(28);
    let csd = encode_integer(&value);
    println!("{} -> {}", value, csd);
    println!("{} -> {}\n", csd, decode_integer(&csd).unwrap());

    // Fixed-point with two fractional digits
    let fixed = encode_fixed(28.5, 2);
    println!("28.5 (2 places) -> {}", fixed);
    println!("{} -> {}\n", fixed, decode(&fixed).unwrap());

    // Sparse approximation bounded to two non-zero digits
    let sparse = encode_integer_bounded(&BigInt::from(158), 2);
    println!("158 (nnz <= 2) -> {} (~{})", sparse, decode_lossy(&sparse));

    // Repeated digit pattern, useful for factoring a multiplier
    let pattern = longest_repeated_substring("+-00+-00+-00+-0");
    println!("repeated pattern: {}\n", pattern);

    // Verilog constant multiplier for x * 28
    let csd = encode_integer(&BigInt::from(28));
    let max_power = csd.len() as u32 - 1;
    match generate_multiplier_expression(&csd, 8, max_power) {
        Ok(verilog) => println!("{}", verilog),
        Err(e) => eprintln!("generation failed: {}", e),
    }
}
