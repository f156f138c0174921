//! ALU shift operations.
//!
//! Both shifts are logical: SRL fills with zeros regardless of the sign of
//! the operand. Shift amounts are masked to 5 bits (0-31).

use crate::common::constants::SHAMT_MASK;
use crate::isa::instruction::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - Either [`AluOp::Sll`] or [`AluOp::Srl`].
/// * `a`  - The value to shift.
/// * `b`  - The shift amount; only the low five bits are used.
///
/// Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let shamt = (b & SHAMT_MASK) as u32;
    match op {
        AluOp::Sll => ((a as u32) << shamt) as i32,
        AluOp::Srl => ((a as u32) >> shamt) as i32,
        _ => 0,
    }
}
