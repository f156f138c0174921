//! ALU bitwise logical operations.

use crate::isa::instruction::AluOp;

/// Executes a bitwise logical operation.
///
/// Returns `0` for non-logical opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Xor => a ^ b,
        AluOp::Or => a | b,
        AluOp::And => a & b,
        _ => 0,
    }
}
