//! ALU arithmetic operations.
//!
//! Addition, subtraction and multiplication wrap at 32 bits. Division and
//! remainder follow the RISC-V M-extension rules for the corner cases:
//! dividing by zero yields -1 (quotient) or the dividend (remainder), and
//! `i32::MIN / -1` yields `i32::MIN` with remainder 0.

use crate::isa::instruction::AluOp;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Div => {
            if b == 0 {
                -1
            } else {
                a.wrapping_div(b)
            }
        }
        AluOp::Rem => {
            if b == 0 {
                a
            } else {
                a.wrapping_rem(b)
            }
        }
        _ => 0,
    }
}
