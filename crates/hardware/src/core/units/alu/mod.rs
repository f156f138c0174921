//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! All operations work on signed 32-bit values and wrap on overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Rem
//! - [`logic`]:      Xor, Or, And
//! - [`shifts`]:     Sll, Srl

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical operations (xor, or, and).
pub mod logic;

/// Logical shift operations (sll, srl).
pub mod shifts;

use crate::isa::instruction::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (the shift amount for shifts)
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::units::alu::Alu;
    /// use rvpipe_core::isa::instruction::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 10, 5), 15);
    /// assert_eq!(Alu::execute(AluOp::Sub, 3, 5), -2);
    /// assert_eq!(Alu::execute(AluOp::Srl, -1, 28), 0xF);
    /// assert_eq!(Alu::execute(AluOp::Div, 7, 0), -1);
    /// ```
    pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div | AluOp::Rem => {
                arithmetic::execute(op, a, b)
            }
            AluOp::Xor | AluOp::Or | AluOp::And => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl => shifts::execute(op, a, b),
        }
    }
}
