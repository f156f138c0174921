//! RISC-V Base Integer Instruction Set (RV32I subset).
//!
//! Only the families the pipeline executes are listed: register and
//! immediate arithmetic, word loads and stores, conditional branches,
//! and the two jump-and-link forms.

/// Function code 3 definitions for base integer instructions.
pub mod funct3;

/// Function code 7 definitions for base integer instructions.
pub mod funct7;

/// Major opcodes of the supported instruction families.
pub mod opcodes;
