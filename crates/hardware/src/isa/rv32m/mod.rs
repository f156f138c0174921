//! RISC-V Multiply/Divide Extension (M) subset.
//!
//! These instructions share the `OP_REG` opcode with base integer arithmetic
//! but are distinguished by the `funct7` field being set to 1.
//!
//! # Structure
//!
//! - `funct3`: Function codes identifying MUL, DIV and REM.
//! - `funct7`: The M-extension marker.

/// Function code 3 definitions for multiply/divide operations.
pub mod funct3;

/// Function code 7 marker for multiply/divide operations.
pub mod funct7;
