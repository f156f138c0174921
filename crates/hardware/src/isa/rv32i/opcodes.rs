//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) understood by the decoder.

/// Load instructions (only LW is executed).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, SLLI, SRLI).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (only SW is executed).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, MUL, ...).
pub const OP_REG: u32 = 0b0110011;

/// Conditional Branch instructions (BEQ, BNE, BLT, BGE).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;
