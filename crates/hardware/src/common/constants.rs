//! Global Simulator Constants.
//!
//! This module defines constants shared across the simulator. It includes:
//! 1. **Instruction Constants:** Word size and field masks/shifts for decoding.
//! 2. **Architectural Constants:** Register file size.
//! 3. **Simulation Constants:** Cycle caps for run-to-completion loops.

/// Size of one instruction or data word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers (`x0`-`x31`).
pub const REG_COUNT: usize = 32;

/// Width of an instruction word in bits.
pub const INSTRUCTION_WIDTH: u32 = 32;

/// Bit mask for extracting the opcode field from an instruction.
pub const OPCODE_MASK: u32 = 0x7F;

/// Bit mask for extracting a 5-bit register index field.
pub const REG_FIELD_MASK: u32 = 0x1F;

/// Bit position shift for the destination register (rd) field.
pub const RD_SHIFT: u32 = 7;

/// Bit position shift for the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;

/// Bit position shift for the first source register (rs1) field.
pub const RS1_SHIFT: u32 = 15;

/// Bit position shift for the second source register (rs2) field.
pub const RS2_SHIFT: u32 = 20;

/// Bit position shift for the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Shift amounts only use the low five bits of the operand.
pub const SHAMT_MASK: i32 = 0x1F;

/// Upper bound on cycles for a run-to-completion loop.
///
/// Guarantees termination for programs that never fall off the end of the
/// text segment (e.g. an unconditional backward jump).
pub const DEFAULT_MAX_CYCLES: u64 = 10_000;
