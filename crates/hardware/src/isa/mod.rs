//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcodes, function codes, the decoder, and the disassembler for
//! the RV32I subset executed by the pipeline.
//!
//! # Extensions
//!
//! * `rv32i`: Base integer arithmetic, word loads/stores, branches, jumps.
//! * `rv32m`: MUL, DIV and REM from the multiply/divide extension.

/// Instruction decoding from raw words into [`instruction::Instruction`].
pub mod decode;

/// Instruction disassembler for viewers, tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and decoded instruction types.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

/// Integer multiply/divide extension (MUL, DIV, REM).
pub mod rv32m;
