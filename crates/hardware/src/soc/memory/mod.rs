//! Simulated memories.
//!
//! This module implements the two memories seen by the pipeline. It provides:
//! 1. **Instruction Memory:** The immutable text segment, indexed by `pc / 4`.
//! 2. **Data Memory:** A sparse word store seeded from the data segment.

/// Sparse word-addressed data memory.
pub mod data;

/// Read-only instruction memory.
pub mod text;

pub use data::DataMemory;
pub use text::InstructionMemory;
