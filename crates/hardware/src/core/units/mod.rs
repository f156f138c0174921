//! Execution units.
//!
//! This module contains the functional units used by the Execute stage:
//! the integer ALU and the branch resolution unit with its predictor.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch resolution unit and two-bit branch predictor.
pub mod bru;
