//! Core processor implementation.
//!
//! This module contains the CPU, the five-stage pipeline, the architectural
//! register file, and the functional units used by execute.

/// Architectural register state.
pub mod arch;

/// CPU core state and the per-cycle driver.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, forwarding).
pub mod pipeline;

/// Execution units (ALU, branch resolution and prediction).
pub mod units;

pub use self::cpu::Cpu;
