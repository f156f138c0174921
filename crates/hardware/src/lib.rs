//! Instructional RV32I pipeline simulator library.
//!
//! This crate implements a cycle-accurate five-stage RISC-V pipeline with the following:
//! 1. **Core:** Fetch, decode, execute, memory, and write-back stages joined by explicit latches.
//! 2. **Features:** Two-bit branch prediction, operand forwarding, and hazard detection,
//!    each independently toggleable.
//! 3. **ISA:** Decoding and disassembly for the RV32I subset plus MUL/DIV/REM.
//! 4. **Memory:** Read-only instruction memory and sparse word-addressed data memory.
//! 5. **Simulation:** Program loading, configuration, and statistics collection.

/// Common types and constants (errors, field layouts).
pub mod common;
/// Simulator configuration (feature flags, predictor, cycle cap).
pub mod config;
/// CPU core (pipeline, registers, functional units).
pub mod core;
/// Instruction set (decode, instruction types, disassembly).
pub mod isa;
/// Program loading and the top-level simulator.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Error type returned by loading, configuration, and stepping.
pub use crate::common::error::SimError;
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories, latches, and statistics.
pub use crate::core::Cpu;
/// Program image consumed by the simulator.
pub use crate::sim::ProgramImage;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
