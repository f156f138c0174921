//! Memory system seen by the pipeline.
//!
//! The simulated machine has split instruction and data memories with
//! single-cycle access; there is no bus, cache, or device model.

/// Instruction and data memories.
pub mod memory;

pub use memory::{DataMemory, InstructionMemory};
