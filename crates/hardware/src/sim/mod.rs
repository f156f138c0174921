//! Simulation driver and program loading.
//!
//! Provides the program image type consumed at construction and the
//! [`Simulator`] that steps the pipeline and exposes its state.

/// Program image parsing.
pub mod loader;

/// Stepping, inspection, and control API.
pub mod simulator;

pub use self::loader::ProgramImage;
pub use self::simulator::{PipelineSnapshot, RunOutcome, Simulator, StopReason};
