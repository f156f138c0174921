//! Common utilities and types used throughout the pipeline simulator.
//!
//! This module provides building blocks shared across all components:
//! 1. **Constants:** Instruction field layout, register count, and cycle caps.
//! 2. **Error Handling:** Decode and simulation error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decoding, loading, and configuration.
pub mod error;

pub use error::{DecodeError, SimError, SimResult};
