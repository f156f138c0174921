//! Architectural register state.
//!
//! The only architectural register state modelled is the integer register
//! file; the program counter lives with the pipeline engine.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
