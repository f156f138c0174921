//! Simulator error definitions.
//!
//! This module defines the error channel of the simulator. It provides:
//! 1. **Decode Errors:** Words that cannot be classified as a supported instruction.
//! 2. **Simulation Errors:** Decode failures tagged with their program counter,
//!    malformed program images, and configuration parse failures.
//!
//! Hazard stalls and branch mispredictions are normal control flow and never
//! surface here.

use thiserror::Error;

/// Reasons a 32-bit word could not be decoded.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The major opcode (bits 6-0) is not one of the supported families.
    #[error("unsupported opcode {opcode:#09b}")]
    UnsupportedOpcode {
        /// The offending 7-bit opcode.
        opcode: u32,
    },

    /// The opcode is supported but its function codes select an operation
    /// outside the implemented subset (e.g. `BLTU`, `LB`, `SLT`).
    #[error("unsupported function code funct3={funct3:#05b} funct7={funct7:#09b} for opcode {opcode:#09b}")]
    UnsupportedFunct {
        /// The 7-bit opcode.
        opcode: u32,
        /// The 3-bit funct3 field.
        funct3: u32,
        /// The 7-bit funct7 field.
        funct7: u32,
    },
}

/// Top-level error type returned by the simulator.
#[derive(Error, Debug)]
pub enum SimError {
    /// An instruction in the decode stage could not be decoded.
    ///
    /// The pipeline slot it occupied has already been emptied; the caller may
    /// keep advancing the simulation.
    #[error("decode error at pc={pc:#010x} (raw={raw:#010x}): {source}")]
    Decode {
        /// Program counter of the offending instruction.
        pc: u32,
        /// Raw instruction word.
        raw: u32,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// A program image segment is not a whole number of 32-bit words.
    #[error("malformed {segment} image: {len} bytes is not a multiple of 4")]
    MalformedImage {
        /// Name of the segment (`"text"` or `"data"`).
        segment: &'static str,
        /// Length of the blob in bytes.
        len: usize,
    },

    /// The JSON configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias for results carrying a [`SimError`].
pub type SimResult<T> = Result<T, SimError>;
