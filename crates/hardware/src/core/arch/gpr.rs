//! RISC-V General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` always reads as zero; writes to it are discarded.
//! 3. **Reporting:** Iteration over, and dumping of, the non-zero registers.

use crate::common::constants::REG_COUNT;

/// General-Purpose Register file.
///
/// Register `x0` is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; REG_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The value stored in the register. Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> i32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The value to write.
    pub fn write(&mut self, idx: usize, val: i32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all 32 register values, `x0` included.
    pub const fn to_array(&self) -> [i32; REG_COUNT] {
        self.regs
    }

    /// Iterates over `(index, value)` for every register holding a non-zero value.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.regs
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, val)| val != 0)
    }

    /// Dumps the non-zero registers to stdout, one per line.
    pub fn dump(&self) {
        for (idx, val) in self.iter_nonzero() {
            println!("x{idx:<2} = {val:>11} ({:#010x})", val as u32);
        }
    }
}
