//! Sparse data memory.
//!
//! Words are stored by byte address. Reading an address that was never
//! written returns 0; there is no access-fault concept.

use std::collections::BTreeMap;

use crate::common::constants::WORD_BYTES;

/// Sparse mapping from address to signed 32-bit word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMemory {
    words: BTreeMap<u32, i32>,
}

impl DataMemory {
    /// Creates an empty data memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a data memory seeded with `image` at addresses 0, 4, 8, ...
    pub fn from_image(image: &[i32]) -> Self {
        let words = (0..)
            .step_by(WORD_BYTES as usize)
            .zip(image.iter().copied())
            .collect();
        Self { words }
    }

    /// Reads the word at `addr`, or 0 if it was never written.
    pub fn read(&self, addr: u32) -> i32 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    /// Writes `val` at `addr`.
    pub fn write(&mut self, addr: u32, val: i32) {
        let _ = self.words.insert(addr, val);
    }

    /// Iterates over every stored `(address, value)` pair in address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.words.iter().map(|(&addr, &val)| (addr, val))
    }

    /// Number of addresses holding a value.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no address has been seeded or written.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Dumps every stored word to stdout.
    pub fn dump(&self) {
        for (addr, val) in self.iter() {
            println!("{addr:#010x}: {:#010x} ({val})", val as u32);
        }
    }
}
