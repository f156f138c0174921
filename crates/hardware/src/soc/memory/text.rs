//! Read-only instruction memory.

use crate::common::constants::WORD_BYTES;

/// The text segment: a flat sequence of instruction words at addresses
/// 0, 4, 8, ...
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructionMemory {
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Wraps a sequence of instruction words.
    pub const fn new(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Returns the word at `pc`, or `None` once `pc` is past the end.
    pub fn fetch(&self, pc: u32) -> Option<u32> {
        self.words.get((pc / WORD_BYTES) as usize).copied()
    }

    /// First address past the last instruction.
    pub fn end_address(&self) -> u32 {
        (self.words.len() as u32).saturating_mul(WORD_BYTES)
    }

    /// Number of instruction words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` for an empty program.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The raw instruction words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}
