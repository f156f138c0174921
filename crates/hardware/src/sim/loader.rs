//! Program Image Loading.
//!
//! This module turns the assembler's output into the two segments the engine runs. It provides:
//! 1. **Byte images:** Little-endian 32-bit word blobs for the text and data segments.
//! 2. **Word images:** Pre-split word vectors for callers that assemble in memory.
//! 3. **Validation:** A truncated blob fails before any cycle runs.

use crate::common::constants::WORD_BYTES;
use crate::common::error::{SimError, SimResult};
use crate::soc::{DataMemory, InstructionMemory};

/// The immutable text and data segments of a program.
///
/// The text segment becomes instruction memory, indexed by `pc / 4`. The
/// data segment seeds data memory at addresses 0, 4, 8, and so on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramImage {
    text: Vec<u32>,
    data: Vec<i32>,
}

impl ProgramImage {
    /// Builds an image from little-endian byte blobs.
    ///
    /// # Arguments
    ///
    /// * `text` - Encoded instructions, four bytes each.
    /// * `data` - Initial data words, four bytes each.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MalformedImage`] naming the segment whose length is
    /// not a multiple of four.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::sim::loader::ProgramImage;
    ///
    /// let image = ProgramImage::from_bytes(&[0x93, 0x02, 0xA0, 0x00], &[]).unwrap();
    /// assert_eq!(image.text(), &[0x00A0_0293]);
    /// assert!(ProgramImage::from_bytes(&[0x93, 0x02], &[]).is_err());
    /// ```
    pub fn from_bytes(text: &[u8], data: &[u8]) -> SimResult<Self> {
        let text = words_le(text, "text")?
            .into_iter()
            .map(u32::from_le_bytes)
            .collect();
        let data = words_le(data, "data")?
            .into_iter()
            .map(i32::from_le_bytes)
            .collect();
        Ok(Self { text, data })
    }

    /// Builds an image from already-split words.
    pub const fn from_words(text: Vec<u32>, data: Vec<i32>) -> Self {
        Self { text, data }
    }

    /// Encoded instructions in program order.
    pub fn text(&self) -> &[u32] {
        &self.text
    }

    /// Initial data words in address order.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Fresh instruction memory holding the text segment.
    pub fn instruction_memory(&self) -> InstructionMemory {
        InstructionMemory::new(self.text.clone())
    }

    /// Fresh data memory seeded from the data segment.
    pub fn data_memory(&self) -> DataMemory {
        DataMemory::from_image(&self.data)
    }
}

fn words_le(bytes: &[u8], segment: &'static str) -> SimResult<Vec<[u8; 4]>> {
    let width = WORD_BYTES as usize;
    if bytes.len() % width != 0 {
        return Err(SimError::MalformedImage {
            segment,
            len: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(width)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
        .collect())
}
