//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried through the five-stage pipeline:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Slot States:** Every latch is empty, holds a stall bubble, or holds one instruction.
//! 2. **Instruction Flow:** Each entry carries the decoded instruction plus the values
//!    computed so far (operands, ALU result, branch outcome, loaded data).
//! 3. **Forwarding Sources:** The EX/MEM and MEM/WB entries report which register
//!    value, if any, they can bypass to a younger instruction.

use std::fmt;

use crate::isa::disasm::disassemble_word;
use crate::isa::instruction::Instruction;

/// Contents of one pipeline latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Latch<T> {
    /// Nothing in flight.
    Empty,
    /// A stall bubble inserted by the hazard unit. It carries no destination
    /// or result but occupies its slot as it drains.
    Bubble,
    /// An instruction in flight.
    Valid(T),
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Latch<T> {
    /// Returns `true` only for [`Latch::Empty`]; a bubble still occupies its slot.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for a stall bubble.
    pub const fn is_bubble(&self) -> bool {
        matches!(self, Self::Bubble)
    }

    /// The in-flight entry, if any.
    pub const fn entry(&self) -> Option<&T> {
        match self {
            Self::Valid(entry) => Some(entry),
            Self::Empty | Self::Bubble => None,
        }
    }

    /// Empties the latch and returns what it held.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T: fmt::Display> fmt::Display for Latch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("-"),
            Self::Bubble => f.write_str("(bubble)"),
            Self::Valid(entry) => entry.fmt(f),
        }
    }
}

/// IF/ID latch (Fetch to Decode).
pub type IfId = Latch<IfIdEntry>;
/// ID/EX latch (Decode to Execute).
pub type IdEx = Latch<IdExEntry>;
/// EX/MEM latch (Execute to Memory).
pub type ExMem = Latch<ExMemEntry>;
/// MEM/WB latch (Memory to Writeback).
pub type MemWb = Latch<MemWbEntry>;

/// Entry in the IF/ID pipeline latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter the word was fetched from.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub inst: u32,
}

impl fmt::Display for IfIdEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}: {}", self.pc, disassemble_word(self.inst))
    }
}

/// Entry in the ID/EX pipeline latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Value of `rs1` read from the register file during decode.
    pub rv1: i32,
    /// Value of `rs2` read from the register file during decode.
    pub rv2: i32,
    /// Direction predicted in decode (always `false` when prediction is off).
    pub pred_taken: bool,
    /// Branch prediction was enabled when this instruction was decoded.
    /// Control transfers resolve in EX when set and in MEM otherwise.
    pub speculative: bool,
}

impl fmt::Display for IdExEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}: {}", self.pc, self.inst)
    }
}

/// Entry in the EX/MEM pipeline latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// ALU result, effective address (loads/stores), or link address (jumps).
    pub alu: i32,
    /// Value to store (stores only).
    pub store_data: i32,
    /// Whether the control transfer is taken; always `true` for jumps.
    pub taken: bool,
    /// Control transfer target address.
    pub target: u32,
    /// Copied from [`IdExEntry::speculative`].
    pub speculative: bool,
}

impl ExMemEntry {
    /// Register and value this entry can forward to a younger instruction.
    ///
    /// Loads report their destination with no value: the loaded word only
    /// exists once the memory stage has run.
    pub const fn forward_value(&self) -> Option<(usize, Option<i32>)> {
        match self.inst.dest() {
            Some(rd) if self.inst.is_load() => Some((rd, None)),
            Some(rd) => Some((rd, Some(self.alu))),
            None => None,
        }
    }
}

impl fmt::Display for ExMemEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}: {}", self.pc, self.inst)
    }
}

/// Entry in the MEM/WB pipeline latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Value to write back (ALU result, loaded word, or link address).
    pub result: i32,
}

impl MemWbEntry {
    /// Register and value this entry writes back, if any.
    pub const fn forward_value(&self) -> Option<(usize, i32)> {
        match self.inst.dest() {
            Some(rd) => Some((rd, self.result)),
            None => None,
        }
    }
}

impl fmt::Display for MemWbEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}: {}", self.pc, self.inst)
    }
}
