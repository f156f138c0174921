//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It
//! reads the word at the program counter into the IF/ID latch and advances
//! the counter by one word. When decode has just inserted a stall it rolled
//! the counter back onto the stalled instruction, so the same word is
//! fetched again and no new instruction enters the pipeline.

use tracing::trace;

use crate::common::constants::WORD_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::latches::{IfIdEntry, Latch};

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Marks IF/ID empty and sets the exhausted flag once the program counter
///   is past the text segment
/// - Otherwise latches `(pc, word)` and advances the program counter by 4
pub fn fetch_stage(cpu: &mut Cpu) {
    let pc = cpu.pc;
    match cpu.imem.fetch(pc) {
        Some(inst) => {
            trace!("IF  {pc:#010x}: {inst:#010x}");
            cpu.if_id = Latch::Valid(IfIdEntry { pc, inst });
            cpu.pc = pc.wrapping_add(WORD_BYTES);
            cpu.program_exhausted = false;
        }
        None => {
            cpu.if_id = Latch::Empty;
            cpu.program_exhausted = true;
        }
    }
}
