//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline. It performs:
//! 1. **Loads and Stores:** Whole-word accesses against data memory.
//! 2. **Pass-through:** ALU and link results move on to write-back unchanged.
//! 3. **Late Redirects:** Taken branches and jumps decoded with branch
//!    prediction disabled redirect fetch here and flush the younger latches.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::control::{Redirect, RedirectCause};
use crate::core::pipeline::latches::{ExMemEntry, Latch, MemWbEntry};
use crate::isa::instruction::Instruction;

/// Executes the memory stage of the pipeline.
///
/// Reads EX/MEM without clearing it, because execute still uses that entry
/// as its nearer forwarding source later in the same cycle.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn mem_stage(cpu: &mut Cpu) {
    cpu.mem_wb = match cpu.ex_mem {
        Latch::Empty => Latch::Empty,
        Latch::Bubble => Latch::Bubble,
        Latch::Valid(entry) => Latch::Valid(access(cpu, &entry)),
    };
}

fn access(cpu: &mut Cpu, entry: &ExMemEntry) -> MemWbEntry {
    let result = match entry.inst {
        Instruction::Load { .. } => {
            let addr = entry.alu as u32;
            let value = cpu.dmem.read(addr);
            trace!("MEM {:#010x}: load [{addr:#010x}] = {value}", entry.pc);
            value
        }
        Instruction::Store { .. } => {
            let addr = entry.alu as u32;
            cpu.dmem.write(addr, entry.store_data);
            trace!(
                "MEM {:#010x}: store [{addr:#010x}] = {}",
                entry.pc, entry.store_data
            );
            0
        }
        Instruction::R { .. }
        | Instruction::I { .. }
        | Instruction::Jal { .. }
        | Instruction::Jalr { .. } => entry.alu,
        Instruction::Branch { .. } => 0,
    };

    if !entry.speculative && entry.inst.is_control() && entry.taken {
        let cause = if matches!(entry.inst, Instruction::Branch { .. }) {
            RedirectCause::TakenBranch
        } else {
            RedirectCause::Jump
        };
        cpu.redirect(Redirect {
            pc: entry.pc,
            target: entry.target,
            cause,
        });
    }

    MemWbEntry {
        pc: entry.pc,
        raw: entry.raw,
        inst: entry.inst,
        result,
    }
}
