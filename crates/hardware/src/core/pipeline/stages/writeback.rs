//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! commits results to the register file and counts retired instructions.
//! The consumed MEM/WB entry is kept in `wb_latch`, where execute picks it up
//! as the farther forwarding source.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::{Latch, MemWbEntry};
use crate::isa::instruction::Instruction;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Writes the result of R, I, Load, JAL and JALR instructions to `rd`
///   unless `rd` is `x0`
/// - Updates retirement and instruction-mix statistics
pub fn wb_stage(cpu: &mut Cpu) {
    let slot = cpu.mem_wb.take();
    if let Latch::Valid(entry) = &slot {
        retire(cpu, entry);
    }
    cpu.wb_latch = slot;
}

fn retire(cpu: &mut Cpu, entry: &MemWbEntry) {
    if let Some(rd) = entry.inst.dest() {
        cpu.regs.write(rd, entry.result);
        trace!("WB  {:#010x}: x{rd} = {}", entry.pc, entry.result);
    }

    let stats = &mut cpu.stats;
    stats.instructions_retired += 1;
    match entry.inst {
        Instruction::R { .. } | Instruction::I { .. } => stats.inst_alu += 1,
        Instruction::Load { .. } => stats.inst_load += 1,
        Instruction::Store { .. } => stats.inst_store += 1,
        Instruction::Branch { .. } => stats.inst_branch += 1,
        Instruction::Jal { .. } | Instruction::Jalr { .. } => stats.inst_jump += 1,
    }
}
