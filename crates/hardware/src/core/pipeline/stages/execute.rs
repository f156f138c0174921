//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Resolution:** Uses the forwarding unit when forwarding is enabled.
//! 2. **Arithmetic Execution:** ALU operations, effective addresses, and link addresses.
//! 3. **Branch Resolution:** Evaluates branch conditions and targets. For
//!    instructions decoded with prediction enabled, checks the decode-time
//!    prediction, trains the predictor, and redirects on a mismatch; jumps
//!    redirect here as well.

use tracing::{debug, trace};

use crate::common::constants::WORD_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::control::{Redirect, RedirectCause};
use crate::core::pipeline::forwarding::forward_operands;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, Latch};
use crate::core::units::alu::Alu;
use crate::core::units::bru::{self, BranchPredictor};
use crate::isa::instruction::Instruction;

/// JALR targets have bit 0 cleared.
const JALR_ALIGNMENT_MASK: u32 = !1;

/// Executes the instruction execute stage.
///
/// Consumes ID/EX and produces EX/MEM. Empty slots and bubbles pass straight
/// through.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn execute_stage(cpu: &mut Cpu) {
    cpu.ex_mem = match cpu.id_ex.take() {
        Latch::Empty => Latch::Empty,
        Latch::Bubble => Latch::Bubble,
        Latch::Valid(entry) => Latch::Valid(execute(cpu, &entry)),
    };
}

fn execute(cpu: &mut Cpu, entry: &IdExEntry) -> ExMemEntry {
    let (a, b) = if cpu.features.forwarding {
        // EX/MEM still holds last cycle's entry; wb_latch holds last cycle's MEM/WB.
        let ops = forward_operands(entry, &cpu.ex_mem, &cpu.wb_latch);
        if ops.forwarded {
            cpu.stats.forwards += 1;
            debug!("EX  {:#010x}: operands forwarded", entry.pc);
        }
        (ops.rs1, ops.rs2)
    } else {
        (entry.rv1, entry.rv2)
    };

    let pc = entry.pc;
    let link = pc.wrapping_add(WORD_BYTES) as i32;
    let mut out = ExMemEntry {
        pc,
        raw: entry.raw,
        inst: entry.inst,
        alu: 0,
        store_data: 0,
        taken: false,
        target: 0,
        speculative: entry.speculative,
    };

    match entry.inst {
        Instruction::R { op, .. } => out.alu = Alu::execute(op, a, b),
        Instruction::I { imm, op, .. } => out.alu = Alu::execute(op, a, imm),
        Instruction::Load { imm, .. } => out.alu = a.wrapping_add(imm),
        Instruction::Store { imm, .. } => {
            out.alu = a.wrapping_add(imm);
            out.store_data = b;
        }
        Instruction::Branch { imm, cond, .. } => {
            out.taken = bru::resolve(cond, a, b);
            out.target = pc.wrapping_add_signed(imm);
            if entry.speculative {
                check_prediction(cpu, entry, out.taken, out.target);
            }
        }
        Instruction::Jal { imm, .. } => {
            out.alu = link;
            out.taken = true;
            out.target = pc.wrapping_add_signed(imm);
        }
        Instruction::Jalr { imm, .. } => {
            out.alu = link;
            out.taken = true;
            out.target = (a.wrapping_add(imm) as u32) & JALR_ALIGNMENT_MASK;
        }
    }

    let is_jump = matches!(entry.inst, Instruction::Jal { .. } | Instruction::Jalr { .. });
    if entry.speculative && is_jump {
        cpu.redirect(Redirect {
            pc,
            target: out.target,
            cause: RedirectCause::Jump,
        });
    }

    trace!("EX  {pc:#010x}: {} alu={}", entry.inst, out.alu);
    out
}

/// Compares the decode-time prediction with the resolved outcome, trains the
/// predictor, and corrects the program counter on a mismatch.
fn check_prediction(cpu: &mut Cpu, entry: &IdExEntry, taken: bool, target: u32) {
    cpu.branch_predictor.update_branch(entry.pc, taken);

    if entry.pred_taken == taken {
        cpu.stats.branch_correct += 1;
        trace!("EX  {:#010x}: prediction correct (taken={taken})", entry.pc);
        return;
    }

    cpu.stats.branch_incorrect += 1;
    let next = if taken {
        target
    } else {
        entry.pc.wrapping_add(WORD_BYTES)
    };
    cpu.redirect(Redirect {
        pc: entry.pc,
        target: next,
        cause: RedirectCause::Mispredict,
    });
}
