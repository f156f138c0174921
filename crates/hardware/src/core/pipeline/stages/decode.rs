//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It performs:
//! 1. **Hazard Check:** Asks the hazard unit whether the instruction must wait.
//! 2. **Decoding:** Turns the raw word into an [`Instruction`].
//! 3. **Register Read:** Reads source operands from the register file.
//! 4. **Prediction:** Consults the branch predictor and redirects fetch early for
//!    branches predicted taken.

use tracing::{debug, trace, warn};

use crate::common::constants::WORD_BYTES;
use crate::common::error::{SimError, SimResult};
use crate::core::Cpu;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{IdExEntry, Latch};
use crate::core::units::bru::BranchPredictor;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Errors
///
/// Returns [`SimError::Decode`] when the word in IF/ID is not a supported
/// instruction. ID/EX is left empty in that case.
pub fn decode_stage(cpu: &mut Cpu) -> SimResult<()> {
    let Latch::Valid(fetched) = cpu.if_id else {
        cpu.id_ex = Latch::Empty;
        return Ok(());
    };

    if hazards::need_stall(fetched.inst, &cpu.ex_mem, &cpu.mem_wb, cpu.features) {
        insert_stall(cpu, fetched.pc);
        return Ok(());
    }

    let inst = match decode(fetched.inst) {
        Ok(inst) => inst,
        Err(source) => {
            warn!(
                "ID  {:#010x}: cannot decode {:#010x}: {source}",
                fetched.pc, fetched.inst
            );
            cpu.id_ex = Latch::Empty;
            return Err(SimError::Decode {
                pc: fetched.pc,
                raw: fetched.inst,
                source,
            });
        }
    };

    let (rs1, rs2) = inst.sources();
    let rv1 = rs1.map_or(0, |r| cpu.regs.read(r));
    let rv2 = rs2.map_or(0, |r| cpu.regs.read(r));

    let speculative = cpu.features.branch_prediction;
    let mut pred_taken = false;
    if let Instruction::Branch { imm, .. } = inst {
        if speculative {
            pred_taken = cpu.branch_predictor.predict_branch(fetched.pc);
            if pred_taken {
                let target = fetched.pc.wrapping_add_signed(imm);
                debug!("ID  {:#010x}: predicted taken -> {target:#010x}", fetched.pc);
                cpu.pc = target;
            }
        }
    }

    trace!("ID  {:#010x}: {inst}", fetched.pc);
    cpu.id_ex = Latch::Valid(IdExEntry {
        pc: fetched.pc,
        raw: fetched.inst,
        inst,
        rv1,
        rv2,
        pred_taken,
        speculative,
    });
    Ok(())
}

/// Inserts a bubble into ID/EX and rolls the program counter back by one word.
///
/// Fetch runs after decode in the same cycle and reads the rolled-back
/// counter, so it latches the stalled instruction into IF/ID again instead of
/// its successor. That refetch is the whole of the stall at the front end.
fn insert_stall(cpu: &mut Cpu, pc: u32) {
    debug!("ID  {pc:#010x}: RAW hazard, stalling");
    cpu.id_ex = Latch::Bubble;
    cpu.stats.stalls += 1;
    cpu.pc = cpu.pc.wrapping_sub(WORD_BYTES);
}
