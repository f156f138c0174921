//! Data Hazard Detection.
//!
//! Decides whether the instruction waiting in IF/ID must stall in decode.
//! The two producers checked are the ones ahead of it in program order: the
//! EX/MEM entry (one instruction older) and the MEM/WB entry (two older), as
//! they stand once execute and memory have run for the current cycle.

use crate::config::FeatureFlags;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Source registers read by a raw instruction word.
///
/// Only the fields the instruction form actually reads are reported, so an
/// immediate that happens to overlap the `rs2` field never causes a stall.
/// Unsupported opcodes read nothing; decode reports them instead.
pub fn source_regs(inst: u32) -> (Option<usize>, Option<usize>) {
    match inst.opcode() {
        opcodes::OP_REG | opcodes::OP_STORE | opcodes::OP_BRANCH => {
            (Some(inst.rs1()), Some(inst.rs2()))
        }
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => (Some(inst.rs1()), None),
        _ => (None, None),
    }
}

/// Checks whether decode must stall the instruction `inst`.
///
/// # Arguments
///
/// * `inst`     - Raw word in the IF/ID latch.
/// * `ex_mem`   - Nearer producer (one instruction older).
/// * `mem_wb`   - Farther producer (two instructions older).
/// * `features` - Active feature flags.
///
/// # Returns
///
/// `true` if a bubble must be inserted this cycle:
/// - never when hazard detection is disabled;
/// - with forwarding, only when the nearer producer is a load feeding `inst`;
/// - without forwarding, whenever either producer writes a register `inst` reads.
///
/// # Examples
///
/// ```
/// use rvpipe_core::config::FeatureFlags;
/// use rvpipe_core::core::pipeline::hazards::need_stall;
/// use rvpipe_core::core::pipeline::latches::Latch;
///
/// // add x3, x1, x2 with nothing in flight
/// assert!(!need_stall(0x002081B3, &Latch::Empty, &Latch::Empty, FeatureFlags::all()));
/// ```
pub fn need_stall(inst: u32, ex_mem: &ExMem, mem_wb: &MemWb, features: FeatureFlags) -> bool {
    if !features.hazard_detection {
        return false;
    }

    let (rs1, rs2) = source_regs(inst);
    let reads = |rd: usize| rd != 0 && (rs1 == Some(rd) || rs2 == Some(rd));

    let nearer = ex_mem
        .entry()
        .and_then(|e| e.inst.dest().map(|rd| (rd, e.inst.is_load())))
        .filter(|&(rd, _)| reads(rd));
    let farther = mem_wb
        .entry()
        .and_then(|e| e.inst.dest())
        .filter(|&rd| reads(rd));

    if features.forwarding {
        matches!(nearer, Some((_, true)))
    } else {
        nearer.is_some() || farther.is_some()
    }
}
