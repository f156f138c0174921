//! Operand Forwarding.
//!
//! Supplies the instruction entering execute with the freshest value of each
//! source register. Candidates are the EX/MEM entry (nearer) and the MEM/WB
//! entry (farther) as they stood at the start of the cycle; the nearer one
//! wins when both write the same register.

use crate::core::pipeline::latches::{ExMem, IdExEntry, MemWb};

/// Operand values chosen for execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operands {
    /// Value used for `rs1`.
    pub rs1: i32,
    /// Value used for `rs2`.
    pub rs2: i32,
    /// Whether any operand was bypassed from an in-flight producer.
    pub forwarded: bool,
}

/// Resolves the operands for `entry`.
///
/// # Arguments
///
/// * `entry`  - The instruction about to execute, with its decode-time register reads.
/// * `ex_mem` - The entry about to enter memory access.
/// * `mem_wb` - The entry about to enter write-back.
///
/// A load in `ex_mem` claims its destination register but has no value yet,
/// so the stale register-file value is kept for that operand.
pub fn forward_operands(entry: &IdExEntry, ex_mem: &ExMem, mem_wb: &MemWb) -> Operands {
    let (rs1, rs2) = entry.inst.sources();
    let (v1, f1) = forward_reg(rs1, entry.rv1, ex_mem, mem_wb);
    let (v2, f2) = forward_reg(rs2, entry.rv2, ex_mem, mem_wb);
    Operands {
        rs1: v1,
        rs2: v2,
        forwarded: f1 || f2,
    }
}

fn forward_reg(reg: Option<usize>, stale: i32, ex_mem: &ExMem, mem_wb: &MemWb) -> (i32, bool) {
    let Some(reg) = reg.filter(|&r| r != 0) else {
        return (stale, false);
    };

    if let Some((rd, value)) = ex_mem.entry().and_then(|e| e.forward_value()) {
        if rd == reg {
            return value.map_or((stale, false), |v| (v, true));
        }
    }

    match mem_wb.entry().and_then(|e| e.forward_value()) {
        Some((rd, value)) if rd == reg => (value, true),
        _ => (stale, false),
    }
}
