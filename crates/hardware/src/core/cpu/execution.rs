//! Main Execution Loop.
//!
//! This module implements the per-cycle driver of the CPU. It performs the following:
//! 1. **Pipeline Coordination:** Runs the stages from the output end toward the input
//!    end so each stage reads the latch its predecessor wrote last cycle.
//! 2. **Control Flow:** Redirects the program counter and flushes younger latches.
//! 3. **Observability:** Logs a per-cycle pipeline summary when tracing is on.

use tracing::{debug, trace};

use super::Cpu;
use crate::common::error::SimResult;
use crate::core::pipeline::control::Redirect;
use crate::core::pipeline::latches::Latch;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Cpu {
    /// Advances the pipeline by exactly one cycle.
    ///
    /// Stages run in the order WB → MEM → EX → ID → IF. A decode failure does
    /// not cut the cycle short: fetch still runs, the failing slot is left
    /// empty, and the error is returned afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`](crate::common::error::SimError::Decode)
    /// when the word in IF/ID is not a supported instruction.
    pub fn tick(&mut self) -> SimResult<()> {
        self.last_redirect = None;
        self.stats.cycles += 1;

        wb_stage(self);
        mem_stage(self);
        execute_stage(self);
        let decoded = decode_stage(self);
        fetch_stage(self);

        if self.trace {
            self.trace_cycle();
        }
        decoded
    }

    /// Returns `true` once the program counter is past the text segment and
    /// every latch is empty.
    pub fn is_finished(&self) -> bool {
        self.pc >= self.imem.end_address()
            && self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }

    /// Sends fetch to `redirect.target` and discards IF/ID and ID/EX.
    pub fn redirect(&mut self, redirect: Redirect) {
        debug!(
            cause = ?redirect.cause,
            "flush: {:#010x} -> {:#010x}",
            redirect.pc,
            redirect.target
        );
        self.pc = redirect.target;
        self.if_id = Latch::Empty;
        self.id_ex = Latch::Empty;
        self.stats.flushes += 1;
        self.last_redirect = Some(redirect);
    }

    /// Logs every latch as it stands at the end of the cycle.
    fn trace_cycle(&self) {
        debug!(
            cycle = self.stats.cycles,
            "pc={:#010x} IF/ID: {} | ID/EX: {} | EX/MEM: {} | MEM/WB: {} | WB: {}",
            self.pc,
            self.if_id,
            self.id_ex,
            self.ex_mem,
            self.mem_wb,
            self.wb_latch
        );
        if let Some(redirect) = self.last_redirect {
            trace!(cycle = self.stats.cycles, "{redirect}");
        }
    }
}
