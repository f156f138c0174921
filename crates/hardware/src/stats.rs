//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters exposed to pipeline viewers. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived CPI.
//! 2. **Instruction mix:** Retired counts by category (ALU, load, store, branch, jump).
//! 3. **Branch prediction:** Correct and incorrect predictions, and accuracy.
//! 4. **Hazards:** Forwards performed, stall cycles inserted, and control flushes.
//!
//! The branch, forwarding and stall counters are the per-feature counters:
//! they are cleared whenever the feature flags change.

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that completed write-back.
    pub instructions_retired: u64,

    /// Retired register and immediate arithmetic instructions.
    pub inst_alu: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired conditional branches.
    pub inst_branch: u64,
    /// Retired JAL/JALR instructions.
    pub inst_jump: u64,

    /// Branches whose decode-time prediction matched the outcome.
    pub branch_correct: u64,
    /// Branches whose decode-time prediction was wrong.
    pub branch_incorrect: u64,

    /// Instructions that received at least one forwarded operand.
    pub forwards: u64,
    /// Bubbles inserted by the hazard unit.
    pub stalls: u64,
    /// Control transfers that discarded younger instructions.
    pub flushes: u64,
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch", "hazards"];

impl SimStats {
    /// Clears the counters tied to a feature flag.
    ///
    /// Cycle, retirement, instruction-mix and flush counts are kept.
    pub const fn reset_feature_counters(&mut self) {
        self.branch_correct = 0;
        self.branch_incorrect = 0;
        self.forwards = 0;
        self.stalls = 0;
    }

    /// Total number of resolved predictions.
    pub const fn branch_lookups(&self) -> u64 {
        self.branch_correct + self.branch_incorrect
    }

    /// Percentage of predictions that were correct, or `0.0` before any
    /// branch has resolved.
    pub fn branch_accuracy(&self) -> f64 {
        let total = self.branch_lookups();
        if total == 0 {
            0.0
        } else {
            100.0 * (self.branch_correct as f64 / total as f64)
        }
    }

    /// Cycles per retired instruction, or `0.0` before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let instr = self.instructions_retired.max(1) as f64;
        let cyc = self.cycles.max(1) as f64;

        println!("\n==========================================================");
        println!("RV32I PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.jump", self.inst_jump),
            ] {
                println!(
                    "  {name:<22} {count} ({:.2}%)",
                    (count as f64 / instr) * 100.0
                );
            }
            println!("----------------------------------------------------------");
        }
        if want("branch") {
            println!("BRANCH PREDICTION");
            println!("  bp.correct             {}", self.branch_correct);
            println!("  bp.mispredicts         {}", self.branch_incorrect);
            println!("  bp.accuracy            {:.2}%", self.branch_accuracy());
            println!("----------------------------------------------------------");
        }
        if want("hazards") {
            println!("HAZARDS");
            println!("  fwd.performed          {}", self.forwards);
            println!(
                "  stalls.data            {} ({:.2}%)",
                self.stalls,
                (self.stalls as f64 / cyc) * 100.0
            );
            println!("  flushes.control        {}", self.flushes);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
