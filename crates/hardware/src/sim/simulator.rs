//! Simulator: owns the CPU together with the program image it was built from.
//!
//! This is the pull API that drivers, viewers, and tests use. It provides:
//! 1. **Stepping:** One cycle at a time, or a bounded run to completion.
//! 2. **Inspection:** Read-only accessors and an owned [`PipelineSnapshot`]
//!    taken on a cycle boundary.
//! 3. **Control:** Feature toggling and a full reset back to the image.

use tracing::{debug, info, warn};

use crate::common::error::SimResult;
use crate::config::{Config, FeatureFlags};
use crate::core::Cpu;
use crate::core::arch::Gpr;
use crate::core::pipeline::control::Redirect;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::units::bru::PredictorState;
use crate::sim::loader::ProgramImage;
use crate::soc::DataMemory;
use crate::stats::SimStats;

/// Why [`Simulator::run_to_completion`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The program drained from the pipeline.
    Completed,
    /// The cycle cap was reached first.
    CycleLimit,
}

/// Result of a bounded run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Total cycles simulated since construction or the last reset.
    pub cycles: u64,
    /// Why the run stopped.
    pub reason: StopReason,
}

/// An owned copy of the visible machine state at a cycle boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineSnapshot {
    /// Cycles completed.
    pub cycle: u64,
    /// Next fetch address.
    pub pc: u32,
    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
    /// Entry retired by the last write-back.
    pub retired: MemWb,
    /// Register file contents.
    pub regs: Gpr,
    /// Written data memory words, ordered by address.
    pub memory: Vec<(u32, i32)>,
    /// Predictor table, ordered by branch address.
    pub predictor: Vec<(u32, PredictorState)>,
    /// Statistics counters.
    pub stats: SimStats,
    /// Active feature flags.
    pub features: FeatureFlags,
    /// Redirect performed during the last cycle.
    pub last_redirect: Option<Redirect>,
    /// Whether the program has drained.
    pub finished: bool,
}

/// Top-level simulator: CPU state plus the image used to (re)build it.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural and pipeline state.
    pub cpu: Cpu,
    image: ProgramImage,
    config: Config,
}

impl Simulator {
    /// Creates a simulator for `image` with the given configuration.
    pub fn new(image: ProgramImage, config: &Config) -> Self {
        let cpu = Cpu::new(image.instruction_memory(), image.data_memory(), config);
        info!(
            text_words = image.text().len(),
            data_words = image.data().len(),
            features = ?config.features,
            "simulator ready"
        );
        Self {
            cpu,
            image,
            config: config.clone(),
        }
    }

    /// Creates a simulator from little-endian text and data blobs.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::MalformedImage`](crate::common::error::SimError::MalformedImage)
    /// before any cycle runs if either blob is truncated.
    pub fn from_bytes(text: &[u8], data: &[u8], config: &Config) -> SimResult<Self> {
        Ok(Self::new(ProgramImage::from_bytes(text, data)?, config))
    }

    /// Advances the pipeline by one cycle.
    ///
    /// # Errors
    ///
    /// Returns the decode error raised during the cycle. The failing slot is
    /// left empty, so stepping can continue afterwards.
    pub fn advance_cycle(&mut self) -> SimResult<()> {
        self.cpu.tick()
    }

    /// Steps until the program drains or `max_cycles` cycles have run in this call.
    ///
    /// # Errors
    ///
    /// Stops at the first decode error and returns it.
    pub fn run_to_completion(&mut self, max_cycles: u64) -> SimResult<RunOutcome> {
        let mut remaining = max_cycles;
        while !self.is_finished() {
            if remaining == 0 {
                warn!(max_cycles, pc = self.cpu.pc, "cycle limit reached");
                return Ok(RunOutcome {
                    cycles: self.cycle(),
                    reason: StopReason::CycleLimit,
                });
            }
            self.advance_cycle()?;
            remaining -= 1;
        }
        debug!(cycles = self.cycle(), "program completed");
        Ok(RunOutcome {
            cycles: self.cycle(),
            reason: StopReason::Completed,
        })
    }

    /// Runs to completion with the configured cycle cap.
    ///
    /// # Errors
    ///
    /// See [`Simulator::run_to_completion`].
    pub fn run(&mut self) -> SimResult<RunOutcome> {
        self.run_to_completion(self.config.general.max_cycles)
    }

    /// Returns `true` once the pc is past the text segment and every latch is empty.
    pub fn is_finished(&self) -> bool {
        self.cpu.is_finished()
    }

    /// Returns `true` if the last fetch found the pc past the text segment.
    pub const fn program_exhausted(&self) -> bool {
        self.cpu.program_exhausted
    }

    /// IF/ID latch.
    pub const fn if_id(&self) -> &IfId {
        &self.cpu.if_id
    }

    /// ID/EX latch.
    pub const fn id_ex(&self) -> &IdEx {
        &self.cpu.id_ex
    }

    /// EX/MEM latch.
    pub const fn ex_mem(&self) -> &ExMem {
        &self.cpu.ex_mem
    }

    /// MEM/WB latch.
    pub const fn mem_wb(&self) -> &MemWb {
        &self.cpu.mem_wb
    }

    /// The MEM/WB entry consumed by the last write-back.
    pub const fn retired(&self) -> &MemWb {
        &self.cpu.wb_latch
    }

    /// Register file.
    pub const fn regs(&self) -> &Gpr {
        &self.cpu.regs
    }

    /// Data memory.
    pub const fn memory(&self) -> &DataMemory {
        &self.cpu.dmem
    }

    /// Next fetch address.
    pub const fn pc(&self) -> u32 {
        self.cpu.pc
    }

    /// Cycles completed since construction or the last reset.
    pub const fn cycle(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Statistics counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Every predictor entry with its state, ordered by branch address.
    pub fn predictor(&self) -> Vec<(u32, PredictorState)> {
        self.cpu.branch_predictor.entries().collect()
    }

    /// Active feature flags.
    pub const fn features(&self) -> FeatureFlags {
        self.cpu.features
    }

    /// Redirect performed during the last cycle, if any.
    pub const fn last_redirect(&self) -> Option<Redirect> {
        self.cpu.last_redirect
    }

    /// Program image the simulator was built from.
    pub const fn image(&self) -> &ProgramImage {
        &self.image
    }

    /// Copies the visible state into an owned snapshot.
    pub fn snapshot(&self) -> PipelineSnapshot {
        PipelineSnapshot {
            cycle: self.cycle(),
            pc: self.cpu.pc,
            if_id: self.cpu.if_id,
            id_ex: self.cpu.id_ex,
            ex_mem: self.cpu.ex_mem,
            mem_wb: self.cpu.mem_wb,
            retired: self.cpu.wb_latch,
            regs: self.cpu.regs.clone(),
            memory: self.cpu.dmem.iter().collect(),
            predictor: self.predictor(),
            stats: self.cpu.stats.clone(),
            features: self.cpu.features,
            last_redirect: self.cpu.last_redirect,
            finished: self.is_finished(),
        }
    }

    /// Replaces the feature flags and clears the per-feature counters.
    ///
    /// Registers, memory, latches, the predictor table, and the cycle count
    /// are left as they are. Branches and jumps already in flight resolve in
    /// the mode they were decoded under.
    pub fn set_features(&mut self, features: FeatureFlags) {
        info!(?features, cycle = self.cycle(), "feature flags changed");
        self.cpu.features = features;
        self.config.features = features;
        self.cpu.stats.reset_feature_counters();
    }

    /// Rebuilds all state from the program image: registers, data memory,
    /// predictor, statistics, latches, and `pc = 0`. The current feature
    /// flags are kept.
    pub fn reset(&mut self) {
        debug!("simulator reset");
        self.cpu = Cpu::new(
            self.image.instruction_memory(),
            self.image.data_memory(),
            &self.config,
        );
    }

    /// Prints statistics, non-zero registers, and written memory to stdout.
    pub fn print_report(&self) {
        self.cpu.stats.print();
        self.cpu.regs.dump();
        self.cpu.dmem.dump();
    }
}
