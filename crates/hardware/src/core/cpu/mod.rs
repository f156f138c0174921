//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire simulated machine. It coordinates the following:
//! 1. **State Management:** Registers, program counter, and data memory.
//! 2. **Pipeline Control:** The four inter-stage latches plus the write-back latch
//!    used as the farther forwarding source.
//! 3. **Feature Control:** Branch predictor, feature flags, and statistics.

/// Per-cycle execution loop and control-flow redirects.
pub mod execution;

use crate::config::{Config, FeatureFlags};
use crate::core::arch::Gpr;
use crate::core::pipeline::control::Redirect;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, Latch, MemWb};
use crate::core::units::bru::TwoBitPredictor;
use crate::soc::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// Only the pipeline stages mutate it, one cycle at a time via
/// [`Cpu::tick`].
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program Counter: the address the next fetch reads from.
    pub pc: u32,
    /// Read-only text segment.
    pub imem: InstructionMemory,
    /// Sparse data memory.
    pub dmem: DataMemory,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,
    /// The MEM/WB entry consumed by the last write-back (for forwarding and display).
    pub wb_latch: MemWb,

    /// Two-bit saturating-counter branch predictor.
    pub branch_predictor: TwoBitPredictor,
    /// Active feature flags.
    pub features: FeatureFlags,
    /// Performance statistics.
    pub stats: SimStats,

    /// Set when fetch finds the program counter past the end of the text segment.
    pub program_exhausted: bool,
    /// Redirect performed during the most recent cycle, if any.
    pub last_redirect: Option<Redirect>,
    /// Log a pipeline summary every cycle.
    pub trace: bool,
}

impl Cpu {
    /// Creates a new CPU with the given memories and configuration.
    ///
    /// # Arguments
    ///
    /// * `imem` - The program's text segment.
    /// * `dmem` - Data memory, already seeded with the data segment.
    /// * `config` - Simulator configuration.
    pub fn new(imem: InstructionMemory, dmem: DataMemory, config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            pc: 0,
            imem,
            dmem,
            if_id: Latch::Empty,
            id_ex: Latch::Empty,
            ex_mem: Latch::Empty,
            mem_wb: Latch::Empty,
            wb_latch: Latch::Empty,
            branch_predictor: TwoBitPredictor::new(config.predictor.initial_state),
            features: config.features,
            stats: SimStats::default(),
            program_exhausted: false,
            last_redirect: None,
            trace: config.general.trace_instructions,
        }
    }
}
