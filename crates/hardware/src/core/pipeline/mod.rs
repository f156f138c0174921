//! Instruction pipeline implementation.
//!
//! This module contains the five-stage in-order pipeline. It includes:
//! 1. **Control:** Redirect records for flushes on jumps and mispredictions.
//! 2. **Forwarding:** Operand bypass from the EX/MEM and MEM/WB latches.
//! 3. **Hazards:** RAW hazard detection and the stall decision.
//! 4. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 5. **Stages:** Fetch, Decode, Execute, Memory, and Writeback.

/// Control-flow redirect records.
pub mod control;

/// Operand forwarding unit.
pub mod forwarding;

/// Pipeline hazard detection.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
