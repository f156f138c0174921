//! Branch resolution unit (BRU).
//!
//! This module contains the branch condition evaluator used by the Execute
//! stage and the two-bit saturating-counter predictor consulted by Decode.

pub use self::branch_predictor::BranchPredictor;
pub use self::two_bit::{PredictorState, TwoBitPredictor};

/// Branch predictor trait.
pub mod branch_predictor;

/// Two-bit saturating-counter predictor and its counter states.
pub mod two_bit;

use crate::isa::instruction::BranchCond;

/// Evaluates a signed branch condition.
///
/// # Arguments
///
/// * `cond` - The comparison encoded by the branch
/// * `a`    - Value of `rs1`
/// * `b`    - Value of `rs2`
///
/// # Returns
///
/// `true` if the branch is taken.
pub const fn resolve(cond: BranchCond, a: i32, b: i32) -> bool {
    match cond {
        BranchCond::Eq => a == b,
        BranchCond::Ne => a != b,
        BranchCond::Lt => a < b,
        BranchCond::Ge => a >= b,
    }
}
