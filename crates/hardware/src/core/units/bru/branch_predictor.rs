//! Branch Predictor Interface.
//!
//! Defines the `BranchPredictor` trait the pipeline consults in decode and
//! trains in execute.

/// Trait for direction-only branch prediction algorithms.
pub trait BranchPredictor {
    /// Predicts whether the branch at `pc` will be taken.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    fn predict_branch(&self, pc: u32) -> bool;

    /// Trains the predictor with the resolved outcome of the branch at `pc`.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    /// * `taken` - Whether the branch was actually taken
    fn update_branch(&mut self, pc: u32, taken: bool);
}
