//! Two-bit saturating-counter branch predictor.
//!
//! Each branch address owns a counter in `0..=3`. Counters at 2 or 3 predict
//! taken. Unseen branches use the configured initial state (Weakly Not Taken
//! by default); an entry is created the first time a branch at that address
//! resolves and persists for the rest of the run.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use super::branch_predictor::BranchPredictor;

/// State of a two-bit saturating counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[repr(u8)]
pub enum PredictorState {
    /// Counter value 0.
    StronglyNotTaken = 0,
    /// Counter value 1; the state of a branch never seen before.
    #[default]
    WeaklyNotTaken = 1,
    /// Counter value 2.
    WeaklyTaken = 2,
    /// Counter value 3.
    StronglyTaken = 3,
}

impl PredictorState {
    /// Converts a raw counter value, saturating anything above 3.
    pub const fn from_counter(value: u8) -> Self {
        match value {
            0 => Self::StronglyNotTaken,
            1 => Self::WeaklyNotTaken,
            2 => Self::WeaklyTaken,
            _ => Self::StronglyTaken,
        }
    }

    /// The raw counter value in `0..=3`.
    pub const fn counter(self) -> u8 {
        self as u8
    }

    /// Returns `true` when this state predicts taken.
    pub const fn predicts_taken(self) -> bool {
        self.counter() >= 2
    }

    /// Moves one step toward `StronglyTaken` or `StronglyNotTaken`.
    #[must_use]
    pub const fn train(self, taken: bool) -> Self {
        let value = self.counter();
        if taken {
            Self::from_counter(value.saturating_add(1))
        } else {
            Self::from_counter(value.saturating_sub(1))
        }
    }
}

impl fmt::Display for PredictorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StronglyNotTaken => "Strongly Not Taken",
            Self::WeaklyNotTaken => "Weakly Not Taken",
            Self::WeaklyTaken => "Weakly Taken",
            Self::StronglyTaken => "Strongly Taken",
        })
    }
}

/// Per-address table of two-bit saturating counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TwoBitPredictor {
    table: BTreeMap<u32, PredictorState>,
    initial: PredictorState,
}

impl TwoBitPredictor {
    /// Creates an empty predictor whose unseen branches start in `initial`.
    pub const fn new(initial: PredictorState) -> Self {
        Self {
            table: BTreeMap::new(),
            initial,
        }
    }

    /// Current state for the branch at `pc`, falling back to the initial state.
    pub fn state(&self, pc: u32) -> PredictorState {
        self.table.get(&pc).copied().unwrap_or(self.initial)
    }

    /// Iterates over every trained `(pc, state)` entry in address order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, PredictorState)> + '_ {
        self.table.iter().map(|(&pc, &state)| (pc, state))
    }

    /// Number of branches with a table entry.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no branch has resolved yet.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl BranchPredictor for TwoBitPredictor {
    fn predict_branch(&self, pc: u32) -> bool {
        self.state(pc).predicts_taken()
    }

    fn update_branch(&mut self, pc: u32, taken: bool) {
        let initial = self.initial;
        let entry = self.table.entry(pc).or_insert(initial);
        *entry = entry.train(taken);
    }
}
