//! Control-flow redirects.
//!
//! A redirect overwrites the program counter and discards the younger
//! instructions in IF/ID and ID/EX. The engine records the most recent one
//! so viewers can show where a flush happened.

use std::fmt;

/// Why the front of the pipeline was redirected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RedirectCause {
    /// A branch resolved in execute against its decode-time prediction.
    Mispredict,
    /// A branch without prediction resolved taken in memory.
    TakenBranch,
    /// An unconditional JAL or JALR.
    Jump,
}

/// A control transfer that flushed younger instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Redirect {
    /// Program counter of the branch or jump.
    pub pc: u32,
    /// The corrected next program counter.
    pub target: u32,
    /// What triggered the redirect.
    pub cause: RedirectCause,
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cause = match self.cause {
            RedirectCause::Mispredict => "mispredict",
            RedirectCause::TakenBranch => "taken branch",
            RedirectCause::Jump => "jump",
        };
        write!(f, "{cause} at {:#010x} -> {:#010x}", self.pc, self.target)
    }
}
