use serde::Serialize;
use std::fmt;

/// Why a blur-time commit fell back to the previous valid value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevertReason {
    /// The text could not be read as a number
    UnparsableText,
    /// The text parsed but exceeds the percent ceiling
    OutOfRangeOnCommit,
}

impl fmt::Display for RevertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevertReason::UnparsableText => write!(f, "unparsable text"),
            RevertReason::OutOfRangeOnCommit => write!(f, "out of range on commit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum CommitOutcome {
    /// Parsed value taken as typed
    Accepted,
    /// Parsed value was below the minimum and snapped up to it
    Clamped,
    Reverted(RevertReason),
}

/// Result of finishing an edit. `value` is what gets committed in every case,
/// including reverts, so the host and the controller stay in sync.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommitResult {
    pub value: f64,
    pub outcome: CommitOutcome,
}

impl CommitResult {
    pub fn is_revert(&self) -> bool {
        matches!(self.outcome, CommitOutcome::Reverted(_))
    }
}
