//! Errors raised by action transitions.

use crate::state::{InvariantViolation, Level};

/// Why a transition refused to commit.
///
/// Missing entities are not errors: transitions that reference an absent
/// character, monster or standee are no-ops. What remains are inputs outside
/// the rules' domain and states that break structural invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionError {
    #[error("level {level} is outside 0..={max}")]
    LevelOutOfRange { level: Level, max: Level },

    #[error("state invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}
