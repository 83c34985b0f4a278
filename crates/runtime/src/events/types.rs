//! Event types for different topics.

use serde::{Deserialize, Serialize};
use tabletop_core::{ActionKind, TransitionPhase};

/// Events about actions reaching the session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabletopEvent {
    /// An action committed; `revision` is the snapshot it produced.
    ActionApplied { kind: ActionKind, revision: u64 },

    /// An action was refused and the session is unchanged.
    ActionRejected {
        kind: ActionKind,
        /// Pipeline phase that refused it, `None` for catalog rejections.
        phase: Option<TransitionPhase>,
        error: String,
    },
}

/// Events about the undo/redo stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEvent {
    Recorded { kind: ActionKind, past_len: usize },
    Undone { steps: usize, past_len: usize, future_len: usize },
    Redone { steps: usize, past_len: usize, future_len: usize },
}
