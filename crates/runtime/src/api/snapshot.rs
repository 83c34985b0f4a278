use std::sync::Arc;

use tabletop_core::{TabletopState, TimeMachine};

/// Immutable view of the session published after every committed transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Number of commits since the session started.
    pub revision: u64,
    pub state: Arc<TabletopState>,
    pub past_len: usize,
    pub future_len: usize,
}

impl Snapshot {
    pub(crate) fn capture(revision: u64, machine: &TimeMachine) -> Self {
        Self {
            revision,
            state: Arc::new(machine.state().clone()),
            past_len: machine.past().len(),
            future_len: machine.future().len(),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.past_len > 0
    }

    pub fn can_redo(&self) -> bool {
        self.future_len > 0
    }
}
