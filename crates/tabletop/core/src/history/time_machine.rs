use crate::action::{Action, TrackedAction};
use crate::engine::{ExecuteError, TabletopEngine};
use crate::state::TabletopState;

use super::error::HistoryError;
use super::resolver::resolve_inverse;
use super::store::{History, HistoryEntry};

/// How a successful dispatch touched history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// A tracked action was applied and appended to `past`.
    Recorded,
    /// An untracked action was applied; history is unchanged.
    Applied,
}

/// Owns one session's tabletop state together with its history.
///
/// Every mutation goes through [`dispatch`](Self::dispatch),
/// [`undo`](Self::undo) or [`redo`](Self::redo). Each of them either commits
/// completely or leaves state and history exactly as they were.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeMachine {
    state: TabletopState,
    history: History,
}

impl TimeMachine {
    pub fn new(state: TabletopState) -> Self {
        Self {
            state,
            history: History::new(),
        }
    }

    pub fn state(&self) -> &TabletopState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn past(&self) -> &[HistoryEntry] {
        self.history.past()
    }

    pub fn future(&self) -> &std::collections::VecDeque<HistoryEntry> {
        self.history.future()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applies `action`, recording it when it is trackable.
    ///
    /// The inverse is resolved against the state immediately before the
    /// action applies. Recording clears `future`.
    pub fn dispatch(&mut self, action: Action) -> Result<Dispatched, ExecuteError> {
        match action {
            Action::Tracked(action) => {
                self.record(action)?;
                Ok(Dispatched::Recorded)
            }
            Action::Inverse(action) => {
                TabletopEngine::new(&mut self.state).apply_inverse(&action)?;
                Ok(Dispatched::Applied)
            }
        }
    }

    fn record(&mut self, original: TrackedAction) -> Result<(), ExecuteError> {
        let inverse = resolve_inverse(&self.state, &original);
        TabletopEngine::new(&mut self.state).apply_tracked(&original)?;
        self.history.record(HistoryEntry { original, inverse });
        Ok(())
    }

    /// Undoes up to `count` entries, most recent first.
    ///
    /// Returns the number of entries actually undone, which is `count` clamped
    /// to the length of `past`.
    pub fn undo(&mut self, count: usize) -> Result<usize, HistoryError> {
        let steps = count.min(self.history.past().len());
        let mut working = self.state.clone();

        for (step, entry) in self.history.undo_window(steps).enumerate() {
            TabletopEngine::new(&mut working)
                .apply_inverse(&entry.inverse)
                .map_err(|source| HistoryError::Undo { step, source })?;
        }

        self.state = working;
        self.history.shift_to_future(steps);
        Ok(steps)
    }

    /// Redoes up to `count` entries in their original order.
    ///
    /// Returns the number of entries actually redone, which is `count` clamped
    /// to the length of `future`.
    pub fn redo(&mut self, count: usize) -> Result<usize, HistoryError> {
        let steps = count.min(self.history.future().len());
        let mut working = self.state.clone();

        for (step, entry) in self.history.redo_window(steps).enumerate() {
            TabletopEngine::new(&mut working)
                .apply_tracked(&entry.original)
                .map_err(|source| HistoryError::Redo { step, source })?;
        }

        self.state = working;
        self.history.shift_to_past(steps);
        Ok(steps)
    }
}
