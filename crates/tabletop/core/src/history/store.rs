use std::collections::VecDeque;

use crate::action::{InverseAction, TrackedAction};

/// A recorded dispatch: the action as dispatched and the inverse computed
/// against the state it was applied to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub original: TrackedAction,
    pub inverse: InverseAction,
}

/// The two history stacks.
///
/// `past` is chronological, most recent last. `future` holds undone entries
/// with the next one to redo at the front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    pub(crate) past: Vec<HistoryEntry>,
    pub(crate) future: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn past(&self) -> &[HistoryEntry] {
        &self.past
    }

    pub fn future(&self) -> &VecDeque<HistoryEntry> {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Appends a fresh entry. Any undone branch is discarded.
    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        self.past.push(entry);
        self.future.clear();
    }

    /// The last `steps` past entries, most recent first.
    pub(crate) fn undo_window(&self, steps: usize) -> impl Iterator<Item = &HistoryEntry> {
        let start = self.past.len() - steps.min(self.past.len());
        self.past[start..].iter().rev()
    }

    /// The first `steps` future entries, in redo order.
    pub(crate) fn redo_window(&self, steps: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.future.iter().take(steps)
    }

    /// Moves the last `steps` past entries to the front of `future`, keeping
    /// chronological order.
    pub(crate) fn shift_to_future(&mut self, steps: usize) {
        let start = self.past.len() - steps.min(self.past.len());
        for entry in self.past.drain(start..).rev() {
            self.future.push_front(entry);
        }
    }

    /// Moves the first `steps` future entries to the end of `past`.
    pub(crate) fn shift_to_past(&mut self, steps: usize) {
        for _ in 0..steps {
            match self.future.pop_front() {
                Some(entry) => self.past.push(entry),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{InfuseElementAction, UndoInfuseElementAction};
    use crate::state::Element;

    fn entry(element: Element) -> HistoryEntry {
        HistoryEntry {
            original: InfuseElementAction { element }.into(),
            inverse: UndoInfuseElementAction { element }.into(),
        }
    }

    #[test]
    fn shifting_preserves_chronology() {
        let mut history = History::new();
        for element in [Element::Fire, Element::Ice, Element::Air] {
            history.record(entry(element));
        }

        history.shift_to_future(2);
        assert_eq!(history.past(), &[entry(Element::Fire)]);
        assert_eq!(
            history.future().iter().cloned().collect::<Vec<_>>(),
            vec![entry(Element::Ice), entry(Element::Air)]
        );

        history.shift_to_past(1);
        assert_eq!(history.past(), &[entry(Element::Fire), entry(Element::Ice)]);
        assert_eq!(history.future().len(), 1);
    }

    #[test]
    fn record_discards_undone_branch() {
        let mut history = History::new();
        history.record(entry(Element::Earth));
        history.shift_to_future(1);
        assert!(history.can_redo());

        history.record(entry(Element::Light));

        assert!(!history.can_redo());
        assert_eq!(history.past(), &[entry(Element::Light)]);
    }
}
