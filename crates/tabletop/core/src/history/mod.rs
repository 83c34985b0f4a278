//! Undo/redo history.
//!
//! - [`resolve_inverse`] pairs a tracked action with its exact reversal.
//! - [`History`] stores the past and future stacks of [`HistoryEntry`].
//! - [`TimeMachine`] owns the state and its history and is the only place
//!   tracked actions get recorded.

mod error;
mod resolver;
mod store;
mod time_machine;

pub use error::HistoryError;
pub use resolver::resolve_inverse;
pub use store::{History, HistoryEntry};
pub use time_machine::{Dispatched, TimeMachine};
