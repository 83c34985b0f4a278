//! Topic-based event bus for runtime events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need. Snapshots travel separately on a watch channel; events
//! describe what happened, snapshots describe where the session is now.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{HistoryEvent, TabletopEvent};
