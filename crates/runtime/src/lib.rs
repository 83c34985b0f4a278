//! Runtime orchestration for a tabletop session.
//!
//! This crate wraps the deterministic [`tabletop_core::TimeMachine`] in a
//! single-writer worker task. Consumers embed [`Runtime`] and interact with the
//! session through the cloneable [`TabletopHandle`]: every dispatch, undo and
//! redo is queued and applied in order, and readers only ever observe
//! committed [`Snapshot`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`oracle`] checks dispatched ids against the catalog
//! - [`draw`] resolves random ability-card draws before they are dispatched
//! - `workers` keeps the session task internal to the crate
pub mod api;
pub mod draw;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, Snapshot, TabletopHandle};
pub use draw::{AbilityCardDrawer, CardDraw};
pub use events::{Event, EventBus, HistoryEvent, TabletopEvent, Topic};
pub use oracle::CatalogValidator;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
