//! Worker tasks that back the runtime orchestration.
//!
//! The session worker is the single writer of tabletop state and history.

mod session;

pub use session::{Command, SessionWorker};
