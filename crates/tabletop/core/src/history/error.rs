use crate::engine::ExecuteError;
use crate::error::{ErrorSeverity, TabletopError};

/// A recorded entry could not be replayed. The session is left as it was
/// before the undo or redo started.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("undo step {step} failed: {source}")]
    Undo {
        step: usize,
        #[source]
        source: ExecuteError,
    },

    #[error("redo step {step} failed: {source}")]
    Redo {
        step: usize,
        #[source]
        source: ExecuteError,
    },
}

impl TabletopError for HistoryError {
    fn severity(&self) -> ErrorSeverity {
        // Recorded entries already committed once; a failed replay is a broken inverse.
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Undo { .. } => "UNDO_FAILED",
            Self::Redo { .. } => "REDO_FAILED",
        }
    }
}
