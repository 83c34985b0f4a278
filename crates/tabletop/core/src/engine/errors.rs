//! Error types for the transition pipeline.

use crate::action::{ActionKind, TransitionError};
use crate::error::{ErrorSeverity, TabletopError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// A transition was aborted; the committed state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} action failed: {source}")]
pub struct ExecuteError {
    pub kind: ActionKind,
    #[source]
    pub source: TransitionPhaseError<TransitionError>,
}

impl ExecuteError {
    pub fn new(kind: ActionKind, phase: TransitionPhase, error: TransitionError) -> Self {
        Self {
            kind,
            source: TransitionPhaseError::new(phase, error),
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.source.phase
    }
}

impl TabletopError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self.source.error {
            TransitionError::LevelOutOfRange { .. } => ErrorSeverity::Validation,
            TransitionError::Invariant(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self.source.error {
            TransitionError::LevelOutOfRange { .. } => "LEVEL_OUT_OF_RANGE",
            TransitionError::Invariant(_) => "INVARIANT_VIOLATED",
        }
    }
}
