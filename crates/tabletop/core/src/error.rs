//! Common error infrastructure for tabletop-core.
//!
//! Domain-specific errors ([`TransitionError`](crate::action::TransitionError),
//! [`ExecuteError`](crate::engine::ExecuteError),
//! [`HistoryError`](crate::history::HistoryError)) live next to the code that
//! raises them. This module only provides the shared classification.

/// Severity level of an error, used by callers to pick a recovery strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: scenario level out of range
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    ///
    /// Examples: duplicate standee id after a transition, round underflow
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all tabletop-core errors.
pub trait TabletopError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and metrics.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
