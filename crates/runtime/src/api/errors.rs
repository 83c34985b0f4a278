//! Unified error types surfaced by the runtime API.
//!
//! Wraps worker coordination failures, catalog validation, and the core's
//! transition and history errors so clients can bubble them up with
//! consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use tabletop_core::{
    AbilityCardId, CharacterKey, ErrorSeverity, ExecuteError, HistoryError, MonsterKey,
    TabletopError,
};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a catalog to be configured before building")]
    MissingCatalog,

    #[error("monster {0} is not in the catalog")]
    UnknownMonster(MonsterKey),

    #[error("character {0} is not in the catalog")]
    UnknownCharacter(CharacterKey),

    #[error("{id} is not in the ability deck of {key}")]
    UnknownAbilityCard { key: MonsterKey, id: AbilityCardId },

    #[error("monster {0} is not in play")]
    MonsterNotInPlay(MonsterKey),

    #[error("monster {0} has no ability cards to draw")]
    EmptyAbilityDeck(MonsterKey),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

impl RuntimeError {
    /// Catalog and draw refusals are validation errors; core errors keep their
    /// own severity; channel and worker failures are internal.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownMonster(_)
            | Self::UnknownCharacter(_)
            | Self::UnknownAbilityCard { .. }
            | Self::MonsterNotInPlay(_)
            | Self::EmptyAbilityDeck(_) => ErrorSeverity::Validation,
            Self::Execute(error) => error.severity(),
            Self::History(error) => error.severity(),
            Self::CommandChannelClosed
            | Self::ReplyChannelClosed(_)
            | Self::WorkerJoin(_)
            | Self::MissingCatalog => ErrorSeverity::Internal,
        }
    }

    /// Whether the request was refused before it reached the session state.
    pub fn is_rejection(&self) -> bool {
        !self.severity().is_internal()
    }
}
