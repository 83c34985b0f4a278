//! Structural invariants of [`TabletopState`](super::TabletopState).

use super::{CharacterKey, MonsterKey, StandeeId};

/// A state that no sequence of well-formed transitions can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    #[error("round counter dropped below 1")]
    RoundUnderflow,

    #[error("character {0} appears more than once")]
    DuplicateCharacter(CharacterKey),

    #[error("monster {0} appears more than once")]
    DuplicateMonster(MonsterKey),

    #[error("monster {key} has more than one standee {id}")]
    DuplicateStandee { key: MonsterKey, id: StandeeId },
}
