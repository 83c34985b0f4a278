//! Action kind tags and the trackable set.
//!
//! Every kind is listed exactly once in [`ActionKind::is_trackable`] and every
//! trackable kind names its inverse in [`ActionKind::inverse`]. Both matches are
//! exhaustive, so a new action kind cannot be added without deciding whether
//! history records it.

/// Flat tag for every action the engine can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ActionKind {
    AddCharacter,
    UpdateCharacter,
    AddMonster,
    AddMonsterStandee,
    UpdateMonsterStandee,
    RemoveMonsterStandee,
    DrawMonsterAbilityCardsSuccess,
    DrawMonsterAbilityCardSuccess,
    InfuseElement,
    SetScenarioLevel,
    NextRound,
    ClearTabletop,

    UndoAddCharacter,
    UndoUpdateCharacter,
    UndoAddMonster,
    UndoAddMonsterStandee,
    UndoUpdateMonsterStandee,
    UndoRemoveMonsterStandee,
    UndoDrawMonsterAbilityCards,
    UndoDrawMonsterAbilityCard,
    UndoInfuseElement,
    UndoSetScenarioLevel,
    UndoNextRound,
    UndoClearTabletop,
}

impl ActionKind {
    /// Whether dispatching this kind records a history entry.
    pub const fn is_trackable(self) -> bool {
        use ActionKind::*;

        match self {
            AddCharacter
            | UpdateCharacter
            | AddMonster
            | AddMonsterStandee
            | UpdateMonsterStandee
            | RemoveMonsterStandee
            | DrawMonsterAbilityCardsSuccess
            | DrawMonsterAbilityCardSuccess
            | InfuseElement
            | SetScenarioLevel
            | NextRound
            | ClearTabletop => true,

            UndoAddCharacter
            | UndoUpdateCharacter
            | UndoAddMonster
            | UndoAddMonsterStandee
            | UndoUpdateMonsterStandee
            | UndoRemoveMonsterStandee
            | UndoDrawMonsterAbilityCards
            | UndoDrawMonsterAbilityCard
            | UndoInfuseElement
            | UndoSetScenarioLevel
            | UndoNextRound
            | UndoClearTabletop => false,
        }
    }

    /// Kind of the inverse recorded for a trackable kind.
    pub const fn inverse(self) -> Option<ActionKind> {
        use ActionKind::*;

        let inverse = match self {
            AddCharacter => UndoAddCharacter,
            UpdateCharacter => UndoUpdateCharacter,
            AddMonster => UndoAddMonster,
            AddMonsterStandee => UndoAddMonsterStandee,
            UpdateMonsterStandee => UndoUpdateMonsterStandee,
            RemoveMonsterStandee => UndoRemoveMonsterStandee,
            DrawMonsterAbilityCardsSuccess => UndoDrawMonsterAbilityCards,
            DrawMonsterAbilityCardSuccess => UndoDrawMonsterAbilityCard,
            InfuseElement => UndoInfuseElement,
            SetScenarioLevel => UndoSetScenarioLevel,
            NextRound => UndoNextRound,
            ClearTabletop => UndoClearTabletop,
            _ => return None,
        };
        Some(inverse)
    }
}
