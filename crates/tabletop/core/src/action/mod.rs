//! Action domain.
//!
//! Actions form a closed tagged union split in two halves:
//! - [`TrackedAction`]: forward gameplay actions that history records
//! - [`InverseAction`]: self-contained rollbacks computed when a tracked
//!   action is recorded
//!
//! Every payload implements [`ActionTransition`]; the engine drives the
//! transition phases and the history module pairs each tracked action with
//! its inverse.
//!
//! # Module Structure
//!
//! - `error`: [`TransitionError`]
//! - `kinds`: concrete payloads (characters, monsters, ability cards, tabletop)
//! - `registry`: [`ActionKind`] tags and the trackable set

pub mod error;
pub mod kinds;
pub mod registry;

pub use error::TransitionError;
pub use kinds::*;
pub use registry::ActionKind;

use crate::state::TabletopState;

/// Defines how a concrete action variant mutates tabletop state.
pub trait ActionTransition {
    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &TabletopState) -> Result<(), TransitionError> {
        Ok(())
    }

    /// Applies the action by mutating the state directly.
    ///
    /// References to absent entities are ignored.
    fn apply(&self, state: &mut TabletopState);

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, state: &TabletopState) -> Result<(), TransitionError> {
        state.check_invariants().map_err(TransitionError::from)
    }
}

/// Forward gameplay actions recorded in history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackedAction {
    AddCharacter(AddCharacterAction),
    UpdateCharacter(UpdateCharacterAction),
    AddMonster(AddMonsterAction),
    AddMonsterStandee(AddMonsterStandeeAction),
    UpdateMonsterStandee(UpdateMonsterStandeeAction),
    RemoveMonsterStandee(RemoveMonsterStandeeAction),
    DrawMonsterAbilityCardsSuccess(DrawMonsterAbilityCardsSuccessAction),
    DrawMonsterAbilityCardSuccess(DrawMonsterAbilityCardSuccessAction),
    InfuseElement(InfuseElementAction),
    SetScenarioLevel(SetScenarioLevelAction),
    NextRound(NextRoundAction),
    ClearTabletop(ClearTabletopAction),
}

impl TrackedAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            TrackedAction::AddCharacter(_) => ActionKind::AddCharacter,
            TrackedAction::UpdateCharacter(_) => ActionKind::UpdateCharacter,
            TrackedAction::AddMonster(_) => ActionKind::AddMonster,
            TrackedAction::AddMonsterStandee(_) => ActionKind::AddMonsterStandee,
            TrackedAction::UpdateMonsterStandee(_) => ActionKind::UpdateMonsterStandee,
            TrackedAction::RemoveMonsterStandee(_) => ActionKind::RemoveMonsterStandee,
            TrackedAction::DrawMonsterAbilityCardsSuccess(_) => {
                ActionKind::DrawMonsterAbilityCardsSuccess
            }
            TrackedAction::DrawMonsterAbilityCardSuccess(_) => {
                ActionKind::DrawMonsterAbilityCardSuccess
            }
            TrackedAction::InfuseElement(_) => ActionKind::InfuseElement,
            TrackedAction::SetScenarioLevel(_) => ActionKind::SetScenarioLevel,
            TrackedAction::NextRound(_) => ActionKind::NextRound,
            TrackedAction::ClearTabletop(_) => ActionKind::ClearTabletop,
        }
    }
}

/// Rollback actions. Never recorded themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InverseAction {
    UndoAddCharacter(UndoAddCharacterAction),
    UndoUpdateCharacter(UndoUpdateCharacterAction),
    UndoAddMonster(UndoAddMonsterAction),
    UndoAddMonsterStandee(UndoAddMonsterStandeeAction),
    UndoUpdateMonsterStandee(UndoUpdateMonsterStandeeAction),
    UndoRemoveMonsterStandee(UndoRemoveMonsterStandeeAction),
    UndoDrawMonsterAbilityCards(UndoDrawMonsterAbilityCardsAction),
    UndoDrawMonsterAbilityCard(UndoDrawMonsterAbilityCardAction),
    UndoInfuseElement(UndoInfuseElementAction),
    UndoSetScenarioLevel(UndoSetScenarioLevelAction),
    UndoNextRound(UndoNextRoundAction),
    UndoClearTabletop(UndoClearTabletopAction),
}

impl InverseAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            InverseAction::UndoAddCharacter(_) => ActionKind::UndoAddCharacter,
            InverseAction::UndoUpdateCharacter(_) => ActionKind::UndoUpdateCharacter,
            InverseAction::UndoAddMonster(_) => ActionKind::UndoAddMonster,
            InverseAction::UndoAddMonsterStandee(_) => ActionKind::UndoAddMonsterStandee,
            InverseAction::UndoUpdateMonsterStandee(_) => ActionKind::UndoUpdateMonsterStandee,
            InverseAction::UndoRemoveMonsterStandee(_) => ActionKind::UndoRemoveMonsterStandee,
            InverseAction::UndoDrawMonsterAbilityCards(_) => {
                ActionKind::UndoDrawMonsterAbilityCards
            }
            InverseAction::UndoDrawMonsterAbilityCard(_) => ActionKind::UndoDrawMonsterAbilityCard,
            InverseAction::UndoInfuseElement(_) => ActionKind::UndoInfuseElement,
            InverseAction::UndoSetScenarioLevel(_) => ActionKind::UndoSetScenarioLevel,
            InverseAction::UndoNextRound(_) => ActionKind::UndoNextRound,
            InverseAction::UndoClearTabletop(_) => ActionKind::UndoClearTabletop,
        }
    }
}

/// Top-level action enum accepted by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Tracked(TrackedAction),
    Inverse(InverseAction),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Tracked(action) => action.kind(),
            Action::Inverse(action) => action.kind(),
        }
    }

    /// Only tracked actions enter history; inverse actions apply untracked.
    pub fn is_trackable(&self) -> bool {
        self.kind().is_trackable()
    }
}

impl From<TrackedAction> for Action {
    fn from(action: TrackedAction) -> Self {
        Action::Tracked(action)
    }
}

impl From<InverseAction> for Action {
    fn from(action: InverseAction) -> Self {
        Action::Inverse(action)
    }
}

macro_rules! impl_from_payload {
    ($wrapper:ident :: $variant:ident ($payload:ty)) => {
        impl From<$payload> for $wrapper {
            fn from(action: $payload) -> Self {
                $wrapper::$variant(action)
            }
        }

        impl From<$payload> for Action {
            fn from(action: $payload) -> Self {
                Action::from($wrapper::$variant(action))
            }
        }
    };
}

impl_from_payload!(TrackedAction::AddCharacter(AddCharacterAction));
impl_from_payload!(TrackedAction::UpdateCharacter(UpdateCharacterAction));
impl_from_payload!(TrackedAction::AddMonster(AddMonsterAction));
impl_from_payload!(TrackedAction::AddMonsterStandee(AddMonsterStandeeAction));
impl_from_payload!(TrackedAction::UpdateMonsterStandee(UpdateMonsterStandeeAction));
impl_from_payload!(TrackedAction::RemoveMonsterStandee(RemoveMonsterStandeeAction));
impl_from_payload!(TrackedAction::DrawMonsterAbilityCardsSuccess(
    DrawMonsterAbilityCardsSuccessAction
));
impl_from_payload!(TrackedAction::DrawMonsterAbilityCardSuccess(
    DrawMonsterAbilityCardSuccessAction
));
impl_from_payload!(TrackedAction::InfuseElement(InfuseElementAction));
impl_from_payload!(TrackedAction::SetScenarioLevel(SetScenarioLevelAction));
impl_from_payload!(TrackedAction::NextRound(NextRoundAction));
impl_from_payload!(TrackedAction::ClearTabletop(ClearTabletopAction));

impl_from_payload!(InverseAction::UndoAddCharacter(UndoAddCharacterAction));
impl_from_payload!(InverseAction::UndoUpdateCharacter(UndoUpdateCharacterAction));
impl_from_payload!(InverseAction::UndoAddMonster(UndoAddMonsterAction));
impl_from_payload!(InverseAction::UndoAddMonsterStandee(UndoAddMonsterStandeeAction));
impl_from_payload!(InverseAction::UndoUpdateMonsterStandee(UndoUpdateMonsterStandeeAction));
impl_from_payload!(InverseAction::UndoRemoveMonsterStandee(UndoRemoveMonsterStandeeAction));
impl_from_payload!(InverseAction::UndoDrawMonsterAbilityCards(
    UndoDrawMonsterAbilityCardsAction
));
impl_from_payload!(InverseAction::UndoDrawMonsterAbilityCard(
    UndoDrawMonsterAbilityCardAction
));
impl_from_payload!(InverseAction::UndoInfuseElement(UndoInfuseElementAction));
impl_from_payload!(InverseAction::UndoSetScenarioLevel(UndoSetScenarioLevelAction));
impl_from_payload!(InverseAction::UndoNextRound(UndoNextRoundAction));
impl_from_payload!(InverseAction::UndoClearTabletop(UndoClearTabletopAction));
