//! Action transition dispatch.

use crate::action::{Action, ActionTransition, InverseAction, TrackedAction, TransitionError};
use crate::state::TabletopState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Drives a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the tabletop state
/// 3. `post_validate` - Verify structural invariants after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut TabletopState,
) -> Result<(), TransitionPhaseError<TransitionError>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition.apply(state);

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}

macro_rules! dispatch_transition {
    ($action:expr, $state:expr, $enum:ident { $($variant:ident),+ $(,)? }) => {
        match $action {
            $( $enum::$variant(transition) => drive_transition(transition, $state), )+
        }
    };
}

pub(super) fn execute_tracked(
    action: &TrackedAction,
    state: &mut TabletopState,
) -> Result<(), ExecuteError> {
    dispatch_transition!(action, state, TrackedAction {
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
    })
    .map_err(|source| ExecuteError {
        kind: action.kind(),
        source,
    })
}

pub(super) fn execute_inverse(
    action: &InverseAction,
    state: &mut TabletopState,
) -> Result<(), ExecuteError> {
    dispatch_transition!(action, state, InverseAction {
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
    })
    .map_err(|source| ExecuteError {
        kind: action.kind(),
        source,
    })
}

pub(super) fn execute_transition(
    action: &Action,
    state: &mut TabletopState,
) -> Result<(), ExecuteError> {
    match action {
        Action::Tracked(action) => execute_tracked(action, state),
        Action::Inverse(action) => execute_inverse(action, state),
    }
}
