//! Action execution pipeline.
//!
//! The [`TabletopEngine`] is the authoritative reducer for [`TabletopState`].
//! Every mutation, forward or inverse, flows through the same pipeline:
//! pre_validate → apply → post_validate. The pipeline runs on a working copy
//! and commits only when every phase succeeds, so a rejected action leaves the
//! state untouched.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, InverseAction, TrackedAction};
use crate::state::TabletopState;

/// Engine that applies actions to a borrowed tabletop state.
pub struct TabletopEngine<'a> {
    state: &'a mut TabletopState,
}

impl<'a> TabletopEngine<'a> {
    pub fn new(state: &'a mut TabletopState) -> Self {
        Self { state }
    }

    /// Executes an action of either half of the union.
    pub fn execute(&mut self, action: &Action) -> Result<(), ExecuteError> {
        self.commit(|working| transition::execute_transition(action, working))
    }

    pub fn apply_tracked(&mut self, action: &TrackedAction) -> Result<(), ExecuteError> {
        self.commit(|working| transition::execute_tracked(action, working))
    }

    pub fn apply_inverse(&mut self, action: &InverseAction) -> Result<(), ExecuteError> {
        self.commit(|working| transition::execute_inverse(action, working))
    }

    pub fn state(&self) -> &TabletopState {
        self.state
    }

    fn commit<F>(&mut self, run: F) -> Result<(), ExecuteError>
    where
        F: FnOnce(&mut TabletopState) -> Result<(), ExecuteError>,
    {
        let mut working = self.state.clone();
        run(&mut working)?;
        *self.state = working;
        Ok(())
    }
}

/// Pure reducer: returns the state after `action`, or the reason it was rejected.
pub fn reduce(state: &TabletopState, action: &Action) -> Result<TabletopState, ExecuteError> {
    let mut next = state.clone();
    transition::execute_transition(action, &mut next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{
        ActionKind, AddCharacterAction, AddMonsterAction, InfuseElementAction, NextRoundAction,
        SetScenarioLevelAction, TransitionError, UndoNextRoundAction,
    };
    use crate::state::{Element, Infusion, InvariantViolation};

    #[test]
    fn reduce_leaves_input_untouched() {
        let state = TabletopState::new();
        let action = Action::from(InfuseElementAction {
            element: Element::Fire,
        });

        let next = reduce(&state, &action).expect("infuse succeeds");

        assert_eq!(state.elemental_infusion.get(Element::Fire), Infusion::Inert);
        assert_eq!(next.elemental_infusion.get(Element::Fire), Infusion::Strong);
    }

    #[test]
    fn rejected_level_reports_pre_validate() {
        let mut state = TabletopState::new();
        let mut engine = TabletopEngine::new(&mut state);

        let error = engine
            .execute(&SetScenarioLevelAction { level: 9 }.into())
            .unwrap_err();

        assert_eq!(error.kind, ActionKind::SetScenarioLevel);
        assert_eq!(error.phase(), TransitionPhase::PreValidate);
        assert_eq!(
            error.source.error,
            TransitionError::LevelOutOfRange { level: 9, max: 7 }
        );
        assert_eq!(engine.state().level, TabletopState::INITIAL_LEVEL);
    }

    #[test]
    fn post_validate_failure_rolls_back() {
        let mut state = TabletopState::new();
        state.elemental_infusion.set(Element::Ice, Infusion::Strong);
        let before = state.clone();

        let undo = UndoNextRoundAction {
            previous_step: before.step,
            elemental_infusion: before.elemental_infusion,
            character_initiatives: Default::default(),
            ability_card_ids: Default::default(),
        };
        let error = TabletopEngine::new(&mut state)
            .apply_inverse(&undo.into())
            .unwrap_err();

        assert_eq!(error.phase(), TransitionPhase::PostValidate);
        assert_eq!(
            error.source.error,
            TransitionError::Invariant(InvariantViolation::RoundUnderflow)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn tracked_actions_commit_in_order() {
        let mut state = TabletopState::new();
        let mut engine = TabletopEngine::new(&mut state);

        engine
            .execute(&AddCharacterAction::new("brute", 10).into())
            .expect("add character");
        engine
            .execute(&AddMonsterAction::new("bandit-guard", 2).into())
            .expect("add monster");
        engine
            .execute(&NextRoundAction.into())
            .expect("next round");

        assert_eq!(state.round, 2);
        assert_eq!(state.characters.len(), 1);
        assert_eq!(state.monsters[0].level, 2);
    }
}
