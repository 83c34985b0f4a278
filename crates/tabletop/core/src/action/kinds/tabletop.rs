//! Board-wide transitions: infusion, scenario level, rounds, clearing.

use std::collections::BTreeMap;

use crate::action::{ActionTransition, TransitionError};
use crate::config::TabletopConfig;
use crate::state::{
    AbilityCardId, CharacterKey, Element, ElementalInfusion, Infusion, Initiative, Level,
    MonsterKey, Step, TabletopState,
};

/// Advances one element along `inert → strong → waning → inert`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfuseElementAction {
    pub element: Element,
}

impl ActionTransition for InfuseElementAction {
    fn apply(&self, state: &mut TabletopState) {
        state
            .elemental_infusion
            .update(self.element, Infusion::infused);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoInfuseElementAction {
    pub element: Element,
}

impl ActionTransition for UndoInfuseElementAction {
    fn apply(&self, state: &mut TabletopState) {
        state
            .elemental_infusion
            .update(self.element, Infusion::reverted);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetScenarioLevelAction {
    pub level: Level,
}

impl ActionTransition for SetScenarioLevelAction {
    fn pre_validate(&self, _state: &TabletopState) -> Result<(), TransitionError> {
        TabletopConfig::check_level(self.level)
    }

    fn apply(&self, state: &mut TabletopState) {
        state.level = self.level;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoSetScenarioLevelAction {
    pub previous_level: Level,
}

impl ActionTransition for UndoSetScenarioLevelAction {
    fn apply(&self, state: &mut TabletopState) {
        state.level = self.previous_level;
    }
}

/// Closes the round: elements decay, initiatives and revealed cards reset.
///
/// Drawn sets are untouched so the deck carries over into the next round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NextRoundAction;

impl ActionTransition for NextRoundAction {
    fn apply(&self, state: &mut TabletopState) {
        state.step = Step::CardSelection;
        state.round = state.round.saturating_add(1);
        state.elemental_infusion = state.elemental_infusion.decayed();
        for character in state.characters.iter_mut() {
            character.initiative = None;
        }
        for monster in state.monsters.iter_mut() {
            monster.current_ability_card_id = None;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoNextRoundAction {
    pub previous_step: Step,
    pub elemental_infusion: ElementalInfusion,
    pub character_initiatives: BTreeMap<CharacterKey, Option<Initiative>>,
    pub ability_card_ids: BTreeMap<MonsterKey, Option<AbilityCardId>>,
}

impl ActionTransition for UndoNextRoundAction {
    fn apply(&self, state: &mut TabletopState) {
        state.step = self.previous_step;
        // Underflow is caught by the invariant check in post-validation.
        state.round = state.round.saturating_sub(1);
        state.elemental_infusion = self.elemental_infusion;
        for character in state.characters.iter_mut() {
            if let Some(initiative) = self.character_initiatives.get(&character.key) {
                character.initiative = *initiative;
            }
        }
        for monster in state.monsters.iter_mut() {
            if let Some(card) = self.ability_card_ids.get(&monster.key) {
                monster.current_ability_card_id = *card;
            }
        }
    }
}

/// Resets the whole tabletop to the session-start state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearTabletopAction;

impl ActionTransition for ClearTabletopAction {
    fn apply(&self, state: &mut TabletopState) {
        *state = TabletopState::new();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoClearTabletopAction {
    pub previous: Box<TabletopState>,
}

impl ActionTransition for UndoClearTabletopAction {
    fn apply(&self, state: &mut TabletopState) {
        *state = (*self.previous).clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Character, Monster};

    #[test]
    fn next_round_decays_and_resets_round_data() {
        let mut state = TabletopState::new();
        state.step = Step::Actions;
        state.elemental_infusion.set(Element::Fire, Infusion::Strong);
        state.elemental_infusion.set(Element::Ice, Infusion::Waning);
        state.upsert_character(Character::new("brute".into(), 10).with_initiative(45));
        let mut monster = Monster::new("bandit-guard".into(), 1);
        monster.current_ability_card_id = Some(AbilityCardId(2));
        monster.drawn_ability_card_ids.push(AbilityCardId(2));
        state.upsert_monster(monster);

        NextRoundAction.apply(&mut state);

        assert_eq!(state.round, 2);
        assert_eq!(state.step, Step::CardSelection);
        assert_eq!(state.elemental_infusion.get(Element::Fire), Infusion::Waning);
        assert_eq!(state.elemental_infusion.get(Element::Ice), Infusion::Inert);
        assert_eq!(state.characters[0].initiative, None);
        assert_eq!(state.monsters[0].current_ability_card_id, None);
        assert_eq!(
            state.monsters[0].drawn_ability_card_ids,
            vec![AbilityCardId(2)]
        );
    }

    #[test]
    fn clear_resets_to_initial_state() {
        let mut state = TabletopState::new();
        state.round = 4;
        state.upsert_character(Character::new("cragheart".into(), 10));

        ClearTabletopAction.apply(&mut state);

        assert_eq!(state, TabletopState::new());
    }

    #[test]
    fn scenario_level_out_of_range_fails_pre_validation() {
        let state = TabletopState::new();
        assert!(SetScenarioLevelAction { level: 7 }.pre_validate(&state).is_ok());
        assert!(SetScenarioLevelAction { level: 9 }.pre_validate(&state).is_err());
    }
}
