//! Inverse resolution.
//!
//! [`resolve_inverse`] reads the state immediately before a tracked action
//! applies and captures whatever that action is about to overwrite. When the
//! referenced entity is absent the forward action is a no-op, so the inverse
//! falls back to neutral values (0 hit points, no conditions, nothing to
//! restore) instead of failing.

use std::collections::BTreeMap;

use crate::action::{
    CardDrawUndo, InverseAction, TrackedAction, UndoAddCharacterAction, UndoAddMonsterAction,
    UndoAddMonsterStandeeAction, UndoClearTabletopAction, UndoDrawMonsterAbilityCardAction,
    UndoDrawMonsterAbilityCardsAction, UndoInfuseElementAction, UndoNextRoundAction,
    UndoRemoveMonsterStandeeAction, UndoSetScenarioLevelAction, UndoUpdateCharacterAction,
    UndoUpdateMonsterStandeeAction,
};
use crate::state::{AbilityCardId, CharacterKey, Initiative, MonsterKey, TabletopState};

/// Computes the inverse of `action` against the state it is about to be applied to.
pub fn resolve_inverse(state: &TabletopState, action: &TrackedAction) -> InverseAction {
    match action {
        TrackedAction::AddCharacter(add) => UndoAddCharacterAction {
            key: add.key.clone(),
            replaced: state.character(&add.key).cloned(),
        }
        .into(),

        TrackedAction::UpdateCharacter(update) => {
            let previous = state.character(&update.key);
            UndoUpdateCharacterAction {
                key: update.key.clone(),
                previous_hit_points: previous.map_or(0, |c| c.hit_points),
                previous_conditions: previous.map(|c| c.conditions.clone()).unwrap_or_default(),
            }
            .into()
        }

        TrackedAction::AddMonster(add) => UndoAddMonsterAction {
            key: add.key.clone(),
            replaced: state.monster(&add.key).cloned(),
        }
        .into(),

        TrackedAction::AddMonsterStandee(add) => UndoAddMonsterStandeeAction {
            key: add.key.clone(),
            id: add.id,
            replaced: state.standee(&add.key, add.id).cloned(),
        }
        .into(),

        TrackedAction::UpdateMonsterStandee(update) => {
            let previous = state.standee(&update.key, update.id);
            UndoUpdateMonsterStandeeAction {
                key: update.key.clone(),
                id: update.id,
                previous_hit_points: previous.map_or(0, |s| s.hit_points),
                previous_conditions: previous.map(|s| s.conditions.clone()).unwrap_or_default(),
            }
            .into()
        }

        TrackedAction::RemoveMonsterStandee(remove) => {
            let removed = state.monster(&remove.key).and_then(|monster| {
                let index = monster.standee_position(remove.id)?;
                Some((index, monster.standees[index].clone()))
            });
            UndoRemoveMonsterStandeeAction {
                key: remove.key.clone(),
                index: removed.as_ref().map_or(0, |(index, _)| *index),
                standee: removed.map(|(_, standee)| standee),
            }
            .into()
        }

        TrackedAction::DrawMonsterAbilityCardsSuccess(draw) => {
            let ability_card_ids = state
                .monsters
                .iter()
                .map(|monster| {
                    let card = draw.ability_card_ids.get(&monster.key).copied();
                    let reshuffled = draw.reshuffled.contains(&monster.key);
                    (
                        monster.key.clone(),
                        CardDrawUndo::capture(monster, card, reshuffled),
                    )
                })
                .collect();
            UndoDrawMonsterAbilityCardsAction {
                previous_step: state.step,
                previous_initiatives: character_initiatives(state),
                ability_card_ids,
            }
            .into()
        }

        TrackedAction::DrawMonsterAbilityCardSuccess(draw) => {
            let undo = state
                .monster(&draw.key)
                .map(|monster| {
                    CardDrawUndo::capture(monster, Some(draw.ability_card_id), draw.reshuffled)
                })
                .unwrap_or(CardDrawUndo {
                    previous_id: None,
                    next_id: None,
                    previous_drawn: None,
                });
            UndoDrawMonsterAbilityCardAction {
                key: draw.key.clone(),
                undo,
            }
            .into()
        }

        TrackedAction::InfuseElement(infuse) => UndoInfuseElementAction {
            element: infuse.element,
        }
        .into(),

        TrackedAction::SetScenarioLevel(_) => UndoSetScenarioLevelAction {
            previous_level: state.level,
        }
        .into(),

        TrackedAction::NextRound(_) => UndoNextRoundAction {
            previous_step: state.step,
            elemental_infusion: state.elemental_infusion,
            character_initiatives: character_initiatives(state),
            ability_card_ids: current_ability_cards(state),
        }
        .into(),

        TrackedAction::ClearTabletop(_) => UndoClearTabletopAction {
            previous: Box::new(state.clone()),
        }
        .into(),
    }
}

fn character_initiatives(state: &TabletopState) -> BTreeMap<CharacterKey, Option<Initiative>> {
    state
        .characters
        .iter()
        .map(|character| (character.key.clone(), character.initiative))
        .collect()
}

fn current_ability_cards(state: &TabletopState) -> BTreeMap<MonsterKey, Option<AbilityCardId>> {
    state
        .monsters
        .iter()
        .map(|monster| (monster.key.clone(), monster.current_ability_card_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{
        ActionTransition, RemoveMonsterStandeeAction, UpdateCharacterAction,
        UpdateMonsterStandeeAction,
    };
    use crate::engine::reduce;
    use crate::state::{Character, Condition, Monster, Rank, Standee, StandeeId};

    fn undo(state: &TabletopState, action: TrackedAction) -> TabletopState {
        let inverse = resolve_inverse(state, &action);
        let after = reduce(state, &action.into()).expect("forward applies");
        reduce(&after, &inverse.into()).expect("inverse applies")
    }

    #[test]
    fn update_of_absent_character_falls_back() {
        let state = TabletopState::new();
        let action = TrackedAction::from(UpdateCharacterAction {
            key: "mindthief".into(),
            hit_points: 4,
            conditions: vec![Condition::Muddle],
        });

        let inverse = resolve_inverse(&state, &action);

        assert_eq!(
            inverse,
            InverseAction::from(UndoUpdateCharacterAction {
                key: "mindthief".into(),
                previous_hit_points: 0,
                previous_conditions: Vec::new(),
            })
        );
    }

    #[test]
    fn update_captures_previous_values() {
        let mut state = TabletopState::new();
        let mut brute = Character::new("brute".into(), 10);
        brute.conditions.push(Condition::Wound);
        state.upsert_character(brute);

        let action = UpdateCharacterAction {
            key: "brute".into(),
            hit_points: 7,
            conditions: vec![Condition::Poison, Condition::Stun],
        };

        assert_eq!(undo(&state, action.into()), state);
    }

    #[test]
    fn removed_standee_returns_to_its_position() {
        let mut state = TabletopState::new();
        let mut monster = Monster::new("bandit-archer".into(), 1);
        for (id, rank) in [(1, Rank::Normal), (2, Rank::Elite), (3, Rank::Normal)] {
            monster.standees.push(Standee::new(StandeeId(id), rank));
        }
        monster.standees[1].hit_points = 2;
        state.upsert_monster(monster);

        let action = RemoveMonsterStandeeAction {
            key: "bandit-archer".into(),
            id: StandeeId(2),
        };

        assert_eq!(undo(&state, action.into()), state);
    }

    #[test]
    fn standee_update_round_trips() {
        let mut state = TabletopState::new();
        let mut monster = Monster::new("living-bones".into(), 3);
        monster.standees.push(Standee::new(StandeeId(4), Rank::Elite));
        state.upsert_monster(monster);

        let action = UpdateMonsterStandeeAction {
            key: "living-bones".into(),
            id: StandeeId(4),
            hit_points: 1,
            conditions: vec![Condition::Immobilize],
        };
        let mut after = state.clone();
        action.apply(&mut after);
        assert_ne!(after, state);

        assert_eq!(undo(&state, action.into()), state);
    }
}
