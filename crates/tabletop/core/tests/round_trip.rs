//! Property-based tests for the history laws.
//!
//! - **Round trip**: applying a tracked action and then the inverse resolved
//!   against the pre-action state restores that state exactly.
//! - **Undo/redo symmetry**: `undo(k)` followed by `redo(k)` returns to the
//!   state reached by the original dispatches.
//! - **Full rewind**: undoing everything returns to the session start.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use tabletop_core::{
    AbilityCardId, Action, AddCharacterAction, AddMonsterAction, AddMonsterStandeeAction,
    ClearTabletopAction, Condition, DrawMonsterAbilityCardSuccessAction,
    DrawMonsterAbilityCardsSuccessAction, Element, InfuseElementAction, NextRoundAction, Rank,
    RemoveMonsterStandeeAction, SetScenarioLevelAction, StandeeId, TabletopState, TimeMachine,
    TrackedAction, UpdateCharacterAction, UpdateMonsterStandeeAction, reduce, resolve_inverse,
};

const CHARACTERS: [&str; 3] = ["brute", "spellweaver", "scoundrel"];
const MONSTERS: [&str; 3] = ["bandit-guard", "bandit-archer", "living-bones"];

fn character_key() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CHARACTERS.to_vec())
}

fn monster_key() -> impl Strategy<Value = &'static str> {
    prop::sample::select(MONSTERS.to_vec())
}

fn element() -> impl Strategy<Value = Element> {
    prop::sample::select(vec![
        Element::Fire,
        Element::Ice,
        Element::Air,
        Element::Earth,
        Element::Light,
        Element::Dark,
    ])
}

fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(vec![Rank::Normal, Rank::Elite, Rank::Boss])
}

fn conditions() -> impl Strategy<Value = Vec<Condition>> {
    prop::collection::vec(
        prop::sample::select(vec![
            Condition::Poison,
            Condition::Wound,
            Condition::Immobilize,
            Condition::Disarm,
            Condition::Stun,
            Condition::Muddle,
            Condition::Invisible,
            Condition::Strengthen,
        ]),
        0..3,
    )
}

fn card() -> impl Strategy<Value = AbilityCardId> {
    (1u32..6).prop_map(AbilityCardId)
}

fn draw_all() -> impl Strategy<Value = DrawMonsterAbilityCardsSuccessAction> {
    (
        prop::collection::btree_map(character_key(), 1u8..100, 0..3),
        prop::collection::btree_map(monster_key(), card(), 0..3),
        prop::collection::btree_set(monster_key(), 0..2),
    )
        .prop_map(|(initiatives, cards, reshuffled)| {
            DrawMonsterAbilityCardsSuccessAction {
                character_initiatives: initiatives
                    .into_iter()
                    .map(|(key, initiative)| (key.into(), initiative))
                    .collect::<BTreeMap<_, _>>(),
                ability_card_ids: cards
                    .into_iter()
                    .map(|(key, card)| (key.into(), card))
                    .collect(),
                reshuffled: reshuffled
                    .into_iter()
                    .map(Into::into)
                    .collect::<BTreeSet<_>>(),
            }
        })
}

fn roster_action() -> impl Strategy<Value = TrackedAction> {
    prop_oneof![
        (character_key(), 1..20)
            .prop_map(|(key, hp)| TrackedAction::from(AddCharacterAction::new(key, hp))),
        (character_key(), -3..20, conditions()).prop_map(|(key, hp, conditions)| {
            TrackedAction::from(UpdateCharacterAction {
                key: key.into(),
                hit_points: hp,
                conditions,
            })
        }),
        (monster_key(), 0u8..=7)
            .prop_map(|(key, level)| TrackedAction::from(AddMonsterAction::new(key, level))),
        (monster_key(), 1u32..5, rank()).prop_map(|(key, id, rank)| {
            TrackedAction::from(AddMonsterStandeeAction::new(key, id, rank))
        }),
        (monster_key(), 1u32..5, -2..12, conditions()).prop_map(|(key, id, hp, conditions)| {
            TrackedAction::from(UpdateMonsterStandeeAction {
                key: key.into(),
                id: StandeeId(id),
                hit_points: hp,
                conditions,
            })
        }),
        (monster_key(), 1u32..5).prop_map(|(key, id)| {
            TrackedAction::from(RemoveMonsterStandeeAction {
                key: key.into(),
                id: StandeeId(id),
            })
        }),
    ]
}

fn board_action() -> impl Strategy<Value = TrackedAction> {
    prop_oneof![
        draw_all().prop_map(TrackedAction::from),
        (monster_key(), card(), any::<bool>()).prop_map(|(key, card, reshuffled)| {
            TrackedAction::from(DrawMonsterAbilityCardSuccessAction {
                key: key.into(),
                ability_card_id: card,
                reshuffled,
            })
        }),
        element().prop_map(|element| TrackedAction::from(InfuseElementAction { element })),
        (0u8..=7).prop_map(|level| TrackedAction::from(SetScenarioLevelAction { level })),
        Just(TrackedAction::from(NextRoundAction)),
        Just(TrackedAction::from(ClearTabletopAction)),
    ]
}

fn tracked_action() -> impl Strategy<Value = TrackedAction> {
    prop_oneof![3 => roster_action(), 2 => board_action()]
}

fn reachable(actions: &[TrackedAction]) -> TabletopState {
    actions.iter().fold(TabletopState::new(), |state, action| {
        reduce(&state, &Action::from(action.clone())).unwrap_or(state)
    })
}

proptest! {
    #[test]
    fn prop_inverse_restores_pre_action_state(
        prefix in prop::collection::vec(tracked_action(), 0..24),
        action in tracked_action(),
    ) {
        let state = reachable(&prefix);
        let inverse = resolve_inverse(&state, &action);

        let applied = reduce(&state, &action.clone().into()).unwrap();
        let restored = reduce(&applied, &inverse.into()).unwrap();

        prop_assert_eq!(restored, state);
    }

    #[test]
    fn prop_undo_then_redo_is_identity(
        actions in prop::collection::vec(tracked_action(), 1..24),
        fraction in 0.0f64..=1.0,
    ) {
        let mut machine = TimeMachine::default();
        for action in &actions {
            machine.dispatch(action.clone().into()).unwrap();
        }
        let after = machine.state().clone();
        let k = ((actions.len() as f64) * fraction) as usize;

        prop_assert_eq!(machine.undo(k).unwrap(), k);
        prop_assert_eq!(machine.future().len(), k);
        prop_assert_eq!(machine.redo(k).unwrap(), k);
        prop_assert_eq!(machine.state(), &after);
        prop_assert!(!machine.can_redo());
    }

    #[test]
    fn prop_full_undo_returns_to_start(
        actions in prop::collection::vec(tracked_action(), 0..24),
        extra in 0usize..4,
    ) {
        let mut machine = TimeMachine::default();
        for action in &actions {
            machine.dispatch(action.clone().into()).unwrap();
        }

        prop_assert_eq!(machine.undo(actions.len() + extra).unwrap(), actions.len());
        prop_assert_eq!(machine.state(), &TabletopState::new());
        prop_assert_eq!(machine.future().len(), actions.len());
    }
}
