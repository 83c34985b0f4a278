mod common;

use std::collections::BTreeMap;

use runtime::RuntimeError;
use tabletop_core::{
    AbilityCardId, AddCharacterAction, AddMonsterAction, CharacterKey, MonsterKey, NextRoundAction,
    Step,
};

async fn seat_party(handle: &runtime::TabletopHandle) {
    handle.dispatch(AddCharacterAction::new("brute", 10)).await.unwrap();
    handle.dispatch(AddMonsterAction::new("bandit-guard", 1)).await.unwrap();
    handle.dispatch(AddMonsterAction::new("living-bones", 1)).await.unwrap();
    handle.dispatch(AddMonsterAction::new("goblin", 1)).await.unwrap();
}

fn monster(key: &str) -> MonsterKey {
    MonsterKey::from(key)
}

fn initiatives() -> BTreeMap<CharacterKey, u8> {
    BTreeMap::from([("brute".into(), 42)])
}

#[tokio::test]
async fn draw_reveals_cards_and_undoes_exactly() {
    let runtime = common::start(Some(9)).await;
    let handle = runtime.handle();
    seat_party(&handle).await;
    let before = handle.current_state();

    let draw = handle
        .draw_monster_ability_cards(initiatives())
        .await
        .unwrap();

    // goblin has an empty deck and is left out of the draw
    assert_eq!(draw.ability_card_ids.len(), 2);
    assert!(draw.reshuffled.is_empty());

    let state = handle.current_state();
    assert_eq!(state.step, Step::Actions);
    assert_eq!(state.character(&"brute".into()).unwrap().initiative, Some(42));
    let guard = state.monster(&"bandit-guard".into()).unwrap();
    assert_eq!(
        guard.current_ability_card_id,
        draw.ability_card_ids.get(&monster("bandit-guard")).copied()
    );
    assert_eq!(guard.drawn_ability_card_ids.len(), 1);
    assert_eq!(
        state.monster(&"goblin".into()).unwrap().current_ability_card_id,
        None
    );

    handle.undo(1).await.unwrap();
    assert_eq!(handle.current_state(), before);
}

#[tokio::test]
async fn exhausted_deck_reshuffles() {
    let runtime = common::start(Some(3)).await;
    let handle = runtime.handle();
    seat_party(&handle).await;

    let mut seen = Vec::new();
    for _ in 0..2 {
        let draw = handle
            .draw_monster_ability_cards(initiatives())
            .await
            .unwrap();
        seen.push(draw.ability_card_ids[&monster("living-bones")]);
        handle.dispatch(NextRoundAction).await.unwrap();
    }
    seen.sort();
    assert_eq!(seen, vec![AbilityCardId(1), AbilityCardId(2)]);

    let third = handle
        .draw_monster_ability_cards(initiatives())
        .await
        .unwrap();
    assert!(third.reshuffled.contains(&monster("living-bones")));
    let bones = handle.current_state();
    let bones = bones.monster(&"living-bones".into()).unwrap();
    assert_eq!(bones.drawn_ability_card_ids.len(), 1);

    handle.undo(1).await.unwrap();
    let state = handle.current_state();
    assert_eq!(
        state
            .monster(&"living-bones".into())
            .unwrap()
            .drawn_ability_card_ids
            .len(),
        2
    );
}

#[tokio::test]
async fn seeded_sessions_draw_the_same_cards() {
    let mut runs = Vec::new();
    for _ in 0..2 {
        let runtime = common::start(Some(2024)).await;
        let handle = runtime.handle();
        seat_party(&handle).await;

        let mut draws = Vec::new();
        for _ in 0..3 {
            draws.push(
                handle
                    .draw_monster_ability_cards(initiatives())
                    .await
                    .unwrap()
                    .ability_card_ids,
            );
            handle.dispatch(NextRoundAction).await.unwrap();
        }
        runs.push(draws);
    }

    assert_eq!(runs[0], runs[1]);
}

#[tokio::test]
async fn single_draw_requires_a_monster_in_play() {
    let runtime = common::start(Some(5)).await;
    let handle = runtime.handle();

    let error = handle
        .draw_monster_ability_card("bandit-guard")
        .await
        .unwrap_err();
    assert!(matches!(error, RuntimeError::MonsterNotInPlay(_)));

    let error = handle.draw_monster_ability_card("ooze").await.unwrap_err();
    assert!(matches!(error, RuntimeError::UnknownMonster(_)));

    handle.dispatch(AddMonsterAction::new("goblin", 1)).await.unwrap();
    let error = handle.draw_monster_ability_card("goblin").await.unwrap_err();
    assert!(matches!(error, RuntimeError::EmptyAbilityDeck(_)));

    handle
        .dispatch(AddMonsterAction::new("bandit-guard", 2))
        .await
        .unwrap();
    let draw = handle.draw_monster_ability_card("bandit-guard").await.unwrap();
    assert_eq!(
        handle
            .current_state()
            .monster(&"bandit-guard".into())
            .unwrap()
            .current_ability_card_id,
        Some(draw.ability_card_id)
    );
    assert_eq!(handle.snapshot().past_len, 3);
}
