//! Random ability-card draws.
//!
//! Draws are resolved inside the session worker before the resulting success
//! action enters history, so the core stays deterministic and a draw can be
//! undone exactly.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use tabletop_core::{AbilityCardId, Monster, MonsterDefinition};

/// Card chosen for one monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDraw {
    pub id: AbilityCardId,
    /// The drawn set was cleared before this card was picked.
    pub reshuffled: bool,
}

/// Picks ability cards uniformly among the ones not drawn yet.
pub struct AbilityCardDrawer {
    rng: StdRng,
}

impl AbilityCardDrawer {
    /// Seeded drawers repeat the same sequence of picks for the same requests.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Draws the next card for `monster` from its deck.
    ///
    /// The drawn set is cleared only when every card has been drawn. Returns
    /// `None` for an empty deck.
    pub fn draw(&mut self, monster: &Monster, deck: &MonsterDefinition) -> Option<CardDraw> {
        let undrawn: Vec<AbilityCardId> = deck
            .ability_card_ids()
            .filter(|id| !monster.has_drawn(*id))
            .collect();

        let reshuffled = undrawn.is_empty();
        let candidates = if reshuffled {
            deck.ability_card_ids().collect()
        } else {
            undrawn
        };

        let id = *candidates.choose(&mut self.rng)?;
        tracing::debug!(
            target: "runtime::draw",
            monster = %monster.key,
            card = %id,
            reshuffled,
            "Drew ability card"
        );
        Some(CardDraw { id, reshuffled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_core::AbilityCardDefinition;

    fn deck(shuffle_on: Option<u32>) -> MonsterDefinition {
        MonsterDefinition {
            key: "bandit-archer".into(),
            ability_cards: (1..=4)
                .map(|id| AbilityCardDefinition {
                    id: AbilityCardId(id),
                    name: format!("Card {id}"),
                    initiative: 10 * id as u8,
                    shuffle: shuffle_on == Some(id),
                })
                .collect(),
        }
    }

    fn monster(drawn: &[u32]) -> Monster {
        let mut monster = Monster::new("bandit-archer".into(), 1);
        monster.drawn_ability_card_ids = drawn.iter().copied().map(AbilityCardId).collect();
        monster
    }

    #[test]
    fn picks_only_undrawn_cards() {
        let mut drawer = AbilityCardDrawer::new(Some(7));
        let monster = monster(&[1, 2, 4]);

        for _ in 0..16 {
            let draw = drawer.draw(&monster, &deck(None)).unwrap();
            assert_eq!(draw, CardDraw { id: AbilityCardId(3), reshuffled: false });
        }
    }

    #[test]
    fn exhausted_deck_is_reshuffled() {
        let mut drawer = AbilityCardDrawer::new(Some(7));
        let draw = drawer.draw(&monster(&[1, 2, 3, 4]), &deck(None)).unwrap();

        assert!(draw.reshuffled);
        assert!((1..=4).contains(&draw.id.0));
    }

    #[test]
    fn drawn_shuffle_card_leaves_remaining_cards_in_play() {
        let mut drawer = AbilityCardDrawer::new(Some(7));
        let monster = monster(&[2]);

        for _ in 0..16 {
            let draw = drawer.draw(&monster, &deck(Some(2))).unwrap();
            assert!(!draw.reshuffled);
            assert_ne!(draw.id, AbilityCardId(2));
        }
    }

    #[test]
    fn empty_deck_draws_nothing() {
        let mut drawer = AbilityCardDrawer::new(None);
        let empty = MonsterDefinition {
            key: "goblin".into(),
            ability_cards: Vec::new(),
        };

        assert_eq!(drawer.draw(&monster(&[]), &empty), None);
    }

    #[test]
    fn same_seed_same_picks() {
        let picks = |seed| {
            let mut drawer = AbilityCardDrawer::new(Some(seed));
            (0..8)
                .map(|_| drawer.draw(&monster(&[]), &deck(None)).unwrap().id)
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
    }
}
