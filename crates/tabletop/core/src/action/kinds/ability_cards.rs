//! Monster ability-card draws.
//!
//! Draws are resolved outside the core (the card choice is random); these
//! transitions only record an already chosen card.

use std::collections::{BTreeMap, BTreeSet};

use crate::action::ActionTransition;
use crate::state::{
    AbilityCardId, CharacterKey, Initiative, Monster, MonsterKey, Step, TabletopState,
};

/// What a single monster's deck looked like before a draw, enough to take
/// the draw back exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDrawUndo {
    /// Current card before the draw.
    pub previous_id: Option<AbilityCardId>,
    /// Card the draw appended to the drawn set, if it appended one.
    pub next_id: Option<AbilityCardId>,
    /// Full drawn set before the draw, recorded only when the draw reshuffled.
    pub previous_drawn: Option<Vec<AbilityCardId>>,
}

impl CardDrawUndo {
    /// Captures `monster` as it is immediately before drawing `card`.
    pub fn capture(monster: &Monster, card: Option<AbilityCardId>, reshuffled: bool) -> Self {
        let next_id = card.filter(|id| reshuffled || !monster.has_drawn(*id));
        Self {
            previous_id: monster.current_ability_card_id,
            next_id,
            previous_drawn: reshuffled.then(|| monster.drawn_ability_card_ids.clone()),
        }
    }

    pub fn revert(&self, monster: &mut Monster) {
        monster.current_ability_card_id = self.previous_id;
        match (&self.previous_drawn, self.next_id) {
            (Some(previous), _) => monster.drawn_ability_card_ids = previous.clone(),
            (None, Some(next)) => {
                if let Some(index) = monster
                    .drawn_ability_card_ids
                    .iter()
                    .rposition(|id| *id == next)
                {
                    monster.drawn_ability_card_ids.remove(index);
                }
            }
            (None, None) => {}
        }
    }
}

fn reveal(monster: &mut Monster, card: Option<AbilityCardId>, reshuffled: bool) {
    if reshuffled {
        monster.drawn_ability_card_ids.clear();
    }
    monster.current_ability_card_id = card;
    if let Some(card) = card
        && !monster.has_drawn(card)
    {
        monster.drawn_ability_card_ids.push(card);
    }
}

/// Ends card selection: sets every character's initiative and reveals one
/// ability card per monster.
///
/// Characters missing from `character_initiatives` and monsters missing from
/// `ability_card_ids` are left without an initiative / current card.
/// Monsters listed in `reshuffled` had an exhausted deck and start a new
/// drawn set with this card.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawMonsterAbilityCardsSuccessAction {
    pub character_initiatives: BTreeMap<CharacterKey, Initiative>,
    pub ability_card_ids: BTreeMap<MonsterKey, AbilityCardId>,
    pub reshuffled: BTreeSet<MonsterKey>,
}

impl ActionTransition for DrawMonsterAbilityCardsSuccessAction {
    fn apply(&self, state: &mut TabletopState) {
        state.step = Step::Actions;

        for character in state.characters.iter_mut() {
            character.initiative = self.character_initiatives.get(&character.key).copied();
        }

        for monster in state.monsters.iter_mut() {
            let card = self.ability_card_ids.get(&monster.key).copied();
            let reshuffled = self.reshuffled.contains(&monster.key);
            reveal(monster, card, reshuffled);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoDrawMonsterAbilityCardsAction {
    pub previous_step: Step,
    pub previous_initiatives: BTreeMap<CharacterKey, Option<Initiative>>,
    pub ability_card_ids: BTreeMap<MonsterKey, CardDrawUndo>,
}

impl ActionTransition for UndoDrawMonsterAbilityCardsAction {
    fn apply(&self, state: &mut TabletopState) {
        state.step = self.previous_step;

        for character in state.characters.iter_mut() {
            if let Some(previous) = self.previous_initiatives.get(&character.key) {
                character.initiative = *previous;
            }
        }

        for monster in state.monsters.iter_mut() {
            if let Some(undo) = self.ability_card_ids.get(&monster.key) {
                undo.revert(monster);
            }
        }
    }
}

/// Reveals one card for a single monster, e.g. one added mid-round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawMonsterAbilityCardSuccessAction {
    pub key: MonsterKey,
    pub ability_card_id: AbilityCardId,
    pub reshuffled: bool,
}

impl ActionTransition for DrawMonsterAbilityCardSuccessAction {
    fn apply(&self, state: &mut TabletopState) {
        if let Some(monster) = state.monster_mut(&self.key) {
            reveal(monster, Some(self.ability_card_id), self.reshuffled);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoDrawMonsterAbilityCardAction {
    pub key: MonsterKey,
    pub undo: CardDrawUndo,
}

impl ActionTransition for UndoDrawMonsterAbilityCardAction {
    fn apply(&self, state: &mut TabletopState) {
        if let Some(monster) = state.monster_mut(&self.key) {
            self.undo.revert(monster);
        }
    }
}
