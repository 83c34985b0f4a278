//! Character roster transitions.

use crate::action::ActionTransition;
use crate::state::{
    Character, CharacterKey, Conditions, HitPoints, TabletopState, distinct_conditions,
};

/// Seats a character, or replaces the character already using `key`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddCharacterAction {
    pub key: CharacterKey,
    pub hit_points: HitPoints,
}

impl AddCharacterAction {
    pub fn new(key: impl Into<CharacterKey>, hit_points: HitPoints) -> Self {
        Self {
            key: key.into(),
            hit_points,
        }
    }
}

impl ActionTransition for AddCharacterAction {
    fn apply(&self, state: &mut TabletopState) {
        state.upsert_character(Character::new(self.key.clone(), self.hit_points));
    }
}

/// Reverses [`AddCharacterAction`]: removes the character, or puts back the
/// one it replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoAddCharacterAction {
    pub key: CharacterKey,
    pub replaced: Option<Character>,
}

impl ActionTransition for UndoAddCharacterAction {
    fn apply(&self, state: &mut TabletopState) {
        match &self.replaced {
            Some(previous) => {
                state.upsert_character(previous.clone());
            }
            None => {
                state.remove_character(&self.key);
            }
        }
    }
}

/// Overwrites a character's hit points and conditions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateCharacterAction {
    pub key: CharacterKey,
    pub hit_points: HitPoints,
    pub conditions: Conditions,
}

impl ActionTransition for UpdateCharacterAction {
    fn apply(&self, state: &mut TabletopState) {
        if let Some(character) = state.character_mut(&self.key) {
            character.hit_points = self.hit_points;
            character.conditions = distinct_conditions(&self.conditions);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoUpdateCharacterAction {
    pub key: CharacterKey,
    pub previous_hit_points: HitPoints,
    pub previous_conditions: Conditions,
}

impl ActionTransition for UndoUpdateCharacterAction {
    fn apply(&self, state: &mut TabletopState) {
        if let Some(character) = state.character_mut(&self.key) {
            character.hit_points = self.previous_hit_points;
            character.conditions = self.previous_conditions.clone();
        }
    }
}
