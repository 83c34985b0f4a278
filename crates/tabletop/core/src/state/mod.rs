//! Canonical tabletop state.
//!
//! This module owns the data structures that describe characters, monsters,
//! the infusion board and round bookkeeping. Runtime layers clone or query
//! this state but mutate it exclusively through the engine.
pub mod error;
pub mod types;

use std::collections::BTreeSet;

pub use error::InvariantViolation;
pub use types::{
    AbilityCardId, Character, CharacterKey, Condition, Conditions, Element, ElementalInfusion,
    HitPoints, Infusion, Initiative, Level, Monster, MonsterKey, Rank, Standee, StandeeId, Step,
    distinct_conditions,
};

/// Canonical snapshot of a tabletop session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabletopState {
    pub step: Step,
    /// Round counter, starting at 1.
    pub round: u32,
    /// Scenario level (0..=7).
    pub level: Level,
    pub elemental_infusion: ElementalInfusion,
    /// Characters in the order they joined.
    pub characters: Vec<Character>,
    /// Monster types in the order they were added.
    pub monsters: Vec<Monster>,
}

impl TabletopState {
    pub const INITIAL_ROUND: u32 = 1;
    pub const INITIAL_LEVEL: Level = 1;

    /// Session start: round 1, card selection, every element inert, no figures.
    pub fn new() -> Self {
        Self {
            step: Step::CardSelection,
            round: Self::INITIAL_ROUND,
            level: Self::INITIAL_LEVEL,
            elemental_infusion: ElementalInfusion::inert(),
            characters: Vec::new(),
            monsters: Vec::new(),
        }
    }

    pub fn character(&self, key: &CharacterKey) -> Option<&Character> {
        self.characters.iter().find(|character| &character.key == key)
    }

    pub fn character_mut(&mut self, key: &CharacterKey) -> Option<&mut Character> {
        self.characters
            .iter_mut()
            .find(|character| &character.key == key)
    }

    pub fn monster(&self, key: &MonsterKey) -> Option<&Monster> {
        self.monsters.iter().find(|monster| &monster.key == key)
    }

    pub fn monster_mut(&mut self, key: &MonsterKey) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|monster| &monster.key == key)
    }

    pub fn standee(&self, key: &MonsterKey, id: StandeeId) -> Option<&Standee> {
        self.monster(key)?.standee(id)
    }

    /// Inserts `character`, replacing an existing character with the same key in place.
    ///
    /// Returns the replaced character.
    pub fn upsert_character(&mut self, character: Character) -> Option<Character> {
        match self.character_mut(&character.key) {
            Some(slot) => Some(std::mem::replace(slot, character)),
            None => {
                self.characters.push(character);
                None
            }
        }
    }

    pub fn remove_character(&mut self, key: &CharacterKey) -> Option<Character> {
        let index = self.characters.iter().position(|c| &c.key == key)?;
        Some(self.characters.remove(index))
    }

    /// Inserts `monster`, replacing an existing monster with the same key in place.
    ///
    /// Returns the replaced monster.
    pub fn upsert_monster(&mut self, monster: Monster) -> Option<Monster> {
        match self.monster_mut(&monster.key) {
            Some(slot) => Some(std::mem::replace(slot, monster)),
            None => {
                self.monsters.push(monster);
                None
            }
        }
    }

    pub fn remove_monster(&mut self, key: &MonsterKey) -> Option<Monster> {
        let index = self.monsters.iter().position(|m| &m.key == key)?;
        Some(self.monsters.remove(index))
    }

    /// Verifies the structural invariants every committed state must satisfy.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.round < Self::INITIAL_ROUND {
            return Err(InvariantViolation::RoundUnderflow);
        }

        let mut seen = BTreeSet::new();
        for character in &self.characters {
            if !seen.insert(&character.key) {
                return Err(InvariantViolation::DuplicateCharacter(
                    character.key.clone(),
                ));
            }
        }

        let mut seen = BTreeSet::new();
        for monster in &self.monsters {
            if !seen.insert(&monster.key) {
                return Err(InvariantViolation::DuplicateMonster(monster.key.clone()));
            }

            let mut ids = BTreeSet::new();
            for standee in &monster.standees {
                if !ids.insert(standee.id) {
                    return Err(InvariantViolation::DuplicateStandee {
                        key: monster.key.clone(),
                        id: standee.id,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for TabletopState {
    fn default() -> Self {
        Self::new()
    }
}
