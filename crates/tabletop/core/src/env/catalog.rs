use crate::state::{AbilityCardId, CharacterKey, HitPoints, Initiative, MonsterKey};

pub trait CatalogOracle: Send + Sync {
    fn character(&self, key: &CharacterKey) -> Option<&CharacterDefinition>;

    fn monster(&self, key: &MonsterKey) -> Option<&MonsterDefinition>;
}

/// Static data for one character class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterDefinition {
    pub key: CharacterKey,
    /// Maximum hit points, indexed by character level starting at 1.
    pub hit_points: Vec<HitPoints>,
}

impl CharacterDefinition {
    pub fn hit_points_at(&self, level: usize) -> Option<HitPoints> {
        level
            .checked_sub(1)
            .and_then(|index| self.hit_points.get(index))
            .copied()
    }
}

/// One card of a monster's ability deck.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityCardDefinition {
    pub id: AbilityCardId,
    pub name: String,
    pub initiative: Initiative,
    /// Printed shuffle icon. Shown to players only; draws never read it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub shuffle: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterDefinition {
    pub key: MonsterKey,
    pub ability_cards: Vec<AbilityCardDefinition>,
}

impl MonsterDefinition {
    pub fn ability_card(&self, id: AbilityCardId) -> Option<&AbilityCardDefinition> {
        self.ability_cards.iter().find(|card| card.id == id)
    }

    pub fn ability_card_ids(&self) -> impl Iterator<Item = AbilityCardId> + '_ {
        self.ability_cards.iter().map(|card| card.id)
    }
}

/// In-memory catalog backed by plain lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Vec<CharacterDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub monsters: Vec<MonsterDefinition>,
}

impl Catalog {
    pub fn new(characters: Vec<CharacterDefinition>, monsters: Vec<MonsterDefinition>) -> Self {
        Self {
            characters,
            monsters,
        }
    }
}

impl CatalogOracle for Catalog {
    fn character(&self, key: &CharacterKey) -> Option<&CharacterDefinition> {
        self.characters.iter().find(|character| &character.key == key)
    }

    fn monster(&self, key: &MonsterKey) -> Option<&MonsterDefinition> {
        self.monsters.iter().find(|monster| &monster.key == key)
    }
}
