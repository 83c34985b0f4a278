use super::common::{AbilityCardId, HitPoints, Level, MonsterKey, StandeeId};
use super::condition::Conditions;

/// Standee rank. Ordering follows threat: `Normal < Elite < Boss`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Rank {
    #[default]
    Normal,
    Elite,
    Boss,
}

/// One physical monster figure on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Standee {
    pub id: StandeeId,
    pub rank: Rank,
    pub hit_points: HitPoints,
    pub conditions: Conditions,
}

impl Standee {
    /// Hit points a standee is placed with.
    pub const INITIAL_HIT_POINTS: HitPoints = 5;

    pub fn new(id: StandeeId, rank: Rank) -> Self {
        Self {
            id,
            rank,
            hit_points: Self::INITIAL_HIT_POINTS,
            conditions: Conditions::new(),
        }
    }
}

/// A monster type in play together with its standees and ability deck state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub key: MonsterKey,
    pub level: Level,
    /// Standees in placement order.
    pub standees: Vec<Standee>,
    /// Ability card revealed for the current round, if any.
    pub current_ability_card_id: Option<AbilityCardId>,
    /// Cards drawn since the last reshuffle, in draw order.
    ///
    /// Only cleared when the deck is exhausted.
    pub drawn_ability_card_ids: Vec<AbilityCardId>,
}

impl Monster {
    pub fn new(key: MonsterKey, level: Level) -> Self {
        Self {
            key,
            level,
            standees: Vec::new(),
            current_ability_card_id: None,
            drawn_ability_card_ids: Vec::new(),
        }
    }

    pub fn standee(&self, id: StandeeId) -> Option<&Standee> {
        self.standees.iter().find(|standee| standee.id == id)
    }

    pub fn standee_mut(&mut self, id: StandeeId) -> Option<&mut Standee> {
        self.standees.iter_mut().find(|standee| standee.id == id)
    }

    pub fn standee_position(&self, id: StandeeId) -> Option<usize> {
        self.standees.iter().position(|standee| standee.id == id)
    }

    pub fn has_drawn(&self, card: AbilityCardId) -> bool {
        self.drawn_ability_card_ids.contains(&card)
    }
}
