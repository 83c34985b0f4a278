use super::common::{CharacterKey, HitPoints, Initiative};
use super::condition::Conditions;

/// A player character seated at the tabletop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub key: CharacterKey,
    pub hit_points: HitPoints,
    pub conditions: Conditions,
    /// Unset during card selection; set when ability cards are revealed.
    pub initiative: Option<Initiative>,
}

impl Character {
    pub fn new(key: CharacterKey, hit_points: HitPoints) -> Self {
        Self {
            key,
            hit_points,
            conditions: Conditions::new(),
            initiative: None,
        }
    }

    #[must_use]
    pub fn with_initiative(mut self, initiative: Initiative) -> Self {
        self.initiative = Some(initiative);
        self
    }
}
