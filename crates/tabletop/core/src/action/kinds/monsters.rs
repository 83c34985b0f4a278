//! Monster and standee transitions.

use crate::action::{ActionTransition, TransitionError};
use crate::config::TabletopConfig;
use crate::state::{
    Conditions, HitPoints, Level, Monster, MonsterKey, Rank, Standee, StandeeId, TabletopState,
    distinct_conditions,
};

/// Brings a monster type into play with no standees and a fresh deck.
///
/// Adding a key that is already in play replaces that monster in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddMonsterAction {
    pub key: MonsterKey,
    pub level: Level,
}

impl AddMonsterAction {
    pub fn new(key: impl Into<MonsterKey>, level: Level) -> Self {
        Self {
            key: key.into(),
            level,
        }
    }
}

impl ActionTransition for AddMonsterAction {
    fn pre_validate(&self, _state: &TabletopState) -> Result<(), TransitionError> {
        TabletopConfig::check_level(self.level)
    }

    fn apply(&self, state: &mut TabletopState) {
        state.upsert_monster(Monster::new(self.key.clone(), self.level));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoAddMonsterAction {
    pub key: MonsterKey,
    pub replaced: Option<Monster>,
}

impl ActionTransition for UndoAddMonsterAction {
    fn apply(&self, state: &mut TabletopState) {
        match &self.replaced {
            Some(previous) => {
                state.upsert_monster(previous.clone());
            }
            None => {
                state.remove_monster(&self.key);
            }
        }
    }
}

/// Places a standee for a monster already in play.
///
/// The standee starts at [`Standee::INITIAL_HIT_POINTS`] with no conditions.
/// Reusing a standee id replaces that standee in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddMonsterStandeeAction {
    pub key: MonsterKey,
    pub id: StandeeId,
    pub rank: Rank,
}

impl AddMonsterStandeeAction {
    pub fn new(key: impl Into<MonsterKey>, id: u32, rank: Rank) -> Self {
        Self {
            key: key.into(),
            id: StandeeId(id),
            rank,
        }
    }
}

impl ActionTransition for AddMonsterStandeeAction {
    fn apply(&self, state: &mut TabletopState) {
        let Some(monster) = state.monster_mut(&self.key) else {
            return;
        };
        let standee = Standee::new(self.id, self.rank);
        match monster.standee_mut(self.id) {
            Some(slot) => *slot = standee,
            None => monster.standees.push(standee),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoAddMonsterStandeeAction {
    pub key: MonsterKey,
    pub id: StandeeId,
    pub replaced: Option<Standee>,
}

impl ActionTransition for UndoAddMonsterStandeeAction {
    fn apply(&self, state: &mut TabletopState) {
        let Some(monster) = state.monster_mut(&self.key) else {
            return;
        };
        match &self.replaced {
            Some(previous) => {
                if let Some(slot) = monster.standee_mut(self.id) {
                    *slot = previous.clone();
                }
            }
            None => monster.standees.retain(|standee| standee.id != self.id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateMonsterStandeeAction {
    pub key: MonsterKey,
    pub id: StandeeId,
    pub hit_points: HitPoints,
    pub conditions: Conditions,
}

impl ActionTransition for UpdateMonsterStandeeAction {
    fn apply(&self, state: &mut TabletopState) {
        if let Some(standee) = state
            .monster_mut(&self.key)
            .and_then(|monster| monster.standee_mut(self.id))
        {
            standee.hit_points = self.hit_points;
            standee.conditions = distinct_conditions(&self.conditions);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoUpdateMonsterStandeeAction {
    pub key: MonsterKey,
    pub id: StandeeId,
    pub previous_hit_points: HitPoints,
    pub previous_conditions: Conditions,
}

impl ActionTransition for UndoUpdateMonsterStandeeAction {
    fn apply(&self, state: &mut TabletopState) {
        if let Some(standee) = state
            .monster_mut(&self.key)
            .and_then(|monster| monster.standee_mut(self.id))
        {
            standee.hit_points = self.previous_hit_points;
            standee.conditions = self.previous_conditions.clone();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveMonsterStandeeAction {
    pub key: MonsterKey,
    pub id: StandeeId,
}

impl ActionTransition for RemoveMonsterStandeeAction {
    fn apply(&self, state: &mut TabletopState) {
        if let Some(monster) = state.monster_mut(&self.key) {
            monster.standees.retain(|standee| standee.id != self.id);
        }
    }
}

/// Puts a removed standee back at the position it was removed from.
///
/// `standee` is `None` when the removal targeted a standee that was not on
/// the board, in which case there is nothing to restore.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoRemoveMonsterStandeeAction {
    pub key: MonsterKey,
    pub index: usize,
    pub standee: Option<Standee>,
}

impl ActionTransition for UndoRemoveMonsterStandeeAction {
    fn apply(&self, state: &mut TabletopState) {
        let (Some(standee), Some(monster)) = (&self.standee, state.monster_mut(&self.key)) else {
            return;
        };
        let index = self.index.min(monster.standees.len());
        monster.standees.insert(index, standee.clone());
    }
}
