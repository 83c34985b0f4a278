pub mod character;
pub mod common;
pub mod condition;
pub mod element;
pub mod monster;
pub mod round;

pub use character::Character;
pub use common::{
    AbilityCardId, CharacterKey, HitPoints, Initiative, Level, MonsterKey, StandeeId,
};
pub use condition::{Condition, Conditions, distinct_conditions};
pub use element::{Element, ElementalInfusion, Infusion};
pub use monster::{Monster, Rank, Standee};
pub use round::Step;
