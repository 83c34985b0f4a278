//! Concrete action payloads, grouped by the part of the tabletop they touch.

pub mod ability_cards;
pub mod characters;
pub mod monsters;
pub mod tabletop;

pub use ability_cards::{
    CardDrawUndo, DrawMonsterAbilityCardSuccessAction, DrawMonsterAbilityCardsSuccessAction,
    UndoDrawMonsterAbilityCardAction, UndoDrawMonsterAbilityCardsAction,
};
pub use characters::{
    AddCharacterAction, UndoAddCharacterAction, UndoUpdateCharacterAction, UpdateCharacterAction,
};
pub use monsters::{
    AddMonsterAction, AddMonsterStandeeAction, RemoveMonsterStandeeAction,
    UndoAddMonsterAction, UndoAddMonsterStandeeAction, UndoRemoveMonsterStandeeAction,
    UndoUpdateMonsterStandeeAction, UpdateMonsterStandeeAction,
};
pub use tabletop::{
    ClearTabletopAction, InfuseElementAction, NextRoundAction, SetScenarioLevelAction,
    UndoClearTabletopAction, UndoInfuseElementAction, UndoNextRoundAction,
    UndoSetScenarioLevelAction,
};
