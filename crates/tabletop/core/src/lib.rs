//! Deterministic tabletop rules with exact undo and redo.
//!
//! `tabletop-core` defines the session state, the closed set of actions that
//! change it, and the history engine that records every tracked action next
//! to its inverse. All mutation flows through [`engine::TabletopEngine`];
//! [`history::TimeMachine`] wraps it with recording, undo and redo. The crate
//! performs no I/O and no randomness.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod history;
pub mod state;

pub use action::{
    Action, ActionKind, ActionTransition, AddCharacterAction, AddMonsterAction,
    AddMonsterStandeeAction, CardDrawUndo, ClearTabletopAction,
    DrawMonsterAbilityCardSuccessAction, DrawMonsterAbilityCardsSuccessAction,
    InfuseElementAction, InverseAction, NextRoundAction, RemoveMonsterStandeeAction,
    SetScenarioLevelAction, TrackedAction, TransitionError, UpdateCharacterAction,
    UpdateMonsterStandeeAction,
};
pub use action::{
    UndoAddCharacterAction, UndoAddMonsterAction, UndoAddMonsterStandeeAction,
    UndoClearTabletopAction, UndoDrawMonsterAbilityCardAction, UndoDrawMonsterAbilityCardsAction,
    UndoInfuseElementAction, UndoNextRoundAction, UndoRemoveMonsterStandeeAction,
    UndoSetScenarioLevelAction, UndoUpdateCharacterAction, UndoUpdateMonsterStandeeAction,
};
pub use config::TabletopConfig;
pub use engine::{ExecuteError, TabletopEngine, TransitionPhase, TransitionPhaseError, reduce};
pub use env::{
    AbilityCardDefinition, Catalog, CatalogOracle, CharacterDefinition, MonsterDefinition,
};
pub use error::{ErrorSeverity, TabletopError};
pub use history::{Dispatched, History, HistoryEntry, HistoryError, TimeMachine, resolve_inverse};
pub use state::{
    AbilityCardId, Character, CharacterKey, Condition, Conditions, Element, ElementalInfusion,
    HitPoints, Infusion, Initiative, InvariantViolation, Level, Monster, MonsterKey, Rank,
    Standee, StandeeId, Step, TabletopState, distinct_conditions,
};
