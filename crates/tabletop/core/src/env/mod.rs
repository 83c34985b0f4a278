//! Read-only catalog data.
//!
//! The catalog lists the characters and monsters a session may use, with their
//! hit-point tables and ability-card pools. Transitions never consult it; the
//! runtime checks dispatched ids against it and draws cards from its pools.

mod catalog;

pub use catalog::{
    AbilityCardDefinition, Catalog, CatalogOracle, CharacterDefinition, MonsterDefinition,
};
