//! Static catalog content and its loaders.
//!
//! The catalog (character hit-point tables, monster ability-card pools) is read
//! from RON files and handed to the runtime as a
//! [`Catalog`](tabletop_core::Catalog). It never appears in tabletop state.

pub mod loaders;

pub use loaders::{CatalogLoader, LoadResult};
