//! Catalog access for the runtime.
//!
//! The catalog is static data consulted only to validate ids and to supply
//! ability-card pools to the drawer. It never mutates state or history.

mod validator;

pub use validator::CatalogValidator;
