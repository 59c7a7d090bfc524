//! Immutable reference catalogs for project-file migration.
//!
//! The catalog is pure data: lookup tables of known reference names, default
//! property values and item kinds that the classification rules consult.
//! Construct it once at process start (override tables from TOML if needed)
//! and share it by `Arc`; it is never mutated afterwards, so unsynchronized
//! concurrent reads are safe.

mod caseless;
mod catalog;

pub use caseless::CaselessMap;
pub use caseless::CaselessSet;
pub use catalog::CatalogError;
pub use catalog::ReferenceCatalog;
pub use catalog::names;
