//! Data-driven reference tables and loaders for the relation engine.
//!
//! This crate reads the host-owned data the engine consults from RON/TOML
//! files:
//! - Faction templates and reputation factions (RON)
//! - Map kinds (RON)
//! - Relation switches and fog-of-war modes (TOML)
//! - Entity snapshots for scenarios and tests (RON)
//!
//! All loaders deserialize relations-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, FactionCatalog, FactionLoader, MapEntry, MapLoader,
    RelationContent, Scenario, ScenarioLoader,
};
