//! Traits describing read-only world data.
//!
//! Oracles expose faction tables, live entity snapshots, map properties and
//! server switches. The [`RelationEnv`] aggregate bundles them so the engine
//! can reach everything it needs without coupling to concrete storage.
mod config;
mod entities;
mod factions;
mod map;

pub use config::ConfigOracle;
pub use entities::EntityOracle;
pub use factions::{
    FactionEntry, FactionGroupMask, FactionLinks, FactionOracle, FactionStore,
    FactionStoreBuilder, FactionTemplate, FactionTemplateFlags, TableError,
};
pub use map::{MapKind, MapOracle, MapTable};

/// Aggregates the read-only oracles consulted by relation queries.
#[derive(Clone, Copy)]
pub struct RelationEnv<'a> {
    factions: &'a dyn FactionOracle,
    entities: &'a dyn EntityOracle,
    maps: &'a dyn MapOracle,
    config: &'a dyn ConfigOracle,
}

impl<'a> RelationEnv<'a> {
    pub fn new(
        factions: &'a dyn FactionOracle,
        entities: &'a dyn EntityOracle,
        maps: &'a dyn MapOracle,
        config: &'a dyn ConfigOracle,
    ) -> Self {
        Self {
            factions,
            entities,
            maps,
            config,
        }
    }

    pub fn factions(&self) -> &'a dyn FactionOracle {
        self.factions
    }

    pub fn entities(&self) -> &'a dyn EntityOracle {
        self.entities
    }

    pub fn maps(&self) -> &'a dyn MapOracle {
        self.maps
    }

    pub fn config(&self) -> &'a dyn ConfigOracle {
        self.config
    }
}

impl std::fmt::Debug for RelationEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationEnv").finish_non_exhaustive()
    }
}
