//! Content loaders for reading relation data from files.
//!
//! Each loader turns one file into the table or oracle implementation the
//! engine reads through [`relations_core::RelationEnv`].

pub mod config;
pub mod factions;
pub mod factory;
pub mod map;
pub mod scenario;

pub use config::ConfigLoader;
pub use factions::{FactionCatalog, FactionLoader};
pub use factory::{ContentFactory, RelationContent};
pub use map::{MapEntry, MapLoader};
pub use scenario::{Scenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
