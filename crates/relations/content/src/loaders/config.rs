//! Relation configuration loader.

use std::path::Path;

use relations_core::RelationsConfig;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for relation switches from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults. Fog-of-war modes are stored as given;
    /// unknown values are interpreted by the engine, not rejected here.
    pub fn load(path: &Path) -> LoadResult<RelationsConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RelationsConfig> {
        let config: RelationsConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        debug!(
            two_side_group = config.allow_two_side_interaction_group,
            stealth = config.fog_of_war_stealth,
            health = config.fog_of_war_health,
            stats = config.fog_of_war_stats,
            "loaded relation config"
        );
        Ok(config)
    }
}
