//! Content factory for building relation tables from data files.

use std::path::{Path, PathBuf};

use relations_core::{
    EntityRegistry, FactionStore, MapTable, RelationEngine, RelationEnv, RelationsConfig,
};
use tracing::info;

use crate::loaders::{ConfigLoader, FactionLoader, LoadResult, MapLoader, ScenarioLoader};

/// Static tables and switches loaded once at startup.
///
/// Entity state is not part of the content: it changes every tick and is
/// supplied by the caller when an environment is assembled.
#[derive(Debug, Clone)]
pub struct RelationContent {
    pub factions: FactionStore,
    pub maps: MapTable,
    pub config: RelationsConfig,
}

impl RelationContent {
    /// Assembles an environment over this content and the given entities.
    pub fn env<'a>(&'a self, entities: &'a EntityRegistry) -> RelationEnv<'a> {
        RelationEnv::new(&self.factions, entities, &self.maps, &self.config)
    }

    pub fn engine<'a>(&'a self, entities: &'a EntityRegistry) -> RelationEngine<'a> {
        RelationEngine::new(self.env(entities))
    }
}

/// Content factory that loads all relation content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── factions.ron
/// ├── maps.ron
/// └── scenarios/
///     └── border_skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load relation switches from `config.toml`.
    pub fn load_config(&self) -> LoadResult<RelationsConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load faction templates and reputation factions from `factions.ron`.
    pub fn load_factions(&self) -> LoadResult<FactionStore> {
        let path = self.data_dir.join("factions.ron");
        FactionLoader::load(&path)
    }

    /// Load map kinds from `maps.ron`.
    pub fn load_maps(&self) -> LoadResult<MapTable> {
        let path = self.data_dir.join("maps.ron");
        MapLoader::load(&path)
    }

    /// Load every static table.
    pub fn load_content(&self) -> LoadResult<RelationContent> {
        let content = RelationContent {
            factions: self.load_factions()?,
            maps: self.load_maps()?,
            config: self.load_config()?,
        };

        info!(
            data_dir = %self.data_dir.display(),
            templates = content.factions.template_count(),
            maps = content.maps.len(),
            "relation content ready"
        );
        Ok(content)
    }

    /// Load an entity snapshot from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<EntityRegistry> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_files_report_the_path() {
        let factory = ContentFactory::new("/nonexistent/relations");
        let err = factory.load_config().expect_err("no such file");
        assert!(err.to_string().contains("config.toml"));
    }
}
