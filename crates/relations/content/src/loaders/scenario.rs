//! Entity snapshot loader.
//!
//! Scenarios describe a set of units, corpses and objects at one instant.
//! They back integration tests and offline inspection of relation rules.

use std::path::Path;

use relations_core::{
    CorpseState, DynamicObjectState, EntityRegistry, GameObjectState, RegistryError,
    RelationsError, UnitFlags, UnitState,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Scenario structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub units: Vec<UnitState>,
    #[serde(default)]
    pub corpses: Vec<CorpseState>,
    #[serde(default)]
    pub game_objects: Vec<GameObjectState>,
    #[serde(default)]
    pub dynamic_objects: Vec<DynamicObjectState>,
}

impl Scenario {
    /// Registers every entity. Players get the player-controlled flag even
    /// when the file omits it.
    pub fn into_registry(self) -> LoadResult<EntityRegistry> {
        let mut registry = EntityRegistry::new();

        for mut unit in self.units {
            if unit.is_player() && !unit.is_player_controlled() {
                debug!(unit = %unit.id, "adding player-controlled flag to player");
                unit.flags |= UnitFlags::PLAYER_CONTROLLED;
            }
            registry
                .insert_unit(unit)
                .map_err(|e| invalid("unit", e))?;
        }
        for corpse in self.corpses {
            registry
                .insert_corpse(corpse)
                .map_err(|e| invalid("corpse", e))?;
        }
        for object in self.game_objects {
            registry
                .insert_game_object(object)
                .map_err(|e| invalid("game object", e))?;
        }
        for object in self.dynamic_objects {
            registry
                .insert_dynamic_object(object)
                .map_err(|e| invalid("dynamic object", e))?;
        }

        Ok(registry)
    }
}

fn invalid(what: &str, err: RegistryError) -> anyhow::Error {
    anyhow::anyhow!("Invalid scenario {} ({}): {}", what, err.severity().as_str(), err)
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file into an entity registry.
    pub fn load(path: &Path) -> LoadResult<EntityRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EntityRegistry> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        scenario.into_registry()
    }
}
