//! Map table loader.

use std::collections::BTreeSet;
use std::path::Path;

use relations_core::{MapId, MapKind, MapTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One map record in a RON map list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapEntry {
    pub id: MapId,
    pub kind: MapKind,
    /// Display name; informational only.
    #[serde(default)]
    pub name: String,
}

/// Loader for map tables from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map table from a RON file containing a list of [`MapEntry`].
    pub fn load(path: &Path) -> LoadResult<MapTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MapTable> {
        let entries: Vec<MapEntry> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map list RON: {}", e))?;

        let mut seen = BTreeSet::new();
        let mut table = MapTable::new();
        for entry in entries {
            if !seen.insert(entry.id) {
                anyhow::bail!("Duplicate map id {} ('{}')", entry.id.0, entry.name);
            }
            table.insert(entry.id, entry.kind);
        }

        Ok(table)
    }
}
