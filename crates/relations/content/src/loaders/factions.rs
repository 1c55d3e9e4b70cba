//! Faction catalog loader.

use std::path::Path;

use relations_core::{FactionEntry, FactionStore, FactionTemplate, RelationsError};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, read_file};

/// Faction catalog structure for RON files.
///
/// Group masks and template flags are written as flag names, e.g.
/// `group_mask: "PLAYER | ALLIANCE"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactionCatalog {
    #[serde(default)]
    pub templates: Vec<FactionTemplate>,
    #[serde(default)]
    pub factions: Vec<FactionEntry>,
}

impl FactionCatalog {
    /// Validates the catalog and builds the lookup store.
    pub fn into_store(self) -> LoadResult<FactionStore> {
        FactionStore::builder()
            .templates(self.templates)
            .factions(self.factions)
            .build()
            .map_err(|e| {
                anyhow::anyhow!("Invalid faction catalog ({}): {}", e.severity().as_str(), e)
            })
    }
}

/// Loader for faction catalogs from RON files.
pub struct FactionLoader;

impl FactionLoader {
    /// Load a faction catalog from a RON file and build the store.
    ///
    /// Fails on duplicate template or faction ids, on explicit link lists
    /// longer than the template capacity and on links to faction zero.
    pub fn load(path: &Path) -> LoadResult<FactionStore> {
        let content = read_file(path)?;
        let store = Self::parse(&content)?;

        info!(
            path = %path.display(),
            templates = store.template_count(),
            factions = store.faction_count(),
            "loaded faction catalog"
        );
        Ok(store)
    }

    pub fn parse(content: &str) -> LoadResult<FactionStore> {
        let catalog: FactionCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse faction catalog RON: {}", e))?;
        catalog.into_store()
    }
}

#[cfg(test)]
mod tests {
    use relations_core::{
        FactionGroupMask, FactionId, FactionOracle, FactionTemplateFlags, FactionTemplateId,
        ReputationRank,
    };

    use super::*;

    #[test]
    fn parses_flag_names_and_links() {
        let store = FactionLoader::parse(
            r#"(
                templates: [
                    (
                        id: 120,
                        faction: 21,
                        flags: "CONTESTED_GUARD",
                        group_mask: "",
                        enemy_group_mask: "MONSTER",
                        enemy_factions: [7],
                    ),
                ],
                factions: [
                    (id: 21, reputation_index: Some(2), base_rank: Neutral),
                ],
            )"#,
        )
        .expect("valid catalog");

        let template = store.template(FactionTemplateId(120)).expect("template");
        assert!(template.flags.contains(FactionTemplateFlags::CONTESTED_GUARD));
        assert_eq!(template.enemy_group_mask, FactionGroupMask::MONSTER);
        assert!(template.lists_enemy(FactionId(7)));
        assert!(template.friend_factions.is_empty());

        let entry = store.faction(FactionId(21)).expect("faction");
        assert!(entry.has_reputation());
        assert_eq!(entry.base_rank, ReputationRank::Neutral);
    }

    #[test]
    fn duplicate_templates_are_rejected() {
        let result = FactionLoader::parse(
            "(templates: [(id: 1, faction: 1), (id: 1, faction: 2)])",
        );
        assert!(result.is_err());
    }

    #[test]
    fn oversized_link_lists_are_rejected() {
        let result = FactionLoader::parse(
            "(templates: [(id: 1, faction: 1, enemy_factions: [2, 3, 4, 5, 6])])",
        );
        assert!(result.is_err());
    }
}
