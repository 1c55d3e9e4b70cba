use std::collections::BTreeMap;

use crate::state::MapId;

/// Static map oracle answering the questions relation rules ask about maps.
pub trait MapOracle: Send + Sync {
    /// Dungeons, raids and battlegrounds are instanceable; continents are not.
    fn is_instanceable(&self, map: MapId) -> bool;
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MapKind {
    #[default]
    Continent,
    Dungeon,
    Raid,
    Battleground,
}

impl MapKind {
    pub const fn is_instanceable(self) -> bool {
        !matches!(self, Self::Continent)
    }
}

/// In-memory map table. Unknown maps are treated as open world.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapTable {
    maps: BTreeMap<MapId, MapKind>,
}

impl MapTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, map: MapId, kind: MapKind) {
        self.maps.insert(map, kind);
    }

    #[must_use]
    pub fn with_map(mut self, map: MapId, kind: MapKind) -> Self {
        self.insert(map, kind);
        self
    }

    pub fn kind(&self, map: MapId) -> Option<MapKind> {
        self.maps.get(&map).copied()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl MapOracle for MapTable {
    fn is_instanceable(&self, map: MapId) -> bool {
        self.kind(map).is_some_and(MapKind::is_instanceable)
    }
}
