//! Faction reference data and the oracle that serves it.
//!
//! Templates classify an entity's combat allegiance; entries are the factions
//! players track reputation against. Both tables are built once, validated,
//! and only read afterwards.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::RelationsConfig;
use crate::error::{ErrorSeverity, RelationsError};
use crate::rank::ReputationRank;
use crate::state::{FactionId, FactionTemplateId};

bitflags! {
    /// Coarse allegiance groups used by the template masks.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct FactionGroupMask: u32 {
        const PLAYER   = 1 << 0;
        const ALLIANCE = 1 << 1;
        const HORDE    = 1 << 2;
        const MONSTER  = 1 << 3;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct FactionTemplateFlags: u32 {
        /// Template is flagged for PvP.
        const PVP             = 0x0800;
        /// Guards that attack players carrying the contested PvP flag.
        const CONTESTED_GUARD = 0x1000;
    }
}

pub type FactionLinks = ArrayVec<FactionId, { RelationsConfig::MAX_FACTION_LINKS }>;

/// Combat allegiance classification of an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactionTemplate {
    pub id: FactionTemplateId,
    /// Faction reputation is tracked against. Zero when there is none.
    pub faction: FactionId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: FactionTemplateFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub group_mask: FactionGroupMask,
    #[cfg_attr(feature = "serde", serde(default))]
    pub friend_group_mask: FactionGroupMask,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemy_group_mask: FactionGroupMask,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemy_factions: FactionLinks,
    #[cfg_attr(feature = "serde", serde(default))]
    pub friend_factions: FactionLinks,
}

impl FactionTemplate {
    pub fn new(id: FactionTemplateId, faction: FactionId) -> Self {
        Self {
            id,
            faction,
            flags: FactionTemplateFlags::empty(),
            group_mask: FactionGroupMask::empty(),
            friend_group_mask: FactionGroupMask::empty(),
            enemy_group_mask: FactionGroupMask::empty(),
            enemy_factions: FactionLinks::new(),
            friend_factions: FactionLinks::new(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: FactionTemplateFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Sets the own, friend and enemy group masks.
    #[must_use]
    pub fn with_masks(
        mut self,
        group: FactionGroupMask,
        friend: FactionGroupMask,
        enemy: FactionGroupMask,
    ) -> Self {
        self.group_mask = group;
        self.friend_group_mask = friend;
        self.enemy_group_mask = enemy;
        self
    }

    /// Replaces the explicit enemy faction list.
    ///
    /// # Errors
    ///
    /// Returns `TableError::TooManyLinks` if more than
    /// [`RelationsConfig::MAX_FACTION_LINKS`] factions are given.
    pub fn with_enemy_factions(
        mut self,
        factions: impl IntoIterator<Item = FactionId>,
    ) -> Result<Self, TableError> {
        self.enemy_factions = collect_links(self.id, factions)?;
        Ok(self)
    }

    /// Replaces the explicit friend faction list.
    ///
    /// # Errors
    ///
    /// Returns `TableError::TooManyLinks` if more than
    /// [`RelationsConfig::MAX_FACTION_LINKS`] factions are given.
    pub fn with_friend_factions(
        mut self,
        factions: impl IntoIterator<Item = FactionId>,
    ) -> Result<Self, TableError> {
        self.friend_factions = collect_links(self.id, factions)?;
        Ok(self)
    }

    pub fn is_contested_guard(&self) -> bool {
        self.flags.contains(FactionTemplateFlags::CONTESTED_GUARD)
    }

    /// `faction` appears in the explicit enemy list. Zero never matches.
    pub fn lists_enemy(&self, faction: FactionId) -> bool {
        !faction.is_none() && self.enemy_factions.contains(&faction)
    }

    /// `faction` appears in the explicit friend list. Zero never matches.
    pub fn lists_friend(&self, faction: FactionId) -> bool {
        !faction.is_none() && self.friend_factions.contains(&faction)
    }
}

fn collect_links(
    template: FactionTemplateId,
    factions: impl IntoIterator<Item = FactionId>,
) -> Result<FactionLinks, TableError> {
    let mut links = FactionLinks::new();
    for faction in factions {
        links.try_push(faction).map_err(|_| TableError::TooManyLinks {
            template,
            capacity: RelationsConfig::MAX_FACTION_LINKS,
        })?;
    }
    Ok(links)
}

/// A faction players can hold standing with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactionEntry {
    pub id: FactionId,
    /// Slot in the player's reputation list; `None` when standing is not tracked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reputation_index: Option<u16>,
    /// Rank a player starts with before any standing is recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_rank: ReputationRank,
}

impl FactionEntry {
    pub fn new(id: FactionId) -> Self {
        Self {
            id,
            reputation_index: None,
            base_rank: ReputationRank::Neutral,
        }
    }

    #[must_use]
    pub fn with_reputation_index(mut self, index: u16) -> Self {
        self.reputation_index = Some(index);
        self
    }

    #[must_use]
    pub fn with_base_rank(mut self, rank: ReputationRank) -> Self {
        self.base_rank = rank;
        self
    }

    pub fn has_reputation(&self) -> bool {
        self.reputation_index.is_some()
    }
}

/// Read-only lookup of faction reference data. Absence is a normal outcome.
pub trait FactionOracle: Send + Sync {
    fn template(&self, id: FactionTemplateId) -> Option<&FactionTemplate>;

    fn faction(&self, id: FactionId) -> Option<&FactionEntry>;
}

/// Errors raised while building the faction tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableError {
    #[error("faction template {0} is defined twice")]
    DuplicateTemplate(FactionTemplateId),

    #[error("{0} is defined twice")]
    DuplicateFaction(FactionId),

    #[error("faction template {template} lists more than {capacity} factions")]
    TooManyLinks {
        template: FactionTemplateId,
        capacity: usize,
    },

    #[error("faction template {0} lists the zero faction")]
    ZeroFactionLink(FactionTemplateId),
}

impl RelationsError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateTemplate(_) => "TABLE_DUPLICATE_TEMPLATE",
            Self::DuplicateFaction(_) => "TABLE_DUPLICATE_FACTION",
            Self::TooManyLinks { .. } => "TABLE_TOO_MANY_LINKS",
            Self::ZeroFactionLink(_) => "TABLE_ZERO_FACTION_LINK",
        }
    }
}

/// Immutable in-memory faction tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactionStore {
    templates: BTreeMap<FactionTemplateId, FactionTemplate>,
    factions: BTreeMap<FactionId, FactionEntry>,
}

impl FactionStore {
    pub fn builder() -> FactionStoreBuilder {
        FactionStoreBuilder::default()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn faction_count(&self) -> usize {
        self.factions.len()
    }
}

impl FactionOracle for FactionStore {
    fn template(&self, id: FactionTemplateId) -> Option<&FactionTemplate> {
        self.templates.get(&id)
    }

    fn faction(&self, id: FactionId) -> Option<&FactionEntry> {
        self.factions.get(&id)
    }
}

/// Collects faction data and validates it into a [`FactionStore`].
#[derive(Clone, Debug, Default)]
pub struct FactionStoreBuilder {
    templates: Vec<FactionTemplate>,
    factions: Vec<FactionEntry>,
}

impl FactionStoreBuilder {
    #[must_use]
    pub fn template(mut self, template: FactionTemplate) -> Self {
        self.templates.push(template);
        self
    }

    #[must_use]
    pub fn templates(mut self, templates: impl IntoIterator<Item = FactionTemplate>) -> Self {
        self.templates.extend(templates);
        self
    }

    #[must_use]
    pub fn faction(mut self, faction: FactionEntry) -> Self {
        self.factions.push(faction);
        self
    }

    #[must_use]
    pub fn factions(mut self, factions: impl IntoIterator<Item = FactionEntry>) -> Self {
        self.factions.extend(factions);
        self
    }

    /// Validates the collected data.
    ///
    /// # Errors
    ///
    /// Returns `TableError` on duplicate ids or an explicit link to faction zero.
    pub fn build(self) -> Result<FactionStore, TableError> {
        let mut store = FactionStore::default();

        for template in self.templates {
            let mut links = template.enemy_factions.iter().chain(&template.friend_factions);
            if links.any(|faction| faction.is_none()) {
                return Err(TableError::ZeroFactionLink(template.id));
            }
            if store.templates.contains_key(&template.id) {
                return Err(TableError::DuplicateTemplate(template.id));
            }
            store.templates.insert(template.id, template);
        }

        for faction in self.factions {
            if store.factions.contains_key(&faction.id) {
                return Err(TableError::DuplicateFaction(faction.id));
            }
            store.factions.insert(faction.id, faction);
        }

        Ok(store)
    }
}
