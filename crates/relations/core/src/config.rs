use crate::env::ConfigOracle;
use crate::state::FactionTemplateId;

/// Server switches consumed by the relation engine.
///
/// Fog-of-war modes are kept as raw integers, exactly as they appear in the
/// server configuration; the visibility layer interprets them and falls back
/// to its default branch for values it does not recognize.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RelationsConfig {
    /// Allows players of opposite teams to group up.
    pub allow_two_side_interaction_group: bool,
    /// 0 = same group, 1 = cooperating units.
    pub fog_of_war_stealth: u32,
    /// 0 = same group ignoring charms, 1 = same team, 2 = always.
    pub fog_of_war_health: u32,
    /// 0 = self or own summon, 1 = same team, 2 = always.
    pub fog_of_war_stats: u32,
}

impl RelationsConfig {
    // ===== compile-time constants =====
    /// Capacity of the explicit enemy/friend faction lists of a template.
    pub const MAX_FACTION_LINKS: usize = 4;
    /// Hop limit when walking owner/charmer links to a controlling player.
    pub const MAX_CONTROL_DEPTH: usize = 8;
    /// Template substituted for Alliance viewers of a grouped Horde corpse.
    pub const ALLIANCE_GENERIC_FACTION: FactionTemplateId = FactionTemplateId(1054);
    /// Template substituted for Horde viewers of a grouped Alliance corpse.
    pub const HORDE_GENERIC_FACTION: FactionTemplateId = FactionTemplateId(1495);

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOG_OF_WAR: u32 = 0;

    pub fn new() -> Self {
        Self {
            allow_two_side_interaction_group: false,
            fog_of_war_stealth: Self::DEFAULT_FOG_OF_WAR,
            fog_of_war_health: Self::DEFAULT_FOG_OF_WAR,
            fog_of_war_stats: Self::DEFAULT_FOG_OF_WAR,
        }
    }

    #[must_use]
    pub fn with_two_side_interaction_group(mut self, allow: bool) -> Self {
        self.allow_two_side_interaction_group = allow;
        self
    }

    #[must_use]
    pub fn with_fog_of_war(mut self, stealth: u32, health: u32, stats: u32) -> Self {
        self.fog_of_war_stealth = stealth;
        self.fog_of_war_health = health;
        self.fog_of_war_stats = stats;
        self
    }
}

impl Default for RelationsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigOracle for RelationsConfig {
    fn allow_two_side_interaction_group(&self) -> bool {
        self.allow_two_side_interaction_group
    }

    fn fog_of_war_stealth(&self) -> u32 {
        self.fog_of_war_stealth
    }

    fn fog_of_war_health(&self) -> u32 {
        self.fog_of_war_health
    }

    fn fog_of_war_stats(&self) -> u32 {
        self.fog_of_war_stats
    }
}
