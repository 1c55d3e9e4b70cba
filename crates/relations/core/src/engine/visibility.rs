//! Fog-of-war gates.
//!
//! Each gate is driven by a raw configuration value. Game masters always
//! pass; unknown values take the first (strictest) branch.

use tracing::debug;

use crate::engine::RelationEngine;
use crate::state::UnitState;

/// Who may see through stealth and invisibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StealthVisibility {
    #[default]
    Group,
    Cooperation,
}

impl StealthVisibility {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Group,
            1 => Self::Cooperation,
            _ => {
                debug!(raw, fallback = %Self::Group, "unknown fog of war stealth mode");
                Self::Group
            }
        }
    }
}

/// Who may see exact health values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum HealthVisibility {
    /// Same group, judged from the permanent owner's perspective.
    #[default]
    Group,
    Team,
    Always,
}

impl HealthVisibility {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Group,
            1 => Self::Team,
            2 => Self::Always,
            _ => {
                debug!(raw, fallback = %Self::Group, "unknown fog of war health mode");
                Self::Group
            }
        }
    }
}

/// Who may see exact stat values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StatsVisibility {
    /// The unit itself and whoever summoned it.
    #[default]
    Own,
    Team,
    Always,
}

impl StatsVisibility {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Own,
            1 => Self::Team,
            2 => Self::Always,
            _ => {
                debug!(raw, fallback = %Self::Own, "unknown fog of war stats mode");
                Self::Own
            }
        }
    }
}

impl RelationEngine<'_> {
    /// `other` sees `this` through stealth.
    pub fn is_fog_of_war_visible_stealth(&self, this: &UnitState, other: &UnitState) -> bool {
        if other.is_game_master() {
            return true;
        }

        match StealthVisibility::from_raw(self.env.config().fog_of_war_stealth()) {
            StealthVisibility::Group => self.is_in_group(this, other, false, false),
            StealthVisibility::Cooperation => self.can_cooperate(this, other),
        }
    }

    /// `other` sees `this`'s health values.
    pub fn is_fog_of_war_visible_health(&self, this: &UnitState, other: &UnitState) -> bool {
        if other.is_game_master() {
            return true;
        }

        match HealthVisibility::from_raw(self.env.config().fog_of_war_health()) {
            HealthVisibility::Group => self.is_in_group(this, other, false, true),
            HealthVisibility::Team => self.is_in_team(this, other, false),
            HealthVisibility::Always => true,
        }
    }

    /// `other` sees `this`'s stat values.
    pub fn is_fog_of_war_visible_stats(&self, this: &UnitState, other: &UnitState) -> bool {
        if other.is_game_master() {
            return true;
        }

        match StatsVisibility::from_raw(self.env.config().fog_of_war_stats()) {
            StatsVisibility::Own => this.id == other.id || this.links.summoner == Some(other.id),
            StatsVisibility::Team => self.is_in_team(this, other, false),
            StatsVisibility::Always => true,
        }
    }
}
