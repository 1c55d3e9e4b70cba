//! Player-only state: team, group/guild membership, duel and reputation.
//!
//! All of it is owned by the host and only read here.

use std::collections::{BTreeMap, BTreeSet};

use crate::env::{FactionEntry, FactionTemplate};
use crate::rank::ReputationRank;
use crate::state::{EntityId, FactionId, GroupId, GuildId, PlayerFlags};

/// Faction team a player belongs to.
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
pub enum Team {
    #[default]
    Alliance,
    Horde,
}

/// Membership in a group, including the sub-group used for party checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupMembership {
    pub group: GroupId,
    pub sub_group: u8,
}

impl GroupMembership {
    pub fn new(group: GroupId, sub_group: u8) -> Self {
        Self { group, sub_group }
    }
}

/// Enrollment in a duel: the arbiter object and the side the player fights on.
///
/// Side zero means the duel has not assigned sides yet, so the player does
/// not count as dueling anyone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelState {
    pub arbiter: EntityId,
    pub team: u8,
}

impl DuelState {
    pub fn new(arbiter: EntityId, team: u8) -> Self {
        Self { arbiter, team }
    }

    pub fn is_enrolled(&self) -> bool {
        self.team != 0
    }

    /// Both players are enrolled under the same arbiter, on any side.
    pub fn shares_arbiter(&self, other: &DuelState) -> bool {
        self.is_enrolled() && other.is_enrolled() && self.arbiter == other.arbiter
    }

    /// Both players are enrolled under the same arbiter on opposing sides.
    pub fn opposes(&self, other: &DuelState) -> bool {
        self.shares_arbiter(other) && self.team != other.team
    }
}

/// A player's personal standing with factions.
///
/// - `forced`: ranks imposed by scripts, keyed by faction, overriding everything
/// - `standings`: tracked ranks; factions without a record use their base rank
/// - `at_war`: factions the player has declared war on
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReputationBook {
    forced: BTreeMap<FactionId, ReputationRank>,
    standings: BTreeMap<FactionId, ReputationRank>,
    at_war: BTreeSet<FactionId>,
}

impl ReputationBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forced rank towards the faction behind `template`, if one is imposed.
    pub fn forced_rank(&self, template: &FactionTemplate) -> Option<ReputationRank> {
        self.forced.get(&template.faction).copied()
    }

    /// Current rank with `faction`, falling back to the faction's base rank.
    pub fn rank(&self, faction: &FactionEntry) -> ReputationRank {
        self.standings
            .get(&faction.id)
            .copied()
            .unwrap_or(faction.base_rank)
    }

    /// Returns true if the player is at war with `faction`.
    ///
    /// Factions without a record are not at war.
    pub fn is_at_war(&self, faction: &FactionEntry) -> bool {
        self.at_war.contains(&faction.id)
    }

    pub fn force_rank(&mut self, faction: FactionId, rank: ReputationRank) {
        self.forced.insert(faction, rank);
    }

    pub fn set_standing(&mut self, faction: FactionId, rank: ReputationRank) {
        self.standings.insert(faction, rank);
    }

    pub fn set_at_war(&mut self, faction: FactionId, at_war: bool) {
        if at_war {
            self.at_war.insert(faction);
        } else {
            self.at_war.remove(&faction);
        }
    }

    #[must_use]
    pub fn with_forced_rank(mut self, faction: FactionId, rank: ReputationRank) -> Self {
        self.force_rank(faction, rank);
        self
    }

    #[must_use]
    pub fn with_standing(mut self, faction: FactionId, rank: ReputationRank) -> Self {
        self.set_standing(faction, rank);
        self
    }

    #[must_use]
    pub fn with_war(mut self, faction: FactionId) -> Self {
        self.set_at_war(faction, true);
        self
    }
}

/// State carried only by player units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerState {
    pub flags: PlayerFlags,
    pub team: Team,
    pub group: Option<GroupMembership>,
    pub guild: Option<GuildId>,
    pub duel: Option<DuelState>,
    pub reputation: ReputationBook,
}

impl PlayerState {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            ..Self::default()
        }
    }

    pub fn is_ghost(&self) -> bool {
        self.flags.contains(PlayerFlags::GHOST)
    }

    pub fn is_game_master(&self) -> bool {
        self.flags.contains(PlayerFlags::GAME_MASTER)
    }

    pub fn is_pvp_free_for_all(&self) -> bool {
        self.flags.contains(PlayerFlags::FFA_PVP)
    }

    pub fn is_contested_pvp(&self) -> bool {
        self.flags.contains(PlayerFlags::CONTESTED_PVP)
    }

    /// Both players are in the same group and, if `party` is requested, the
    /// same sub-group.
    pub fn shares_group(&self, other: &PlayerState, party: bool) -> bool {
        match (self.group, other.group) {
            (Some(mine), Some(theirs)) => {
                mine.group == theirs.group && (!party || mine.sub_group == theirs.sub_group)
            }
            _ => false,
        }
    }

    /// Both players carry the same guild id. Two guildless players match.
    pub fn shares_guild(&self, other: &PlayerState) -> bool {
        self.guild == other.guild
    }

    /// Duel enrollment under a common arbiter, regardless of side.
    pub fn in_matching_duel(&self, other: &PlayerState) -> bool {
        matches!((&self.duel, &other.duel), (Some(mine), Some(theirs)) if mine.shares_arbiter(theirs))
    }

    /// Currently dueling `other` (common arbiter, opposing sides).
    pub fn in_duel_with(&self, other: &PlayerState) -> bool {
        matches!((&self.duel, &other.duel), (Some(mine), Some(theirs)) if mine.opposes(theirs))
    }

    #[must_use]
    pub fn with_flags(mut self, flags: PlayerFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: GroupId, sub_group: u8) -> Self {
        self.group = Some(GroupMembership::new(group, sub_group));
        self
    }

    #[must_use]
    pub fn with_guild(mut self, guild: GuildId) -> Self {
        self.guild = Some(guild);
        self
    }

    #[must_use]
    pub fn with_duel(mut self, arbiter: EntityId, team: u8) -> Self {
        self.duel = Some(DuelState::new(arbiter, team));
        self
    }

    #[must_use]
    pub fn with_reputation(mut self, reputation: ReputationBook) -> Self {
        self.reputation = reputation;
        self
    }
}
