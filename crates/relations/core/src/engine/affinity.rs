//! Group, guild and team membership.
//!
//! Membership is decided between controlling players, so pets and charmed
//! units count as members of their master's group.

use crate::engine::{ControlView, Reaction, RelationEngine};
use crate::state::{PlayerState, UnitKind, UnitState};

impl RelationEngine<'_> {
    /// Whether `this` and `other` are in the same group (or the same sub-group
    /// when `party` is set).
    ///
    /// Players asked to ignore charms compare their own groups directly,
    /// regardless of the player-controlled flag. Two creatures outside player
    /// control count as grouped when they are friends.
    pub fn is_in_group(
        &self,
        this: &UnitState,
        other: &UnitState,
        party: bool,
        ignore_charms: bool,
    ) -> bool {
        match &this.kind {
            UnitKind::Player(player) => {
                if this.id != other.id
                    && ignore_charms
                    && let Some(other_player) = other.as_player()
                {
                    return player.shares_group(other_player, party);
                }
            }
            UnitKind::Creature(_) => {
                if !this.is_player_controlled() && !other.is_player_controlled() {
                    return this.is_friend(self, other);
                }
            }
        }

        self.controllers_match(this, other, ignore_charms, |mine, theirs| {
            mine.shares_group(theirs, party)
        })
    }

    /// Whether the controlling players share a guild.
    pub fn is_in_guild(&self, this: &UnitState, other: &UnitState, ignore_charms: bool) -> bool {
        self.controllers_match(this, other, ignore_charms, PlayerState::shares_guild)
    }

    /// Whether the controlling players are on the same team.
    pub fn is_in_team(&self, this: &UnitState, other: &UnitState, ignore_charms: bool) -> bool {
        self.controllers_match(this, other, ignore_charms, |mine, theirs| {
            mine.team == theirs.team
        })
    }

    /// True for the same unit; otherwise both must be player-controlled and
    /// resolve to the same player or to two players satisfying `same`.
    fn controllers_match(
        &self,
        this: &UnitState,
        other: &UnitState,
        ignore_charms: bool,
        same: impl Fn(&PlayerState, &PlayerState) -> bool,
    ) -> bool {
        if this.id == other.id {
            return true;
        }
        if !this.is_player_controlled() || !other.is_player_controlled() {
            return false;
        }

        let view = ControlView::from_ignore_charms(ignore_charms);
        match (
            self.controlling_player(this, view),
            self.controlling_player(other, view),
        ) {
            (Some(mine), Some(theirs)) => mine.is_same(&theirs) || same(mine.player, theirs.player),
            _ => false,
        }
    }
}
