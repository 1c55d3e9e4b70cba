//! Interaction, triviality and civilian checks.

use crate::engine::{Reaction, RelationEngine};
use crate::rank::ReputationRank;
use crate::state::{FormFlags, GameObjectState, UnitState};

/// Highest level that still counts as gray (no experience) for a viewer of
/// `level`.
pub const fn gray_level(level: u8) -> u8 {
    match level {
        0..=5 => 0,
        6..=39 => level - 5 - level / 10,
        40..=59 => level - 1 - level / 5,
        _ => level - 9,
    }
}

/// A target of `target_level` is trivial for a viewer of `pov_level`.
pub const fn is_trivial_level_difference(pov_level: u8, target_level: u8) -> bool {
    target_level <= gray_level(pov_level)
}

impl RelationEngine<'_> {
    /// Player ghosts cannot use objects; everyone else needs the object to be
    /// better than unfriendly towards them.
    pub fn can_interact_object(&self, this: &UnitState, object: &GameObjectState) -> bool {
        if this.is_player_ghost() {
            return false;
        }
        object.reaction_to(self, this) > ReputationRank::Unfriendly
    }

    /// Whether `this` may talk to, trade with or otherwise use `unit`.
    pub fn can_interact(&self, this: &UnitState, unit: &UnitState) -> bool {
        if unit.is_uninteractible() {
            return false;
        }
        if unit.npc_flags.is_empty() {
            return false;
        }
        // Ghosts only see spirit-world creatures.
        if this.is_player_ghost() && !unit.is_visible_to_ghosts() {
            return false;
        }

        this.reaction_to(self, unit) > ReputationRank::Unfriendly
            && unit.reaction_to(self, this) > ReputationRank::Unfriendly
    }

    /// [`can_interact`](Self::can_interact) gated by both sides' current state.
    pub fn can_interact_now(&self, this: &UnitState, unit: &UnitState) -> bool {
        if this.is_taxi_flying() || this.is_charmed() {
            return false;
        }
        if !this.is_alive() && !this.is_player_ghost() {
            return false;
        }
        if let Some(form) = this.shapeshift
            && !form.flags.contains(FormFlags::CAN_NPC_INTERACT)
        {
            return false;
        }
        if !unit.is_alive() && !(this.is_creature() && unit.can_interact_while_dead()) {
            return false;
        }
        if unit.is_charmed() || unit.is_engaged() {
            return false;
        }
        self.can_interact(this, unit)
    }

    /// Players are never trivial; anything else is when gray for `pov`.
    pub fn is_trivial_for_target(&self, this: &UnitState, pov: &UnitState) -> bool {
        if this.is_player() {
            return false;
        }
        is_trivial_level_difference(pov.level, this.level)
    }

    /// Killing `this` would be dishonorable for `pov`.
    pub fn is_civilian_for_target(&self, this: &UnitState, pov: &UnitState) -> bool {
        if this.is_pvp() && this.is_civilian() {
            return self.is_trivial_for_target(this, pov) && this.is_enemy(self, pov);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_level_brackets() {
        assert_eq!(gray_level(1), 0);
        assert_eq!(gray_level(5), 0);
        assert_eq!(gray_level(10), 4);
        assert_eq!(gray_level(39), 31);
        assert_eq!(gray_level(40), 31);
        assert_eq!(gray_level(59), 47);
        assert_eq!(gray_level(60), 51);
    }

    #[test]
    fn low_levels_see_nothing_as_trivial() {
        assert!(!is_trivial_level_difference(5, 1));
        assert!(is_trivial_level_difference(60, 51));
        assert!(!is_trivial_level_difference(60, 52));
    }
}
