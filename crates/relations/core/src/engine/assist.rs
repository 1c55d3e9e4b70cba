//! Assistance and cooperation.

use crate::engine::{Reaction, RelationEngine};
use crate::rank::ReputationRank;
use crate::state::{CorpseState, UnitState};

impl RelationEngine<'_> {
    /// Whether `this` may help `unit`.
    pub fn can_assist(&self, this: &UnitState, unit: &UnitState) -> bool {
        if unit.is_uninteractible() {
            return false;
        }

        if this.reaction_to(self, unit) < ReputationRank::Friendly {
            return false;
        }

        if unit.is_player_controlled() {
            if let Some(this_player) = self.controller(this)
                && let Some(unit_player) = self.controller(unit)
            {
                // Different duels, or opposing sides of the same one.
                if this_player.player.duel != unit_player.player.duel {
                    return false;
                }
                if unit_player.player.is_pvp_free_for_all()
                    && !this_player.player.is_pvp_free_for_all()
                {
                    return false;
                }
            }
            return true;
        }

        if !this.is_player_controlled() {
            return true;
        }

        // Players may only help creatures that show as PvP.
        self.is_pvp_ui(unit)
    }

    /// PvP state as a unit frame shows it: pets and charmed units borrow
    /// their master's, unless shielded from players.
    pub fn is_pvp_ui(&self, unit: &UnitState) -> bool {
        match self.linked_unit(unit.master()) {
            Some(_) if unit.is_immune_to_player() => false,
            Some(master) => master.is_pvp(),
            None => unit.is_pvp(),
        }
    }

    pub fn can_assist_corpse(&self, this: &UnitState, corpse: &CorpseState) -> bool {
        this.reaction_to_corpse(self, corpse) > ReputationRank::Neutral
    }

    /// Uncharmed units of the same faction group that cannot attack each
    /// other cooperate.
    pub fn can_cooperate(&self, this: &UnitState, unit: &UnitState) -> bool {
        if this.id == unit.id {
            return false;
        }
        if this.is_charmed() || unit.is_charmed() {
            return false;
        }

        match (self.template_of(this), self.template_of(unit)) {
            (Some(mine), Some(theirs)) if mine.group_mask == theirs.group_mask => {
                !self.can_attack(this, unit)
            }
            _ => false,
        }
    }

    pub fn can_join_in_attacking(&self, this: &UnitState, enemy: &UnitState) -> bool {
        let combat = &this.combat;
        if !combat.can_enter_combat || !combat.can_initiate_attack {
            return false;
        }
        if combat.feigning_death || combat.unattackable_aura {
            return false;
        }
        self.can_attack(this, enemy)
    }

    /// Whether `this` should help `who` fight `enemy`.
    ///
    /// Inside instances only the ability to join matters.
    pub fn can_assist_in_combat_against(
        &self,
        this: &UnitState,
        who: &UnitState,
        enemy: &UnitState,
    ) -> bool {
        if self.env.maps().is_instanceable(this.map) {
            return self.can_join_in_attacking(this, enemy);
        }

        if this.combat.in_combat {
            return false;
        }

        self.can_assist(this, who) && self.can_attack_on_sight(this, enemy)
    }
}
