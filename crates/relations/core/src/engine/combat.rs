//! Attack eligibility.
//!
//! Each check short-circuits: the first failing condition decides.

use crate::engine::{Reaction, RelationEngine, SpellInfo};
use crate::state::UnitState;

/// Spell-driven exemptions from the immunity cross-check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RestrictionOverrides {
    /// Skip the attacker's own immunity flags.
    pub ignore_source: bool,
    /// Skip the target's immunity flags.
    pub ignore_target: bool,
}

impl RestrictionOverrides {
    pub const NONE: Self = Self {
        ignore_source: false,
        ignore_target: false,
    };

    pub const ALL: Self = Self {
        ignore_source: true,
        ignore_target: true,
    };

    fn from_spell(spell: &SpellInfo) -> Self {
        if spell.ignores_restrictions() {
            Self::ALL
        } else {
            Self::NONE
        }
    }
}

impl RelationEngine<'_> {
    /// Whether `this` treats `unit` as something it may attack.
    pub fn can_attack(&self, this: &UnitState, unit: &UnitState) -> bool {
        self.can_attack_serverside(this, unit, RestrictionOverrides::NONE)
    }

    /// [`can_attack`](Self::can_attack) for a direct attack request: a dead
    /// or mounted attacker cannot start one, and dead targets are off limits.
    pub fn can_attack_now(&self, this: &UnitState, unit: &UnitState) -> bool {
        if !this.is_alive() || this.is_mounted() {
            return false;
        }
        if !unit.is_alive() {
            return false;
        }
        self.can_attack(this, unit)
    }

    /// Attack check with optional immunity exemptions.
    pub fn can_attack_serverside(
        &self,
        this: &UnitState,
        unit: &UnitState,
        overrides: RestrictionOverrides,
    ) -> bool {
        // Creatures cannot see player ghosts unless flagged for it.
        if this.is_creature() && unit.is_player_ghost() && !this.is_visible_to_ghosts() {
            return false;
        }

        if unit.is_unattackable() {
            return false;
        }

        let this_controlled = this.is_player_controlled();
        let unit_controlled = unit.is_player_controlled();

        if !overrides.ignore_target {
            let immune = if this_controlled {
                unit.is_immune_to_player()
            } else {
                unit.is_immune_to_npc()
            };
            if immune {
                return false;
            }
        }

        if !overrides.ignore_source {
            let immune = if unit_controlled {
                this.is_immune_to_player()
            } else {
                this.is_immune_to_npc()
            };
            if immune {
                return false;
            }
        }

        match (this_controlled, unit_controlled) {
            (true, true) => {
                if this.is_friend(self, unit) {
                    return false;
                }
                let Some(this_player) = self.controller(this) else {
                    return true;
                };
                let Some(unit_player) = self.controller(unit) else {
                    return true;
                };

                this_player.player.in_matching_duel(unit_player.player)
                    || unit_player.unit.is_pvp()
                    || (this_player.player.is_pvp_free_for_all()
                        && unit_player.player.is_pvp_free_for_all())
            }
            (true, false) | (false, true) => !this.is_friend(self, unit),
            (false, false) => this.is_enemy(self, unit) || unit.is_enemy(self, this),
        }
    }

    /// Attack check that lets a creature strike a nominally friendly player
    /// who is at war with the creature's faction.
    pub fn can_attack_in_combat(
        &self,
        this: &UnitState,
        target: &UnitState,
        overrides: RestrictionOverrides,
    ) -> bool {
        if self.can_attack_serverside(this, target, overrides) {
            return true;
        }

        target.is_player_controlled()
            && this.is_friend(self, target)
            && self.target_at_war_with(this, target)
    }

    /// Harmful spell targeting.
    ///
    /// AOE spells from a player-controlled caster skip player-controlled
    /// targets whose PvP state differs, outside duels and mutual FFA.
    /// Creature casters only hit non-hostile players at war with them.
    pub fn can_attack_spell(
        &self,
        this: &UnitState,
        target: &UnitState,
        spell: Option<&SpellInfo>,
        is_aoe: bool,
    ) -> bool {
        let mut overrides = RestrictionOverrides::NONE;
        if let Some(spell) = spell {
            if !target.is_alive() && !spell.allows_dead_target() {
                return false;
            }
            overrides = RestrictionOverrides::from_spell(spell);
        }

        if !self.can_attack_in_combat(this, target, overrides) {
            return false;
        }

        if target.is_player_controlled() {
            if this.is_player_controlled() {
                if is_aoe
                    && let Some(this_player) = self.controller(this)
                    && let Some(unit_player) = self.controller(target)
                    && !this_player.player.in_duel_with(unit_player.player)
                    && this_player.unit.is_pvp() != unit_player.unit.is_pvp()
                {
                    return this_player.player.is_pvp_free_for_all()
                        && unit_player.player.is_pvp_free_for_all();
                }
            } else if !this.is_enemy(self, target)
                && let Some(unit_player) = self.controller(target)
                && let Some(template) = self.template_of(this)
                && let Some(entry) = self.reputation_faction(template)
            {
                return unit_player.player.reputation.is_at_war(entry);
            }
        }

        true
    }

    /// Aggro check for AI line-of-sight.
    pub fn can_attack_on_sight(&self, this: &UnitState, target: &UnitState) -> bool {
        if target.combat.evading_home {
            return false;
        }
        if !this.combat.ignores_feign_death && target.combat.feigning_death {
            return false;
        }
        if target.is_disabled_pet() {
            return false;
        }
        self.can_attack(this, target) && this.is_enemy(self, target)
    }

    /// The target's controlling player is at war with `this`'s faction.
    fn target_at_war_with(&self, this: &UnitState, target: &UnitState) -> bool {
        let Some(unit_player) = self.controller(target) else {
            return false;
        };
        self.template_of(this)
            .and_then(|template| self.reputation_faction(template))
            .is_some_and(|entry| unit_player.player.reputation.is_at_war(entry))
    }
}
