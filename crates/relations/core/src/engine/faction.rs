//! Faction template resolver.
//!
//! The leaf of every reaction query: compares two templates, or a template
//! against a unit whose controlling player may carry personal reputation.

use tracing::trace;

use crate::engine::RelationEngine;
use crate::env::FactionTemplate;
use crate::rank::ReputationRank;
use crate::state::UnitState;

/// Reaction of template `a` towards template `b`.
///
/// Enemy conditions are checked before friend conditions; real faction data
/// can satisfy both and enmity wins.
pub fn reaction_between_templates(a: &FactionTemplate, b: &FactionTemplate) -> ReputationRank {
    if b.group_mask.intersects(a.enemy_group_mask) || a.lists_enemy(b.faction) {
        return ReputationRank::Hostile;
    }

    if b.group_mask.intersects(a.friend_group_mask)
        || a.lists_friend(b.faction)
        || a.group_mask.intersects(b.friend_group_mask)
        || b.lists_friend(a.faction)
    {
        return ReputationRank::Friendly;
    }

    ReputationRank::Neutral
}

impl RelationEngine<'_> {
    /// Reaction of `template` towards `unit`.
    ///
    /// For player-controlled units the controlling player's personal standing
    /// is consulted first: a forced rank, then the contested guard rule, then
    /// tracked reputation. Otherwise the unit's own template decides.
    pub fn template_reaction_to_unit(
        &self,
        template: Option<&FactionTemplate>,
        unit: &UnitState,
    ) -> ReputationRank {
        let (Some(template), Some(unit_template)) = (template, self.template_of(unit)) else {
            return ReputationRank::Neutral;
        };

        if unit.is_player_controlled()
            && let Some(controller) = self.controller(unit)
        {
            let reputation = &controller.player.reputation;

            if let Some(rank) = reputation.forced_rank(template) {
                trace!(unit = %unit.id, template = %template.id, %rank, "forced rank");
                return rank;
            }

            if controller.player.is_contested_pvp() && template.is_contested_guard() {
                trace!(unit = %unit.id, template = %template.id, "contested guard");
                return ReputationRank::Hostile;
            }

            if let Some(entry) = self.reputation_faction(template) {
                return reputation.rank(entry);
            }
        }

        reaction_between_templates(template, unit_template)
    }
}
