//! Per-kind reaction dispatch.
//!
//! Units carry the full rule set. Objects without an opinion of their own
//! either defer to the unit behind them or fall back to Neutral.

use tracing::{debug, trace};

use crate::config::RelationsConfig;
use crate::engine::RelationEngine;
use crate::engine::faction::reaction_between_templates;
use crate::rank::ReputationRank;
use crate::state::{
    CorpseState, DynamicObjectState, EntityRef, GameObjectState, Team, UnitState,
};

/// Capability shared by every entity kind that can hold a reaction.
///
/// The defaults describe an entity with no owner and no faction: Neutral
/// towards everything, so never an enemy and never a friend. `is_enemy` and
/// `is_friend` are always derived from `reaction_to`.
pub trait Reaction {
    fn reaction_to(&self, _engine: &RelationEngine<'_>, _unit: &UnitState) -> ReputationRank {
        ReputationRank::Neutral
    }

    fn reaction_to_corpse(
        &self,
        _engine: &RelationEngine<'_>,
        _corpse: &CorpseState,
    ) -> ReputationRank {
        ReputationRank::Neutral
    }

    fn is_enemy(&self, engine: &RelationEngine<'_>, unit: &UnitState) -> bool {
        self.reaction_to(engine, unit).is_enemy()
    }

    fn is_friend(&self, engine: &RelationEngine<'_>, unit: &UnitState) -> bool {
        self.reaction_to(engine, unit).is_friend()
    }
}

impl Reaction for UnitState {
    fn reaction_to(&self, engine: &RelationEngine<'_>, unit: &UnitState) -> ReputationRank {
        if self.id == unit.id {
            return ReputationRank::SELF;
        }

        if self.is_player_controlled() {
            let this_player = engine.controller(self);

            if unit.is_player_controlled() {
                let (Some(this_player), Some(unit_player)) = (this_player, engine.controller(unit))
                else {
                    return ReputationRank::Neutral;
                };

                if this_player.is_same(&unit_player) {
                    return ReputationRank::Friendly;
                }

                if this_player.player.in_matching_duel(unit_player.player) {
                    return if this_player.player.in_duel_with(unit_player.player) {
                        ReputationRank::Hostile
                    } else {
                        ReputationRank::Friendly
                    };
                }

                if this_player.player.shares_group(unit_player.player, false) {
                    return ReputationRank::Friendly;
                }

                if this_player.player.is_pvp_free_for_all()
                    && unit_player.player.is_pvp_free_for_all()
                {
                    return ReputationRank::Hostile;
                }
            }

            if let Some(this_player) = this_player
                && let Some(unit_template) = engine.template_of(unit)
            {
                let reputation = &this_player.player.reputation;

                if let Some(rank) = reputation.forced_rank(unit_template) {
                    trace!(viewer = %self.id, target = %unit.id, %rank, "forced rank");
                    return rank;
                }

                if let Some(entry) = engine.reputation_faction(unit_template) {
                    if this_player.player.is_contested_pvp() && unit_template.is_contested_guard()
                    {
                        trace!(viewer = %self.id, target = %unit.id, "contested guard");
                        return ReputationRank::Hostile;
                    }

                    return if reputation.is_at_war(entry) {
                        trace!(viewer = %self.id, target = %unit.id, "at war");
                        ReputationRank::Hostile
                    } else {
                        ReputationRank::Friendly
                    };
                }
            }
        }

        let mut reaction = engine.template_reaction_to_unit(engine.template_of(self), unit);

        let persuaded = unit.is_persuaded() || self.links.persuaded == Some(unit.id);
        if persuaded
            && reaction > ReputationRank::Hostile
            && reaction < ReputationRank::Honored
            && engine
                .template_of(unit)
                .and_then(|template| engine.reputation_faction(template))
                .is_some()
        {
            trace!(viewer = %self.id, target = %unit.id, from = %reaction, "persuaded");
            reaction = reaction.step_up();
        }

        reaction
    }

    fn reaction_to_corpse(&self, engine: &RelationEngine<'_>, corpse: &CorpseState) -> ReputationRank {
        if let Some(rank) = crossfaction_corpse_reaction(engine, self, corpse) {
            return rank;
        }

        let factions = engine.env().factions();
        match (
            engine.template_of(self),
            corpse.faction.and_then(|id| factions.template(id)),
        ) {
            (Some(this), Some(corpse)) => reaction_between_templates(this, corpse),
            _ => ReputationRank::Neutral,
        }
    }
}

/// Grouped players of opposing teams see each other's corpses through the
/// generic ally template of the viewer's team.
fn crossfaction_corpse_reaction(
    engine: &RelationEngine<'_>,
    viewer: &UnitState,
    corpse: &CorpseState,
) -> Option<ReputationRank> {
    let player = viewer.as_player()?;
    let owner = engine.linked_unit(corpse.owner)?;
    let owner_player = owner.as_player()?;

    if owner.id == viewer.id || player.team == owner_player.team {
        return None;
    }
    if !engine.env().config().allow_two_side_interaction_group()
        || !engine.is_in_group(viewer, owner, false, false)
    {
        return None;
    }

    let generic = match player.team {
        Team::Alliance => RelationsConfig::ALLIANCE_GENERIC_FACTION,
        Team::Horde => RelationsConfig::HORDE_GENERIC_FACTION,
    };
    debug!(viewer = %viewer.id, corpse = %corpse.id, %generic, "crossfaction corpse");

    let rank = match (engine.template_of(viewer), engine.env().factions().template(generic)) {
        (Some(this), Some(generic)) => reaction_between_templates(this, generic),
        _ => ReputationRank::Neutral,
    };
    Some(rank)
}

impl Reaction for CorpseState {}

impl Reaction for GameObjectState {
    fn reaction_to(&self, engine: &RelationEngine<'_>, unit: &UnitState) -> ReputationRank {
        if let Some(owner) = engine.linked_unit(self.owner) {
            return owner.reaction_to(engine, unit);
        }

        match self.faction.and_then(|id| engine.env().factions().template(id)) {
            Some(template) => engine.template_reaction_to_unit(Some(template), unit),
            None => ReputationRank::Neutral,
        }
    }
}

impl Reaction for DynamicObjectState {
    fn reaction_to(&self, engine: &RelationEngine<'_>, unit: &UnitState) -> ReputationRank {
        engine
            .linked_unit(self.caster)
            .map_or(ReputationRank::Neutral, |caster| caster.reaction_to(engine, unit))
    }
}

impl Reaction for EntityRef<'_> {
    fn reaction_to(&self, engine: &RelationEngine<'_>, unit: &UnitState) -> ReputationRank {
        match self {
            Self::Unit(this) => this.reaction_to(engine, unit),
            Self::Corpse(this) => this.reaction_to(engine, unit),
            Self::GameObject(this) => this.reaction_to(engine, unit),
            Self::DynamicObject(this) => this.reaction_to(engine, unit),
        }
    }

    fn reaction_to_corpse(&self, engine: &RelationEngine<'_>, corpse: &CorpseState) -> ReputationRank {
        match self {
            Self::Unit(this) => this.reaction_to_corpse(engine, corpse),
            Self::Corpse(this) => this.reaction_to_corpse(engine, corpse),
            Self::GameObject(this) => this.reaction_to_corpse(engine, corpse),
            Self::DynamicObject(this) => this.reaction_to_corpse(engine, corpse),
        }
    }
}
