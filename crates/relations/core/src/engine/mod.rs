//! Relation queries over the world described by a [`RelationEnv`].
//!
//! The [`RelationEngine`] is a thin, copyable handle around the oracles. Every
//! query borrows the entities it compares and never mutates them, so the same
//! engine can serve combat resolution, spell targeting and AI perception
//! within one tick. Queries are grouped by layer:
//!
//! - [`faction`]: template to template and template to unit reactions
//! - [`reaction`]: per-kind reaction dispatch ([`Reaction`])
//! - [`combat`]: attack eligibility
//! - [`assist`]: assistance and cooperation
//! - [`affinity`]: group, guild and team membership
//! - [`visibility`]: fog-of-war gates
//! - [`interact`], [`spell`]: interaction, triviality and spell proxies
pub mod affinity;
pub mod assist;
pub mod combat;
pub mod control;
pub mod faction;
pub mod interact;
pub mod reaction;
pub mod spell;
pub mod visibility;

pub use combat::RestrictionOverrides;
pub use control::{ControlView, ControllingPlayer};
pub use faction::reaction_between_templates;
pub use interact::{gray_level, is_trivial_level_difference};
pub use reaction::Reaction;
pub use spell::{SpellAttributes, SpellInfo, SpellSource};
pub use visibility::{HealthVisibility, StatsVisibility, StealthVisibility};

use crate::env::{FactionEntry, FactionTemplate, RelationEnv};
use crate::rank::ReputationRank;
use crate::state::{EntityId, EntityRef, RegistryError, UnitState};

/// Read-only relation resolver.
#[derive(Clone, Copy, Debug)]
pub struct RelationEngine<'a> {
    env: RelationEnv<'a>,
}

impl<'a> RelationEngine<'a> {
    pub fn new(env: RelationEnv<'a>) -> Self {
        Self { env }
    }

    pub fn env(&self) -> RelationEnv<'a> {
        self.env
    }

    /// Faction template of a unit, if it has one and it is known.
    pub fn template_of(&self, unit: &UnitState) -> Option<&'a FactionTemplate> {
        unit.faction.and_then(|id| self.env.factions().template(id))
    }

    /// Faction entry behind `template`, only if players track reputation with it.
    pub fn reputation_faction(&self, template: &FactionTemplate) -> Option<&'a FactionEntry> {
        self.env
            .factions()
            .faction(template.faction)
            .filter(|entry| entry.has_reputation())
    }

    /// Follows an owner/caster link. Dangling links resolve to `None`.
    pub(crate) fn linked_unit(&self, link: Option<EntityId>) -> Option<&'a UnitState> {
        link.and_then(|id| self.env.entities().unit(id))
    }

    // ===== id-keyed surface =====

    /// Looks up a registered unit.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownEntity` if no unit has this id.
    pub fn unit(&self, id: EntityId) -> Result<&'a UnitState, RegistryError> {
        self.env
            .entities()
            .unit(id)
            .ok_or(RegistryError::UnknownEntity(id))
    }

    /// Looks up a registered entity of any kind.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownEntity` if nothing has this id.
    pub fn entity(&self, id: EntityId) -> Result<EntityRef<'a>, RegistryError> {
        self.env
            .entities()
            .entity(id)
            .ok_or(RegistryError::UnknownEntity(id))
    }

    /// Reaction of any registered entity towards a registered unit or corpse.
    ///
    /// Objects and spell proxies are never the subject of a reaction, so a
    /// target of those kinds resolves to Neutral.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownEntity` if either id is unknown.
    pub fn reaction_between(
        &self,
        viewer: EntityId,
        target: EntityId,
    ) -> Result<ReputationRank, RegistryError> {
        let viewer = self.entity(viewer)?;
        let rank = match self.entity(target)? {
            EntityRef::Unit(unit) => viewer.reaction_to(self, unit),
            EntityRef::Corpse(corpse) => viewer.reaction_to_corpse(self, corpse),
            EntityRef::GameObject(_) | EntityRef::DynamicObject(_) => ReputationRank::Neutral,
        };
        Ok(rank)
    }

    // ===== reaction presets =====

    pub fn reaction_to<R: Reaction + ?Sized>(&self, viewer: &R, unit: &UnitState) -> ReputationRank {
        viewer.reaction_to(self, unit)
    }

    pub fn is_enemy<R: Reaction + ?Sized>(&self, viewer: &R, unit: &UnitState) -> bool {
        viewer.is_enemy(self, unit)
    }

    pub fn is_friend<R: Reaction + ?Sized>(&self, viewer: &R, unit: &UnitState) -> bool {
        viewer.is_friend(self, unit)
    }
}
