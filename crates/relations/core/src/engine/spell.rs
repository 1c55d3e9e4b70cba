//! Spell targeting for units and the objects that cast on their behalf.

use bitflags::bitflags;

use crate::engine::{Reaction, RelationEngine};
use crate::state::{DynamicObjectState, GameObjectState, UnitState};

bitflags! {
    /// Spell attributes that change target validation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellAttributes: u32 {
        const ALLOW_DEAD_TARGET                     = 1 << 0;
        const IGNORE_CASTER_AND_TARGET_RESTRICTIONS = 1 << 1;
    }
}

/// The parts of a spell definition relation checks look at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellInfo {
    pub id: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: SpellAttributes,
}

impl SpellInfo {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            attributes: SpellAttributes::empty(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: SpellAttributes) -> Self {
        self.attributes |= attributes;
        self
    }

    pub fn allows_dead_target(&self) -> bool {
        self.attributes.contains(SpellAttributes::ALLOW_DEAD_TARGET)
    }

    pub fn ignores_restrictions(&self) -> bool {
        self.attributes
            .contains(SpellAttributes::IGNORE_CASTER_AND_TARGET_RESTRICTIONS)
    }
}

/// Anything that can cast a spell.
#[derive(Clone, Copy, Debug)]
pub enum SpellSource<'s> {
    Unit(&'s UnitState),
    GameObject(&'s GameObjectState),
    DynamicObject(&'s DynamicObjectState),
}

impl RelationEngine<'_> {
    /// Helpful spell targeting. Units assist exactly as they do outside spells.
    pub fn can_assist_spell(
        &self,
        this: &UnitState,
        target: &UnitState,
        _spell: Option<&SpellInfo>,
    ) -> bool {
        self.can_assist(this, target)
    }

    /// Harmful spell from a placed object. Owned objects cast as their owner.
    pub fn object_can_attack_spell(
        &self,
        object: &GameObjectState,
        target: &UnitState,
        spell: Option<&SpellInfo>,
        is_aoe: bool,
    ) -> bool {
        if let Some(owner) = self.linked_unit(object.owner) {
            return self.can_attack_spell(owner, target, spell, is_aoe);
        }

        if target.is_player_controlled() {
            !object.is_friend(self, target)
        } else {
            object.is_enemy(self, target)
        }
    }

    /// Helpful spell from a placed object. Owned objects cast as their owner.
    pub fn object_can_assist_spell(
        &self,
        object: &GameObjectState,
        target: &UnitState,
        spell: Option<&SpellInfo>,
    ) -> bool {
        if let Some(owner) = self.linked_unit(object.owner) {
            return self.can_assist_spell(owner, target, spell);
        }

        if target.is_player_controlled() {
            !object.is_enemy(self, target)
        } else {
            object.is_friend(self, target)
        }
    }

    /// Harmful spell from a spell area. Without a caster nothing is hit.
    pub fn dynamic_object_can_attack_spell(
        &self,
        object: &DynamicObjectState,
        target: &UnitState,
        spell: Option<&SpellInfo>,
        is_aoe: bool,
    ) -> bool {
        self.linked_unit(object.caster)
            .is_some_and(|caster| self.can_attack_spell(caster, target, spell, is_aoe))
    }

    /// Helpful spell from a spell area. Without a caster nothing is helped.
    pub fn dynamic_object_can_assist_spell(
        &self,
        object: &DynamicObjectState,
        target: &UnitState,
        spell: Option<&SpellInfo>,
    ) -> bool {
        self.linked_unit(object.caster)
            .is_some_and(|caster| self.can_assist_spell(caster, target, spell))
    }

    pub fn can_attack_spell_from(
        &self,
        source: SpellSource<'_>,
        target: &UnitState,
        spell: Option<&SpellInfo>,
        is_aoe: bool,
    ) -> bool {
        match source {
            SpellSource::Unit(unit) => self.can_attack_spell(unit, target, spell, is_aoe),
            SpellSource::GameObject(object) => {
                self.object_can_attack_spell(object, target, spell, is_aoe)
            }
            SpellSource::DynamicObject(object) => {
                self.dynamic_object_can_attack_spell(object, target, spell, is_aoe)
            }
        }
    }

    pub fn can_assist_spell_from(
        &self,
        source: SpellSource<'_>,
        target: &UnitState,
        spell: Option<&SpellInfo>,
    ) -> bool {
        match source {
            SpellSource::Unit(unit) => self.can_assist_spell(unit, target, spell),
            SpellSource::GameObject(object) => self.object_can_assist_spell(object, target, spell),
            SpellSource::DynamicObject(object) => {
                self.dynamic_object_can_assist_spell(object, target, spell)
            }
        }
    }
}
