//! Live entity state read by the relation rules.
//!
//! The host owns and mutates these snapshots; the engine only borrows them.
//! Links between entities (owner, charmer, caster) are ids resolved through
//! the entity oracle, never references.
mod common;
mod flags;
mod objects;
mod player;
mod registry;
mod unit;

pub use common::{EntityId, FactionId, FactionTemplateId, GroupId, GuildId, MapId};
pub use flags::{CreatureTypeFlags, FormFlags, NpcFlags, PetModeFlags, PlayerFlags, UnitFlags};
pub use objects::{CorpseState, DynamicObjectState, GameObjectState};
pub use player::{DuelState, GroupMembership, PlayerState, ReputationBook, Team};
pub use registry::{EntityRegistry, RegistryError};
pub use unit::{CombatStatus, CreatureState, ShapeshiftForm, UnitKind, UnitLinks, UnitState};

/// Borrowed view of any registered entity.
#[derive(Clone, Copy, Debug)]
pub enum EntityRef<'a> {
    Unit(&'a UnitState),
    Corpse(&'a CorpseState),
    GameObject(&'a GameObjectState),
    DynamicObject(&'a DynamicObjectState),
}

impl EntityRef<'_> {
    pub fn id(&self) -> EntityId {
        match self {
            Self::Unit(unit) => unit.id,
            Self::Corpse(corpse) => corpse.id,
            Self::GameObject(object) => object.id,
            Self::DynamicObject(object) => object.id,
        }
    }
}
