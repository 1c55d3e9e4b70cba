//! In-memory entity registry.
//!
//! The host fills the registry with snapshots of the entities it simulates and
//! hands it to the engine as the [`EntityOracle`]. Ids are unique across all
//! entity kinds.

use std::collections::BTreeMap;

use crate::env::EntityOracle;
use crate::error::{ErrorSeverity, RelationsError};
use crate::state::{CorpseState, DynamicObjectState, EntityId, GameObjectState, UnitState};

/// Errors raised while registering or looking up entities.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegistryError {
    /// An entity with this id is already registered.
    #[error("entity {0} is already registered")]
    DuplicateEntity(EntityId),

    /// Nothing is registered under this id.
    #[error("entity {0} is not registered")]
    UnknownEntity(EntityId),
}

impl RelationsError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateEntity(_) => "REGISTRY_DUPLICATE_ENTITY",
            Self::UnknownEntity(_) => "REGISTRY_UNKNOWN_ENTITY",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct EntityRegistry {
    units: BTreeMap<EntityId, UnitState>,
    corpses: BTreeMap<EntityId, CorpseState>,
    game_objects: BTreeMap<EntityId, GameObjectState>,
    dynamic_objects: BTreeMap<EntityId, DynamicObjectState>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.units.contains_key(&id)
            || self.corpses.contains_key(&id)
            || self.game_objects.contains_key(&id)
            || self.dynamic_objects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.units.len() + self.corpses.len() + self.game_objects.len() + self.dynamic_objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_vacant(&self, id: EntityId) -> Result<(), RegistryError> {
        if self.contains(id) {
            return Err(RegistryError::DuplicateEntity(id));
        }
        Ok(())
    }

    pub fn insert_unit(&mut self, unit: UnitState) -> Result<(), RegistryError> {
        self.ensure_vacant(unit.id)?;
        self.units.insert(unit.id, unit);
        Ok(())
    }

    pub fn insert_corpse(&mut self, corpse: CorpseState) -> Result<(), RegistryError> {
        self.ensure_vacant(corpse.id)?;
        self.corpses.insert(corpse.id, corpse);
        Ok(())
    }

    pub fn insert_game_object(&mut self, object: GameObjectState) -> Result<(), RegistryError> {
        self.ensure_vacant(object.id)?;
        self.game_objects.insert(object.id, object);
        Ok(())
    }

    pub fn insert_dynamic_object(
        &mut self,
        object: DynamicObjectState,
    ) -> Result<(), RegistryError> {
        self.ensure_vacant(object.id)?;
        self.dynamic_objects.insert(object.id, object);
        Ok(())
    }

    /// Mutable access for hosts updating live unit state between queries.
    pub fn unit_mut(&mut self, id: EntityId) -> Option<&mut UnitState> {
        self.units.get_mut(&id)
    }

    /// Removes an entity of any kind. Returns false if nothing was registered.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.units.remove(&id).is_some()
            || self.corpses.remove(&id).is_some()
            || self.game_objects.remove(&id).is_some()
            || self.dynamic_objects.remove(&id).is_some()
    }
}

impl EntityOracle for EntityRegistry {
    fn unit(&self, id: EntityId) -> Option<&UnitState> {
        self.units.get(&id)
    }

    fn corpse(&self, id: EntityId) -> Option<&CorpseState> {
        self.corpses.get(&id)
    }

    fn game_object(&self, id: EntityId) -> Option<&GameObjectState> {
        self.game_objects.get(&id)
    }

    fn dynamic_object(&self, id: EntityId) -> Option<&DynamicObjectState> {
        self.dynamic_objects.get(&id)
    }
}
