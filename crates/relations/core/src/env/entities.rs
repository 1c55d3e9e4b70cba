use crate::state::{
    CorpseState, DynamicObjectState, EntityId, EntityRef, GameObjectState, UnitState,
};

/// Resolves entity ids to the live state snapshots owned by the host.
///
/// Used to follow owner, charmer and caster links. A dangling link is a
/// normal outcome and resolves to `None`.
pub trait EntityOracle: Send + Sync {
    fn unit(&self, id: EntityId) -> Option<&UnitState>;

    fn corpse(&self, id: EntityId) -> Option<&CorpseState>;

    fn game_object(&self, id: EntityId) -> Option<&GameObjectState>;

    fn dynamic_object(&self, id: EntityId) -> Option<&DynamicObjectState>;

    /// Resolves an id to whichever kind is registered under it.
    fn entity(&self, id: EntityId) -> Option<EntityRef<'_>> {
        if let Some(unit) = self.unit(id) {
            return Some(EntityRef::Unit(unit));
        }
        if let Some(corpse) = self.corpse(id) {
            return Some(EntityRef::Corpse(corpse));
        }
        if let Some(object) = self.game_object(id) {
            return Some(EntityRef::GameObject(object));
        }
        self.dynamic_object(id).map(EntityRef::DynamicObject)
    }
}
