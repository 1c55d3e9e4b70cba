use crate::state::{EntityId, FactionTemplateId};

/// Remains of a unit. Keeps the faction template its owner had at death.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorpseState {
    pub id: EntityId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub owner: Option<EntityId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub faction: Option<FactionTemplateId>,
}

impl CorpseState {
    pub fn new(id: EntityId, owner: Option<EntityId>, faction: Option<FactionTemplateId>) -> Self {
        Self { id, owner, faction }
    }
}

/// A placed world object, optionally owned by a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameObjectState {
    pub id: EntityId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub owner: Option<EntityId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub faction: Option<FactionTemplateId>,
}

impl GameObjectState {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            owner: None,
            faction: None,
        }
    }

    #[must_use]
    pub fn with_owner(mut self, owner: EntityId) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn with_faction(mut self, faction: FactionTemplateId) -> Self {
        self.faction = Some(faction);
        self
    }
}

/// A persistent spell area, acting on behalf of its caster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicObjectState {
    pub id: EntityId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub caster: Option<EntityId>,
}

impl DynamicObjectState {
    pub fn new(id: EntityId, caster: Option<EntityId>) -> Self {
        Self { id, caster }
    }
}
