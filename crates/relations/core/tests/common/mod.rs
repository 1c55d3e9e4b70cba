#![allow(dead_code)]

use relations_core::{
    CorpseState, DynamicObjectState, EntityId, EntityRegistry, FactionEntry, FactionGroupMask as G,
    FactionId, FactionStore, FactionTemplate, FactionTemplateFlags, FactionTemplateId,
    GameObjectState, MapId, MapKind, MapTable, PlayerState, RelationEngine, RelationEnv,
    RelationsConfig, ReputationBook, ReputationRank, Team, UnitState,
};

pub const ALLIANCE_PLAYER: FactionTemplateId = FactionTemplateId(1);
pub const HORDE_PLAYER: FactionTemplateId = FactionTemplateId(2);
pub const STORMWIND_GUARD: FactionTemplateId = FactionTemplateId(11);
pub const ORGRIMMAR_GRUNT: FactionTemplateId = FactionTemplateId(85);
pub const BOOTY_BAY: FactionTemplateId = FactionTemplateId(120);
pub const MONSTER: FactionTemplateId = FactionTemplateId(14);
pub const CRITTER: FactionTemplateId = FactionTemplateId(31);

pub const STORMWIND: FactionId = FactionId(72);
pub const ORGRIMMAR: FactionId = FactionId(76);
pub const BLOODSAIL: FactionId = FactionId(21);

pub const CONTINENT: MapId = MapId(0);
pub const DUNGEON: MapId = MapId(36);

/// Small world with the two player teams, their capitals, a neutral goblin
/// town, hostile monsters and critters.
pub fn faction_store() -> FactionStore {
    let template = |id: FactionTemplateId, faction: u32| FactionTemplate::new(id, FactionId(faction));

    FactionStore::builder()
        .template(template(ALLIANCE_PLAYER, 1).with_masks(
            G::PLAYER | G::ALLIANCE,
            G::ALLIANCE,
            G::HORDE | G::MONSTER,
        ))
        .template(template(HORDE_PLAYER, 2).with_masks(
            G::PLAYER | G::HORDE,
            G::HORDE,
            G::ALLIANCE | G::MONSTER,
        ))
        .template(template(STORMWIND_GUARD, 72).with_masks(
            G::ALLIANCE,
            G::ALLIANCE,
            G::HORDE | G::MONSTER,
        ))
        .template(template(ORGRIMMAR_GRUNT, 76).with_masks(
            G::HORDE,
            G::HORDE,
            G::ALLIANCE | G::MONSTER,
        ))
        .template(
            template(BOOTY_BAY, 21)
                .with_flags(FactionTemplateFlags::CONTESTED_GUARD)
                .with_masks(G::empty(), G::empty(), G::MONSTER),
        )
        .template(template(MONSTER, 7).with_masks(G::MONSTER, G::empty(), G::PLAYER))
        .template(template(CRITTER, 28))
        .template(template(RelationsConfig::ALLIANCE_GENERIC_FACTION, 469).with_masks(
            G::ALLIANCE,
            G::ALLIANCE,
            G::empty(),
        ))
        .template(template(RelationsConfig::HORDE_GENERIC_FACTION, 67).with_masks(
            G::HORDE,
            G::HORDE,
            G::empty(),
        ))
        .faction(FactionEntry::new(FactionId(1)))
        .faction(FactionEntry::new(FactionId(2)))
        .faction(
            FactionEntry::new(STORMWIND)
                .with_reputation_index(0)
                .with_base_rank(ReputationRank::Friendly),
        )
        .faction(
            FactionEntry::new(ORGRIMMAR)
                .with_reputation_index(1)
                .with_base_rank(ReputationRank::Friendly),
        )
        .faction(FactionEntry::new(BLOODSAIL).with_reputation_index(2))
        .faction(FactionEntry::new(FactionId(469)))
        .faction(FactionEntry::new(FactionId(67)))
        .build()
        .expect("fixture factions are valid")
}

pub struct World {
    pub factions: FactionStore,
    pub entities: EntityRegistry,
    pub maps: MapTable,
    pub config: RelationsConfig,
}

impl World {
    pub fn new() -> Self {
        Self {
            factions: faction_store(),
            entities: EntityRegistry::new(),
            maps: MapTable::new()
                .with_map(CONTINENT, MapKind::Continent)
                .with_map(DUNGEON, MapKind::Dungeon),
            config: RelationsConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RelationsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn engine(&self) -> RelationEngine<'_> {
        RelationEngine::new(RelationEnv::new(
            &self.factions,
            &self.entities,
            &self.maps,
            &self.config,
        ))
    }

    pub fn add(&mut self, unit: UnitState) -> EntityId {
        let id = unit.id;
        self.entities.insert_unit(unit).expect("unique unit id");
        id
    }

    pub fn add_corpse(&mut self, corpse: CorpseState) -> EntityId {
        let id = corpse.id;
        self.entities.insert_corpse(corpse).expect("unique corpse id");
        id
    }

    pub fn add_object(&mut self, object: GameObjectState) -> EntityId {
        let id = object.id;
        self.entities
            .insert_game_object(object)
            .expect("unique object id");
        id
    }

    pub fn add_dynamic(&mut self, object: DynamicObjectState) -> EntityId {
        let id = object.id;
        self.entities
            .insert_dynamic_object(object)
            .expect("unique dynamic object id");
        id
    }

    pub fn unit(&self, id: EntityId) -> &UnitState {
        self.engine().unit(id).expect("registered unit")
    }
}

/// Alliance citizen in good standing with Stormwind, at war with Orgrimmar.
pub fn alliance_state() -> PlayerState {
    PlayerState::new(Team::Alliance).with_reputation(
        ReputationBook::new()
            .with_standing(ORGRIMMAR, ReputationRank::Hated)
            .with_war(ORGRIMMAR),
    )
}

/// Horde citizen in good standing with Orgrimmar, at war with Stormwind.
pub fn horde_state() -> PlayerState {
    PlayerState::new(Team::Horde).with_reputation(
        ReputationBook::new()
            .with_standing(STORMWIND, ReputationRank::Hated)
            .with_war(STORMWIND),
    )
}

pub fn alliance_player(id: u64) -> UnitState {
    UnitState::player(EntityId(id), ALLIANCE_PLAYER, alliance_state()).with_level(60)
}

pub fn horde_player(id: u64) -> UnitState {
    UnitState::player(EntityId(id), HORDE_PLAYER, horde_state()).with_level(60)
}

pub fn creature(id: u64, faction: FactionTemplateId) -> UnitState {
    UnitState::creature(EntityId(id), Some(faction)).with_level(60)
}
