use crate::state::{
    CreatureTypeFlags, EntityId, FactionTemplateId, FormFlags, MapId, NpcFlags, PetModeFlags,
    PlayerFlags, PlayerState, UnitFlags,
};

/// Kind-specific payload of a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    Player(PlayerState),
    Creature(CreatureState),
}

/// State carried only by non-player units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CreatureState {
    pub type_flags: CreatureTypeFlags,
    /// Present when the creature is somebody's pet.
    pub pet: Option<PetModeFlags>,
    pub civilian: bool,
}

/// Weak back-references to other units, resolved through the entity oracle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitLinks {
    pub owner: Option<EntityId>,
    pub charmer: Option<EntityId>,
    pub summoner: Option<EntityId>,
    /// Unit this one is currently persuading.
    pub persuaded: Option<EntityId>,
}

/// Combat and AI state consulted by the eligibility checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatStatus {
    pub can_enter_combat: bool,
    pub can_initiate_attack: bool,
    pub in_combat: bool,
    pub evading_home: bool,
    pub has_victim: bool,
    /// Feign death that the opponent has not seen through.
    pub feigning_death: bool,
    pub ignores_feign_death: bool,
    pub unattackable_aura: bool,
}

impl Default for CombatStatus {
    fn default() -> Self {
        Self {
            can_enter_combat: true,
            can_initiate_attack: true,
            in_combat: false,
            evading_home: false,
            has_victim: false,
            feigning_death: false,
            ignores_feign_death: false,
            unattackable_aura: false,
        }
    }
}

/// Active shapeshift form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeshiftForm {
    pub form: u32,
    pub flags: FormFlags,
}

/// Snapshot of a unit as seen by the relation engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: EntityId,
    pub kind: UnitKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub faction: Option<FactionTemplateId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: UnitFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub npc_flags: NpcFlags,
    #[cfg_attr(feature = "serde", serde(default = "UnitState::default_level"))]
    pub level: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub map: MapId,
    #[cfg_attr(feature = "serde", serde(default = "UnitState::default_alive"))]
    pub alive: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub links: UnitLinks,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat: CombatStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shapeshift: Option<ShapeshiftForm>,
}

impl UnitState {
    const DEFAULT_LEVEL: u8 = 1;

    #[cfg(feature = "serde")]
    fn default_level() -> u8 {
        Self::DEFAULT_LEVEL
    }

    #[cfg(feature = "serde")]
    fn default_alive() -> bool {
        true
    }

    fn with_kind(id: EntityId, kind: UnitKind, faction: Option<FactionTemplateId>) -> Self {
        Self {
            id,
            kind,
            faction,
            flags: UnitFlags::empty(),
            npc_flags: NpcFlags::empty(),
            level: Self::DEFAULT_LEVEL,
            map: MapId::default(),
            alive: true,
            links: UnitLinks::default(),
            combat: CombatStatus::default(),
            shapeshift: None,
        }
    }

    /// A living player. Players always carry the player-controlled flag.
    pub fn player(id: EntityId, faction: FactionTemplateId, player: PlayerState) -> Self {
        let mut unit = Self::with_kind(id, UnitKind::Player(player), Some(faction));
        unit.flags |= UnitFlags::PLAYER_CONTROLLED;
        unit
    }

    /// A living, uncontrolled creature.
    pub fn creature(id: EntityId, faction: Option<FactionTemplateId>) -> Self {
        Self::with_kind(id, UnitKind::Creature(CreatureState::default()), faction)
    }

    #[must_use]
    pub fn with_flags(mut self, flags: UnitFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_npc_flags(mut self, flags: NpcFlags) -> Self {
        self.npc_flags |= flags;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_map(mut self, map: MapId) -> Self {
        self.map = map;
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: EntityId) -> Self {
        self.links.owner = Some(owner);
        self
    }

    /// Charmed units are player-controlled when their charmer is.
    #[must_use]
    pub fn with_charmer(mut self, charmer: EntityId) -> Self {
        self.links.charmer = Some(charmer);
        self
    }

    #[must_use]
    pub fn with_summoner(mut self, summoner: EntityId) -> Self {
        self.links.summoner = Some(summoner);
        self
    }

    #[must_use]
    pub fn with_persuaded(mut self, target: EntityId) -> Self {
        self.links.persuaded = Some(target);
        self
    }

    #[must_use]
    pub fn with_combat(mut self, combat: CombatStatus) -> Self {
        self.combat = combat;
        self
    }

    #[must_use]
    pub fn with_shapeshift(mut self, form: u32, flags: FormFlags) -> Self {
        self.shapeshift = Some(ShapeshiftForm { form, flags });
        self
    }

    #[must_use]
    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }

    /// Marks a creature as a pet with the given mode flags. No-op on players.
    #[must_use]
    pub fn as_pet(mut self, mode: PetModeFlags) -> Self {
        if let UnitKind::Creature(creature) = &mut self.kind {
            creature.pet = Some(mode);
        }
        self
    }

    /// Adds creature type flags. No-op on players.
    #[must_use]
    pub fn with_type_flags(mut self, flags: CreatureTypeFlags) -> Self {
        if let UnitKind::Creature(creature) = &mut self.kind {
            creature.type_flags |= flags;
        }
        self
    }

    /// Marks a creature as a civilian. No-op on players.
    #[must_use]
    pub fn civilian(mut self) -> Self {
        if let UnitKind::Creature(creature) = &mut self.kind {
            creature.civilian = true;
        }
        self
    }

    // ===== kind =====

    pub fn is_player(&self) -> bool {
        matches!(self.kind, UnitKind::Player(_))
    }

    pub fn is_creature(&self) -> bool {
        matches!(self.kind, UnitKind::Creature(_))
    }

    pub fn as_player(&self) -> Option<&PlayerState> {
        match &self.kind {
            UnitKind::Player(player) => Some(player),
            UnitKind::Creature(_) => None,
        }
    }

    pub fn as_creature(&self) -> Option<&CreatureState> {
        match &self.kind {
            UnitKind::Creature(creature) => Some(creature),
            UnitKind::Player(_) => None,
        }
    }

    // ===== flags =====

    pub fn is_player_controlled(&self) -> bool {
        self.flags.contains(UnitFlags::PLAYER_CONTROLLED)
    }

    pub fn is_pvp(&self) -> bool {
        self.flags.contains(UnitFlags::PVP)
    }

    pub fn is_immune_to_player(&self) -> bool {
        self.flags.contains(UnitFlags::IMMUNE_TO_PLAYER)
    }

    pub fn is_immune_to_npc(&self) -> bool {
        self.flags.contains(UnitFlags::IMMUNE_TO_NPC)
    }

    pub fn is_uninteractible(&self) -> bool {
        self.flags.contains(UnitFlags::UNINTERACTIBLE)
    }

    pub fn is_unattackable(&self) -> bool {
        self.flags.intersects(UnitFlags::UNATTACKABLE)
    }

    pub fn is_persuaded(&self) -> bool {
        self.flags.contains(UnitFlags::PERSUADED)
    }

    pub fn is_mounted(&self) -> bool {
        self.flags.contains(UnitFlags::MOUNT)
    }

    pub fn is_taxi_flying(&self) -> bool {
        self.flags.contains(UnitFlags::TAXI_FLIGHT)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_charmed(&self) -> bool {
        self.links.charmer.is_some()
    }

    /// Engaged in combat from the interaction point of view.
    pub fn is_engaged(&self) -> bool {
        self.flags.contains(UnitFlags::PET_IN_COMBAT) || self.combat.has_victim
    }

    /// Charmer if charmed, otherwise owner.
    pub fn master(&self) -> Option<EntityId> {
        self.links.charmer.or(self.links.owner)
    }

    pub fn is_player_ghost(&self) -> bool {
        self.as_player().is_some_and(PlayerState::is_ghost)
    }

    pub fn is_game_master(&self) -> bool {
        self.player_flag(PlayerFlags::GAME_MASTER)
    }

    pub fn is_visible_to_ghosts(&self) -> bool {
        self.creature_type_flag(CreatureTypeFlags::VISIBLE_TO_GHOSTS)
    }

    pub fn can_interact_while_dead(&self) -> bool {
        self.creature_type_flag(CreatureTypeFlags::INTERACT_WHILE_DEAD)
    }

    /// A pet whose actions are disabled by its mode flags.
    pub fn is_disabled_pet(&self) -> bool {
        self.as_creature()
            .and_then(|creature| creature.pet)
            .is_some_and(|mode| mode.contains(PetModeFlags::DISABLE_ACTIONS))
    }

    pub fn is_civilian(&self) -> bool {
        self.as_creature().is_some_and(|creature| creature.civilian)
    }

    fn player_flag(&self, flag: PlayerFlags) -> bool {
        self.as_player().is_some_and(|player| player.flags.contains(flag))
    }

    fn creature_type_flag(&self, flag: CreatureTypeFlags) -> bool {
        self.as_creature()
            .is_some_and(|creature| creature.type_flags.contains(flag))
    }
}
