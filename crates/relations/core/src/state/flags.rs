use bitflags::bitflags;

bitflags! {
    /// Live unit flags read by the relation rules.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct UnitFlags: u32 {
        const SPAWNING         = 1 << 0;
        const PLAYER_CONTROLLED = 1 << 3;
        const NOT_ATTACKABLE   = 1 << 7;
        const IMMUNE_TO_PLAYER = 1 << 8;
        const IMMUNE_TO_NPC    = 1 << 9;
        const PVP              = 1 << 12;
        const PET_IN_COMBAT    = 1 << 19;
        const TAXI_FLIGHT      = 1 << 20;
        const PERSUADED        = 1 << 23;
        const UNINTERACTIBLE   = 1 << 25;
        const MOUNT            = 1 << 27;
        const UNTARGETABLE     = 1 << 30;

        /// Any of these on a target blocks every attack.
        const UNATTACKABLE = Self::SPAWNING.bits()
            | Self::NOT_ATTACKABLE.bits()
            | Self::UNTARGETABLE.bits()
            | Self::TAXI_FLIGHT.bits()
            | Self::UNINTERACTIBLE.bits();
    }
}

bitflags! {
    /// Player-only flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PlayerFlags: u32 {
        const GAME_MASTER   = 1 << 3;
        const GHOST         = 1 << 4;
        const FFA_PVP       = 1 << 7;
        const CONTESTED_PVP = 1 << 8;
    }
}

bitflags! {
    /// Services a unit offers; any bit makes it interactable.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct NpcFlags: u32 {
        const GOSSIP        = 1 << 0;
        const QUEST_GIVER   = 1 << 1;
        const VENDOR        = 1 << 2;
        const FLIGHT_MASTER = 1 << 3;
        const TRAINER       = 1 << 4;
        const SPIRIT_HEALER = 1 << 5;
        const INNKEEPER     = 1 << 7;
        const BANKER        = 1 << 8;
    }
}

bitflags! {
    /// Static creature template flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct CreatureTypeFlags: u32 {
        const INTERACT_WHILE_DEAD = 1 << 7;
        const VISIBLE_TO_GHOSTS   = 1 << 9;
    }
}

bitflags! {
    /// Pet behaviour mode.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PetModeFlags: u32 {
        const DISABLE_ACTIONS = 1 << 27;
    }
}

bitflags! {
    /// Shapeshift form permissions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct FormFlags: u32 {
        const CAN_NPC_INTERACT = 1 << 5;
    }
}
