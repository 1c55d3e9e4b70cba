//! Read-only relation rules shared by combat, spell targeting and AI.
//!
//! `relations-core` decides, for any pair of simulated entities, whether they
//! are hostile, friendly or neutral and whether one may attack, assist,
//! cooperate with or interact with the other. It never mutates state: faction
//! tables, entity flags and group membership are owned by the host and read
//! through the oracles in [`env`]. All queries are exposed on
//! [`engine::RelationEngine`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod rank;
pub mod state;

pub use config::RelationsConfig;
pub use engine::{
    ControlView, ControllingPlayer, HealthVisibility, Reaction, RelationEngine,
    RestrictionOverrides, SpellAttributes, SpellInfo, SpellSource, StatsVisibility,
    StealthVisibility, gray_level, is_trivial_level_difference, reaction_between_templates,
};
pub use env::{
    ConfigOracle, EntityOracle, FactionEntry, FactionGroupMask, FactionOracle, FactionStore,
    FactionStoreBuilder, FactionTemplate, FactionTemplateFlags, MapKind, MapOracle, MapTable,
    RelationEnv, TableError,
};
pub use error::{ErrorSeverity, RelationsError};
pub use rank::ReputationRank;
pub use state::{
    CombatStatus, CorpseState, CreatureState, CreatureTypeFlags, DuelState, DynamicObjectState,
    EntityId, EntityRef, EntityRegistry, FactionId, FactionTemplateId, FormFlags,
    GameObjectState, GroupId, GroupMembership, GuildId, MapId, NpcFlags, PetModeFlags,
    PlayerFlags, PlayerState, RegistryError, ReputationBook, ShapeshiftForm, Team, UnitFlags,
    UnitKind, UnitLinks, UnitState,
};
