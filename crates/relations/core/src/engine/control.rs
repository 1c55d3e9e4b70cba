//! Controlling-player resolution.
//!
//! Every combatant answers to at most one player: itself if it is a player,
//! otherwise whoever sits at the end of its master chain. Links are ids
//! resolved through the entity oracle; the walk is capped at
//! [`RelationsConfig::MAX_CONTROL_DEPTH`] hops.

use tracing::warn;

use crate::config::RelationsConfig;
use crate::engine::RelationEngine;
use crate::state::{EntityId, PlayerState, UnitState};

/// Which link a unit's controller is resolved through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlView {
    /// Charmer if charmed, else owner. Reflects who commands the unit now.
    #[default]
    Effective,
    /// Owner only, ignoring charms. The perspective the unit's own UI shows.
    Permanent,
}

impl ControlView {
    /// `ignore_charms` flag as used by the group, guild and team queries.
    pub const fn from_ignore_charms(ignore_charms: bool) -> Self {
        if ignore_charms {
            Self::Permanent
        } else {
            Self::Effective
        }
    }

    fn link(self, unit: &UnitState) -> Option<EntityId> {
        match self {
            Self::Effective => unit.master(),
            Self::Permanent => unit.links.owner,
        }
    }
}

/// A player unit together with its player state.
#[derive(Clone, Copy, Debug)]
pub struct ControllingPlayer<'u> {
    pub unit: &'u UnitState,
    pub player: &'u PlayerState,
}

impl ControllingPlayer<'_> {
    pub fn id(&self) -> EntityId {
        self.unit.id
    }

    pub fn is_same(&self, other: &ControllingPlayer<'_>) -> bool {
        self.unit.id == other.unit.id
    }
}

impl<'a> RelationEngine<'a> {
    /// Resolves the player ultimately controlling `unit`.
    ///
    /// A unit with no link is its own controller if it is a player. A dangling
    /// link, or a chain ending at a non-player, yields `None`.
    pub fn controlling_player<'u>(
        &self,
        unit: &'u UnitState,
        view: ControlView,
    ) -> Option<ControllingPlayer<'u>>
    where
        'a: 'u,
    {
        let mut current = unit;
        for _ in 0..RelationsConfig::MAX_CONTROL_DEPTH {
            let Some(link) = view.link(current) else {
                return as_controller(current);
            };
            let master: &'u UnitState = self.env.entities().unit(link)?;
            if master.is_player() {
                return as_controller(master);
            }
            current = master;
        }

        warn!(
            unit = %unit.id,
            depth = RelationsConfig::MAX_CONTROL_DEPTH,
            "control chain did not terminate, treating unit as uncontrolled"
        );
        None
    }

    /// Effective controlling player.
    pub fn controller<'u>(&self, unit: &'u UnitState) -> Option<ControllingPlayer<'u>>
    where
        'a: 'u,
    {
        self.controlling_player(unit, ControlView::Effective)
    }
}

fn as_controller(unit: &UnitState) -> Option<ControllingPlayer<'_>> {
    unit.as_player().map(|player| ControllingPlayer { unit, player })
}
