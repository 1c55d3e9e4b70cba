//! Configuration oracle for exposing server switches to the engine.

/// Provides access to the raw configuration values the relation rules consume.
///
/// Values are passed through verbatim; interpretation (and the fallback for
/// unrecognized modes) belongs to the visibility layer.
pub trait ConfigOracle: Send + Sync {
    /// Whether players of opposing teams may group up.
    fn allow_two_side_interaction_group(&self) -> bool;

    fn fog_of_war_stealth(&self) -> u32;

    fn fog_of_war_health(&self) -> u32;

    fn fog_of_war_stats(&self) -> u32;
}
