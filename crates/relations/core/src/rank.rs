//! Reputation ranks and the two decision thresholds derived from them.

/// Ordered hostility measure between two parties.
///
/// Variants are declared from most hostile to most friendly and the derived
/// `Ord` follows declaration order, so plain comparisons (`<`, `>`) are the
/// thresholds used throughout the engine.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum ReputationRank {
    Hated = 0,
    Hostile = 1,
    Unfriendly = 2,
    #[default]
    Neutral = 3,
    Friendly = 4,
    Honored = 5,
    Revered = 6,
    Exalted = 7,
}

impl ReputationRank {
    /// Rank every entity holds towards itself.
    pub const SELF: Self = Self::Friendly;

    /// Returns true if this rank makes the holder an enemy (below Unfriendly).
    #[inline]
    pub const fn is_enemy(self) -> bool {
        (self as u8) < (Self::Unfriendly as u8)
    }

    /// Returns true if this rank makes the holder a friend (above Neutral).
    #[inline]
    pub const fn is_friend(self) -> bool {
        (self as u8) > (Self::Neutral as u8)
    }

    /// Returns the next friendlier rank, saturating at Exalted.
    pub fn step_up(self) -> Self {
        Self::from_repr(self as u8 + 1).unwrap_or(Self::Exalted)
    }
}
