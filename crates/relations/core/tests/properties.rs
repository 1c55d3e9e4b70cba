mod common;

use common::*;
use proptest::prelude::*;
use relations_core::{
    EntityId, FactionGroupMask, FactionId, FactionTemplate, FactionTemplateId, ReputationRank,
    UnitFlags, UnitState, is_trivial_level_difference, reaction_between_templates,
};

fn rank() -> impl Strategy<Value = ReputationRank> {
    (0u8..8).prop_map(|raw| ReputationRank::from_repr(raw).expect("rank in range"))
}

fn mask() -> impl Strategy<Value = FactionGroupMask> {
    (0u32..16).prop_map(FactionGroupMask::from_bits_truncate)
}

fn fixture_template() -> impl Strategy<Value = FactionTemplateId> {
    prop::sample::select(vec![
        ALLIANCE_PLAYER,
        HORDE_PLAYER,
        STORMWIND_GUARD,
        ORGRIMMAR_GRUNT,
        BOOTY_BAY,
        MONSTER,
        CRITTER,
    ])
}

proptest! {
    #[test]
    fn enmity_takes_precedence_over_friendship(
        a_group in mask(), a_friend in mask(), a_enemy in mask(),
        b_group in mask(), b_friend in mask(), b_enemy in mask(),
    ) {
        let a = FactionTemplate::new(FactionTemplateId(1), FactionId(1))
            .with_masks(a_group, a_friend, a_enemy);
        let b = FactionTemplate::new(FactionTemplateId(2), FactionId(2))
            .with_masks(b_group, b_friend, b_enemy);

        let rank = reaction_between_templates(&a, &b);
        if b_group.intersects(a_enemy) {
            prop_assert_eq!(rank, ReputationRank::Hostile);
        } else if b_group.intersects(a_friend) || a_group.intersects(b_friend) {
            prop_assert_eq!(rank, ReputationRank::Friendly);
        } else {
            prop_assert_eq!(rank, ReputationRank::Neutral);
        }
    }

    #[test]
    fn units_are_always_friendly_to_themselves(
        template in fixture_template(),
        controlled in any::<bool>(),
        pvp in any::<bool>(),
    ) {
        let mut flags = UnitFlags::empty();
        flags.set(UnitFlags::PLAYER_CONTROLLED, controlled);
        flags.set(UnitFlags::PVP, pvp);

        let mut world = World::new();
        let id = world.add(UnitState::creature(EntityId(1), Some(template)).with_flags(flags));
        let engine = world.engine();
        let unit = world.unit(id);
        prop_assert_eq!(engine.reaction_to(unit, unit), ReputationRank::Friendly);
        prop_assert!(!engine.can_cooperate(unit, unit));
    }

    #[test]
    fn forced_ranks_are_reported_verbatim(forced in rank()) {
        let mut world = World::new();
        let mut state = horde_state();
        state.reputation.force_rank(STORMWIND, forced);
        let h = world.add(UnitState::player(EntityId(1), HORDE_PLAYER, state));
        let guard = world.add(creature(2, STORMWIND_GUARD));

        let engine = world.engine();
        let (h, guard) = (world.unit(h), world.unit(guard));
        prop_assert_eq!(engine.reaction_to(guard, h), forced);
        prop_assert_eq!(engine.reaction_to(h, guard), forced);
        prop_assert_eq!(engine.is_enemy(guard, h), forced < ReputationRank::Unfriendly);
        prop_assert_eq!(engine.is_friend(guard, h), forced > ReputationRank::Neutral);
        prop_assert_eq!(engine.can_attack(guard, h), !forced.is_friend());
    }

    #[test]
    fn creature_attacks_are_symmetric(a in fixture_template(), b in fixture_template()) {
        let mut world = World::new();
        let x = world.add(creature(1, a));
        let y = world.add(creature(2, b));

        let engine = world.engine();
        let (x, y) = (world.unit(x), world.unit(y));
        prop_assert_eq!(engine.can_attack(x, y), engine.can_attack(y, x));
    }

    #[test]
    fn triviality_is_monotonic(pov in 1u8..=80, target in 1u8..=80) {
        if is_trivial_level_difference(pov, target) {
            prop_assert!(is_trivial_level_difference(pov, target - 1));
            prop_assert!(is_trivial_level_difference(pov.saturating_add(1), target));
        }
    }
}
