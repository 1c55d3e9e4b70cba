mod common;

use common::*;
use relations_core::{
    CombatStatus, CorpseState, DynamicObjectState, EntityId, GameObjectState, GroupId, MapId,
    PlayerFlags, SpellSource, UnitFlags, UnitState,
};

#[test]
fn friendly_players_assist_each_other() {
    let mut world = World::new();
    let a = world.add(alliance_player(1));
    let b = world.add(alliance_player(2));
    let h = world.add(horde_player(3));
    let hidden = world.add(alliance_player(4).with_flags(UnitFlags::UNINTERACTIBLE));

    let engine = world.engine();
    let u = |id| world.unit(id);
    assert!(engine.can_assist(u(a), u(b)));
    assert!(!engine.can_assist(u(a), u(h)));
    assert!(!engine.can_assist(u(a), u(hidden)));
}

#[test]
fn grouped_players_assist_across_teams() {
    let mut world = World::new();
    let a = world.add(UnitState::player(
        EntityId(1),
        ALLIANCE_PLAYER,
        alliance_state().with_group(GroupId(4), 0),
    ));
    let h = world.add(UnitState::player(
        EntityId(2),
        HORDE_PLAYER,
        horde_state().with_group(GroupId(4), 1),
    ));

    let engine = world.engine();
    assert!(engine.can_assist(world.unit(a), world.unit(h)));
    assert!(engine.can_assist(world.unit(h), world.unit(a)));
}

#[test]
fn duels_and_free_for_all_block_outside_help() {
    let arbiter = EntityId(300);
    let mut world = World::new();
    let bystander = world.add(alliance_player(1));
    let duelist = world.add(UnitState::player(
        EntityId(2),
        ALLIANCE_PLAYER,
        alliance_state().with_duel(arbiter, 1),
    ));
    let second = world.add(UnitState::player(
        EntityId(3),
        ALLIANCE_PLAYER,
        alliance_state().with_duel(arbiter, 1),
    ));
    let brawler = world.add(UnitState::player(
        EntityId(4),
        ALLIANCE_PLAYER,
        alliance_state().with_flags(PlayerFlags::FFA_PVP),
    ));

    let engine = world.engine();
    let u = |id| world.unit(id);
    assert!(!engine.can_assist(u(bystander), u(duelist)));
    assert!(engine.can_assist(u(second), u(duelist)));
    assert!(!engine.can_assist(u(bystander), u(brawler)));
    assert!(engine.can_assist(u(brawler), u(bystander)));
}

#[test]
fn players_only_assist_creatures_showing_pvp() {
    let mut world = World::new();
    let a = world.add(alliance_player(1));
    let guard = world.add(creature(2, STORMWIND_GUARD));
    let flagged = world.add(creature(3, STORMWIND_GUARD).with_flags(UnitFlags::PVP));
    let other_guard = world.add(creature(4, STORMWIND_GUARD));

    let engine = world.engine();
    let u = |id| world.unit(id);
    assert!(!engine.can_assist(u(a), u(guard)));
    assert!(engine.can_assist(u(a), u(flagged)));
    assert!(engine.can_assist(u(other_guard), u(guard)));
    assert!(engine.can_assist(u(guard), u(a)));
}

#[test]
fn pvp_ui_follows_the_master() {
    let mut world = World::new();
    let owner = world.add(alliance_player(1).with_flags(UnitFlags::PVP));
    let pet = world.add(
        creature(2, ALLIANCE_PLAYER)
            .with_flags(UnitFlags::PLAYER_CONTROLLED)
            .with_owner(owner),
    );
    let shielded = world.add(
        creature(3, ALLIANCE_PLAYER)
            .with_flags(UnitFlags::PLAYER_CONTROLLED | UnitFlags::IMMUNE_TO_PLAYER)
            .with_owner(owner),
    );
    let stray = world.add(
        creature(4, ALLIANCE_PLAYER)
            .with_flags(UnitFlags::PVP)
            .with_owner(EntityId(99)),
    );
    let plain = world.add(alliance_player(5));

    let engine = world.engine();
    let u = |id| world.unit(id);
    assert!(engine.is_pvp_ui(u(pet)));
    assert!(!engine.is_pvp_ui(u(shielded)));
    assert!(engine.is_pvp_ui(u(stray)));
    assert!(engine.is_pvp_ui(u(owner)));
    assert!(!engine.is_pvp_ui(u(plain)));
}

#[test]
fn corpses_are_assisted_when_friendly() {
    let mut world = World::new();
    let a = world.add(alliance_player(1));

    let engine = world.engine();
    let a = world.unit(a);
    let ally = CorpseState::new(EntityId(10), None, Some(ALLIANCE_PLAYER));
    let foe = CorpseState::new(EntityId(11), None, Some(HORDE_PLAYER));
    let bare = CorpseState::new(EntityId(12), None, None);
    assert!(engine.can_assist_corpse(a, &ally));
    assert!(!engine.can_assist_corpse(a, &foe));
    assert!(!engine.can_assist_corpse(a, &bare));
}

#[test]
fn cooperation_needs_same_group_mask_and_peace() {
    let arbiter = EntityId(800);
    let mut world = World::new();
    let g1 = world.add(creature(1, STORMWIND_GUARD));
    let g2 = world.add(creature(2, STORMWIND_GUARD));
    let wolf = world.add(creature(3, MONSTER));
    let wolf2 = world.add(creature(4, MONSTER));
    let a = world.add(alliance_player(5));
    let b = world.add(alliance_player(6));
    let d1 = world.add(UnitState::player(
        EntityId(7),
        ALLIANCE_PLAYER,
        alliance_state().with_duel(arbiter, 1),
    ));
    let d2 = world.add(UnitState::player(
        EntityId(8),
        ALLIANCE_PLAYER,
        alliance_state().with_duel(arbiter, 2),
    ));
    let thrall = world.add(creature(9, STORMWIND_GUARD).with_charmer(wolf));
    let blank = world.add(UnitState::creature(EntityId(10), None));

    let engine = world.engine();
    let u = |id| world.unit(id);
    assert!(!engine.can_cooperate(u(g1), u(g1)));
    assert!(engine.can_cooperate(u(g1), u(g2)));
    assert!(engine.can_cooperate(u(wolf), u(wolf2)));
    assert!(engine.can_cooperate(u(a), u(b)));
    assert!(!engine.can_cooperate(u(d1), u(d2)));
    // Different group masks.
    assert!(!engine.can_cooperate(u(g1), u(a)));
    assert!(!engine.can_cooperate(u(g1), u(thrall)));
    assert!(!engine.can_cooperate(u(thrall), u(g1)));
    assert!(!engine.can_cooperate(u(blank), u(g1)));
}

#[test]
fn joining_an_attack_needs_combat_readiness() {
    let mut world = World::new();
    let guard = world.add(creature(1, STORMWIND_GUARD));
    let wolf = world.add(creature(2, MONSTER));
    let a = world.add(alliance_player(3));

    let pacified = world.add(creature(4, STORMWIND_GUARD).with_combat(CombatStatus {
        can_enter_combat: false,
        ..CombatStatus::default()
    }));
    let passive = world.add(creature(5, STORMWIND_GUARD).with_combat(CombatStatus {
        can_initiate_attack: false,
        ..CombatStatus::default()
    }));
    let playing_dead = world.add(creature(6, STORMWIND_GUARD).with_combat(CombatStatus {
        feigning_death: true,
        ..CombatStatus::default()
    }));
    let warded = world.add(creature(7, STORMWIND_GUARD).with_combat(CombatStatus {
        unattackable_aura: true,
        ..CombatStatus::default()
    }));

    let engine = world.engine();
    let u = |id| world.unit(id);
    assert!(engine.can_join_in_attacking(u(guard), u(wolf)));
    assert!(!engine.can_join_in_attacking(u(guard), u(a)));
    for id in [pacified, passive, playing_dead, warded] {
        assert!(!engine.can_join_in_attacking(u(id), u(wolf)), "{id}");
    }
}

#[test]
fn instances_only_ask_whether_the_helper_can_join() {
    let mut world = World::new();
    let ally = world.add(creature(1, STORMWIND_GUARD));
    let wolf = world.add(creature(2, MONSTER));
    let h = world.add(horde_player(3));
    let idle = world.add(creature(10, STORMWIND_GUARD));
    let busy = world.add(creature(11, STORMWIND_GUARD).with_combat(CombatStatus {
        in_combat: true,
        ..CombatStatus::default()
    }));
    let dungeon_busy = world.add(
        creature(12, STORMWIND_GUARD)
            .with_map(DUNGEON)
            .with_combat(CombatStatus {
                in_combat: true,
                ..CombatStatus::default()
            }),
    );
    let dungeon_idle = world.add(creature(13, STORMWIND_GUARD).with_map(DUNGEON));
    let uncharted = world.add(creature(14, STORMWIND_GUARD).with_map(MapId(999)));

    let engine = world.engine();
    let u = |id| world.unit(id);
    assert!(engine.can_assist_in_combat_against(u(idle), u(ally), u(wolf)));
    assert!(!engine.can_assist_in_combat_against(u(busy), u(ally), u(wolf)));
    assert!(engine.can_assist_in_combat_against(u(dungeon_busy), u(ally), u(wolf)));
    // Outside instances the helped unit must be assistable.
    assert!(!engine.can_assist_in_combat_against(u(idle), u(h), u(wolf)));
    assert!(engine.can_assist_in_combat_against(u(dungeon_idle), u(h), u(wolf)));
    assert!(!engine.can_assist_in_combat_against(u(uncharted), u(h), u(wolf)));
}

#[test]
fn helpful_spells_follow_the_caster() {
    let mut world = World::new();
    let a = world.add(alliance_player(1));
    let b = world.add(alliance_player(2));
    let h = world.add(horde_player(3));
    let guard = world.add(creature(4, STORMWIND_GUARD));
    let wolf = world.add(creature(5, MONSTER));
    let banner = GameObjectState::new(EntityId(10)).with_faction(ALLIANCE_PLAYER);
    let owned = GameObjectState::new(EntityId(11)).with_owner(a);
    let area = DynamicObjectState::new(EntityId(12), Some(a));
    let fizzled = DynamicObjectState::new(EntityId(13), None);
    world.add_object(banner.clone());
    world.add_object(owned.clone());
    world.add_dynamic(area.clone());
    world.add_dynamic(fizzled.clone());

    let engine = world.engine();
    let u = |id| world.unit(id);

    assert_eq!(engine.can_assist_spell(u(a), u(b), None), engine.can_assist(u(a), u(b)));

    // Ownerless objects help players unless hostile, creatures only if friendly.
    assert!(engine.object_can_assist_spell(&banner, u(b), None));
    assert!(!engine.object_can_assist_spell(&banner, u(h), None));
    assert!(engine.object_can_assist_spell(&banner, u(guard), None));
    assert!(!engine.object_can_assist_spell(&banner, u(wolf), None));

    assert!(engine.object_can_assist_spell(&owned, u(b), None));
    assert!(!engine.object_can_assist_spell(&owned, u(h), None));
    assert!(engine.dynamic_object_can_assist_spell(&area, u(b), None));
    assert!(!engine.dynamic_object_can_assist_spell(&area, u(h), None));
    assert!(!engine.dynamic_object_can_assist_spell(&fizzled, u(b), None));

    assert!(engine.can_assist_spell_from(SpellSource::Unit(u(a)), u(b), None));
    assert!(engine.can_assist_spell_from(SpellSource::GameObject(&banner), u(guard), None));
    assert!(!engine.can_assist_spell_from(SpellSource::DynamicObject(&fizzled), u(a), None));
}
