//! Loads the shipped data directory and runs relation queries over it.

use std::fs;
use std::path::PathBuf;

use relations_content::{ContentFactory, FactionLoader};
use relations_core::{
    EntityId, EntityOracle, FactionOracle, FactionTemplateId, ReputationRank,
    reaction_between_templates,
};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn shipped_content_loads() {
    let factory = ContentFactory::new(data_dir());
    let content = factory.load_content().expect("shipped content is valid");

    assert_eq!(content.factions.template_count(), 10);
    assert_eq!(content.factions.faction_count(), 8);
    assert_eq!(content.maps.len(), 7);
    assert!(!content.config.allow_two_side_interaction_group);
}

#[test]
fn named_enemies_are_hostile_both_ways() {
    let store = FactionLoader::load(&data_dir().join("factions.ron")).expect("factions");
    let goblins = store.template(FactionTemplateId(120)).expect("booty bay");
    let pirates = store.template(FactionTemplateId(119)).expect("bloodsail");

    assert_eq!(reaction_between_templates(goblins, pirates), ReputationRank::Hostile);
    assert_eq!(reaction_between_templates(pirates, goblins), ReputationRank::Hostile);
}

#[test]
fn border_skirmish_relations() {
    let factory = ContentFactory::new(data_dir());
    let content = factory.load_content().expect("content");
    let entities = factory.load_scenario("border_skirmish").expect("scenario");
    assert_eq!(entities.len(), 10);

    let engine = content.engine(&entities);
    let unit = |id| entities.unit(EntityId(id)).expect("scenario unit");
    let (human, orc, wolf_pet, guard, merchant, wolf) =
        (unit(1), unit(2), unit(3), unit(10), unit(11), unit(12));

    assert_eq!(engine.reaction_to(guard, orc), ReputationRank::Hated);
    assert_eq!(engine.reaction_to(orc, guard), ReputationRank::Hostile);
    assert!(engine.can_attack(human, orc));
    assert!(!engine.can_attack(orc, human));
    assert!(engine.can_attack(human, wolf_pet));
    assert!(engine.can_interact(human, merchant));
    assert!(!engine.can_interact(orc, guard));
    assert!(engine.can_attack_on_sight(wolf, human));
    assert!(engine.is_trivial_for_target(wolf, human));
    assert!(!engine.is_fog_of_war_visible_stats(wolf_pet, orc));

    assert_eq!(
        engine.reaction_between(EntityId(1), EntityId(20)),
        Ok(ReputationRank::Hostile)
    );
    assert_eq!(
        engine.reaction_between(EntityId(40), EntityId(12)),
        Ok(ReputationRank::Hostile)
    );
    assert_eq!(
        engine.reaction_between(EntityId(30), EntityId(2)),
        Ok(ReputationRank::Hated)
    );
    assert_eq!(
        engine.reaction_between(EntityId(31), EntityId(1)),
        engine.reaction_between(EntityId(2), EntityId(1))
    );
}

#[test]
fn config_overrides_from_a_custom_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::copy(data_dir().join("factions.ron"), dir.path().join("factions.ron")).expect("copy");
    fs::copy(data_dir().join("maps.ron"), dir.path().join("maps.ron")).expect("copy");
    fs::write(
        dir.path().join("config.toml"),
        "allow_two_side_interaction_group = true\nfog_of_war_health = 2\n",
    )
    .expect("write config");

    let content = ContentFactory::new(dir.path())
        .load_content()
        .expect("content");
    assert!(content.config.allow_two_side_interaction_group);
    assert_eq!(content.config.fog_of_war_health, 2);
    assert_eq!(content.config.fog_of_war_stats, 0);
}

#[test]
fn broken_catalogs_fail_to_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("factions.ron"),
        "(templates: [(id: 1, faction: 1, friend_factions: [0])])",
    )
    .expect("write catalog");

    let err = ContentFactory::new(dir.path())
        .load_factions()
        .expect_err("zero faction link");
    assert!(err.to_string().contains("Invalid faction catalog (fatal)"));
}
