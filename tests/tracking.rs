// tests/tracking.rs

mod common;

use biome_compass::core::items::compass::keys::{
    BIOME_DIMENSION_KEY, BIOME_NAME_KEY, BIOME_POS_KEY, BIOME_TRACKED_KEY,
    LODESTONE_DIMENSION_KEY, LODESTONE_POS_KEY, LODESTONE_TRACKED_KEY,
};
use biome_compass::core::items::compass::{LocationCodec, TrackOutcome};
use biome_compass::core::nbt::{BlockPos, Compound, Tag};
use biome_compass::core::stack::Hand;
use common::{FakePlayer, FakeWorld, compass, compass_item, id};

#[test]
fn split_from_untagged_stack_of_five() {
    let item = compass_item();
    let mut world = FakeWorld::new("minecraft:overworld");
    let mut player = FakePlayer::holding(compass(5));

    let outcome = item.tracker().track(
        &mut world,
        &mut player,
        Hand::MainHand,
        BlockPos::new(100, 64, -200),
        Some("Plains"),
    );

    assert_eq!(outcome, TrackOutcome::SplitInserted);
    assert_eq!(player.main_hand.count, 4);
    assert!(player.main_hand.tag().is_none());

    assert_eq!(player.inventory.len(), 1);
    let new = &player.inventory[0];
    assert_eq!(new.count, 1);
    assert_eq!(new.item, player.main_hand.item);

    let tag = new.tag().unwrap();
    assert_eq!(tag.get_str(&BIOME_NAME_KEY), Some("Plains"));
    assert_eq!(
        tag.get(&BIOME_POS_KEY),
        Some(&Tag::Compound(BlockPos::new(100, 64, -200).to_compound()))
    );
    assert_eq!(
        tag.get(&BIOME_DIMENSION_KEY),
        Some(&Tag::String("minecraft:overworld".into()))
    );
    assert!(tag.get_bool(&BIOME_TRACKED_KEY));
    assert_eq!(tag.get(LODESTONE_POS_KEY), tag.get(&BIOME_POS_KEY));
    assert_eq!(tag.get(LODESTONE_DIMENSION_KEY), tag.get(&BIOME_DIMENSION_KEY));
    assert!(tag.get_bool(LODESTONE_TRACKED_KEY));

    assert_eq!(world.sounds.len(), 1);
    assert_eq!(world.sounds[0].0, player.pos);
    assert_eq!(
        world.sounds[0].1.to_string(),
        "minecraft:item.lodestone_compass.lock"
    );
}

#[test]
fn single_compass_is_updated_without_insert() {
    let item = compass_item();
    let mut world = FakeWorld::new("minecraft:the_nether");
    let mut player = FakePlayer::holding(compass(1));

    let outcome = item.tracker().track(
        &mut world,
        &mut player,
        Hand::MainHand,
        BlockPos::new(-8, 40, 16),
        Some("Crimson Forest"),
    );

    assert_eq!(outcome, TrackOutcome::UpdatedInPlace);
    assert_eq!(player.insert_calls, 0);
    assert!(player.inventory.is_empty());
    assert!(player.dropped.is_empty());
    assert_eq!(player.main_hand.count, 1);

    let codec = LocationCodec::default();
    let tag = player.main_hand.tag().unwrap();
    assert_eq!(codec.decode_dimension(tag), Some(id("minecraft:the_nether")));
}

#[test]
fn full_inventory_drops_the_split_compass() {
    let item = compass_item();
    let mut world = FakeWorld::new("minecraft:overworld");
    let mut player = FakePlayer::holding(compass(2));
    player.capacity = 0;

    let outcome = item.tracker().track(
        &mut world,
        &mut player,
        Hand::MainHand,
        BlockPos::new(0, 64, 0),
        Some("Meadow"),
    );

    assert_eq!(outcome, TrackOutcome::SplitDropped);
    assert_eq!(player.insert_calls, 1);
    assert_eq!(player.dropped.len(), 1);
    let (dropped, retain) = &player.dropped[0];
    assert!(!retain);
    assert_eq!(dropped.count, 1);
    assert!(LocationCodec::has_location(dropped.tag().unwrap()));
    assert_eq!(player.main_hand.count, 1);
    assert!(player.main_hand.tag().is_none());
}

#[test]
fn split_copies_are_independent() {
    let item = compass_item();
    let mut world = FakeWorld::new("minecraft:overworld");
    let mut original = Compound::new();
    original.put("owner", "steve");
    let mut player = FakePlayer::holding(compass(3).with_tag(original.clone()));

    item.tracker().track(
        &mut world,
        &mut player,
        Hand::MainHand,
        BlockPos::new(1, 2, 3),
        Some("Taiga"),
    );

    assert_eq!(player.main_hand.tag(), Some(&original));
    assert!(!LocationCodec::has_location(player.main_hand.tag().unwrap()));

    // Editing the new compass after the call leaves the remaining stack alone
    let new = &mut player.inventory[0];
    assert_eq!(new.tag().unwrap().get_str("owner"), Some("steve"));
    new.tag.as_mut().unwrap().put("owner", "alex");
    assert_eq!(player.main_hand.tag().unwrap().get_str("owner"), Some("steve"));

    // And the other way round
    player.main_hand.tag.as_mut().unwrap().remove("owner");
    assert_eq!(player.inventory[0].tag().unwrap().get_str("owner"), Some("alex"));
}

#[test]
fn off_hand_is_used_when_requested() {
    let item = compass_item();
    let mut world = FakeWorld::new("minecraft:overworld");
    let mut player = FakePlayer::holding(compass(1));
    player.off_hand = compass(1);

    item.tracker().track(
        &mut world,
        &mut player,
        Hand::OffHand,
        BlockPos::new(1, 2, 3),
        Some("Beach"),
    );

    assert!(player.main_hand.tag().is_none());
    assert!(LocationCodec::has_location(player.off_hand.tag().unwrap()));
}

#[test]
fn empty_hand_tracks_nothing() {
    let item = compass_item();
    let mut world = FakeWorld::new("minecraft:overworld");
    let mut player = FakePlayer::holding(compass(1));

    let outcome = item.tracker().track(
        &mut world,
        &mut player,
        Hand::OffHand,
        BlockPos::new(1, 2, 3),
        Some("Beach"),
    );

    assert_eq!(outcome, TrackOutcome::NothingHeld);
    assert_eq!(player.insert_calls, 0);
    assert!(player.inventory.is_empty());
    assert!(player.dropped.is_empty());
    assert_eq!(player.off_hand.count, 0);
    assert!(player.off_hand.tag().is_none());
    assert!(player.main_hand.tag().is_none());
    assert!(world.sounds.is_empty());
}
