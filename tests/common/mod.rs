// tests/common/mod.rs
#![allow(dead_code)]

use biome_compass::core::config::CompassConfig;
use biome_compass::core::host::{Player, SelectionUi, SoundEvent, World};
use biome_compass::core::identifier::{DimensionKey, Identifier};
use biome_compass::core::items::compass::BiomeCompassItem;
use biome_compass::core::nbt::BlockPos;
use biome_compass::core::stack::{Hand, ItemStack};

pub fn id(s: &str) -> Identifier {
    Identifier::parse(s).unwrap()
}

pub fn compass_item() -> BiomeCompassItem {
    BiomeCompassItem::new(&CompassConfig::default())
}

pub fn compass(count: u32) -> ItemStack {
    ItemStack::new(id("biomecompass:biome_compass"), count)
}

pub struct FakeWorld {
    pub dimension: DimensionKey,
    pub sounds: Vec<(BlockPos, SoundEvent)>,
}

impl FakeWorld {
    pub fn new(dimension: &str) -> Self {
        Self {
            dimension: id(dimension),
            sounds: Vec::new(),
        }
    }
}

impl World for FakeWorld {
    fn registry_key(&self) -> DimensionKey {
        self.dimension.clone()
    }

    fn play_sound(&mut self, at: BlockPos, sound: &SoundEvent) {
        self.sounds.push((at, sound.clone()));
    }
}

pub struct FakePlayer {
    pub pos: BlockPos,
    pub creative: bool,
    pub sneaking: bool,
    pub main_hand: ItemStack,
    pub off_hand: ItemStack,
    pub inventory: Vec<ItemStack>,
    pub capacity: usize,
    pub insert_calls: usize,
    pub dropped: Vec<(ItemStack, bool)>,
    pub teleports: Vec<(f64, f64, f64)>,
}

impl FakePlayer {
    pub fn holding(stack: ItemStack) -> Self {
        Self {
            pos: BlockPos::new(3, 70, 4),
            creative: false,
            sneaking: false,
            main_hand: stack,
            off_hand: ItemStack::new(id("minecraft:air"), 0),
            inventory: Vec::new(),
            capacity: 36,
            insert_calls: 0,
            dropped: Vec::new(),
            teleports: Vec::new(),
        }
    }
}

impl Player for FakePlayer {
    fn block_pos(&self) -> BlockPos {
        self.pos
    }

    fn is_creative(&self) -> bool {
        self.creative
    }

    fn is_sneaking(&self) -> bool {
        self.sneaking
    }

    fn stack_in_hand(&mut self, hand: Hand) -> &mut ItemStack {
        match hand {
            Hand::MainHand => &mut self.main_hand,
            Hand::OffHand => &mut self.off_hand,
        }
    }

    fn insert_stack(&mut self, stack: ItemStack) -> Result<(), ItemStack> {
        self.insert_calls += 1;
        if self.inventory.len() >= self.capacity {
            return Err(stack);
        }
        self.inventory.push(stack);
        Ok(())
    }

    fn drop_item(&mut self, stack: ItemStack, retain_ownership: bool) {
        self.dropped.push((stack, retain_ownership));
    }

    fn request_teleport(&mut self, x: f64, y: f64, z: f64) {
        self.teleports.push((x, y, z));
    }
}

#[derive(Default)]
pub struct RecordingUi {
    pub opened: Vec<(usize, Hand)>,
}

impl SelectionUi for RecordingUi {
    fn open(&mut self, initial_index: usize, hand: Hand) {
        self.opened.push((initial_index, hand));
    }
}
