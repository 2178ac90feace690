//! # Seed Catalog
//!
//! The built-in item set shipped with the game. Ids are stable: saved
//! inventories and the seeded recipe book refer to them.

use super::{EquipSlot, Item, Rarity, WeatherCondition};

use EquipSlot::*;
use Rarity::*;
use WeatherCondition::*;

pub(crate) fn seed_items() -> Vec<Item> {
    vec![
        // Materials
        Item::new(1, "Pebble", Normal),
        Item::new(2, "Leaf", Normal),
        Item::new(3, "Sunbeam Shard", Normal).with_affinity(Sunny),
        Item::new(4, "Raindrop", Normal).with_affinity(Rainy),
        Item::new(5, "Snowflake", Normal).with_affinity(Snowy),
        Item::new(6, "Cloud Puff", Normal).with_affinity(Cloudy),
        Item::new(7, "Breeze Feather", Uncommon).with_affinity(Windy),
        Item::new(8, "Starlight Dust", Uncommon).with_affinity(Night),
        Item::new(9, "Spark Crystal", Rare).with_affinity(Thunderstorm),
        Item::new(10, "Clear Quartz", Uncommon).with_affinity(Clear),
        // Wearables
        Item::new(11, "Straw Hat", Uncommon)
            .with_affinity(Sunny)
            .with_category(Head),
        Item::new(12, "Umbrella Hat", Uncommon)
            .with_affinity(Rainy)
            .with_category(Head),
        Item::new(13, "Knit Beanie", Uncommon)
            .with_affinity(Snowy)
            .with_category(Head),
        Item::new(14, "Raincoat", Rare)
            .with_affinity(Rainy)
            .with_category(Body),
        Item::new(15, "Striped Scarf", Uncommon)
            .with_affinity(Windy)
            .with_category(Accessory),
        Item::new(16, "Lightning Pin", Epic)
            .with_affinity(Thunderstorm)
            .with_category(Accessory),
        Item::new(17, "Starry Sky Backdrop", Epic)
            .with_affinity(Night)
            .with_category(Background),
        Item::new(18, "Rainbow Backdrop", Legendary)
            .with_affinity(Rainy)
            .with_category(Background),
        Item::new(19, "Golden Sun Crown", Legendary)
            .with_affinity(Sunny)
            .with_category(Head),
        Item::new(20, "Aurora Cloak", Legendary)
            .with_affinity(Snowy)
            .with_category(Body),
        Item::new(21, "Plain Tee", Normal).with_category(Body),
        Item::new(22, "Cloud Pillow", Rare)
            .with_affinity(Cloudy)
            .with_category(Accessory),
        Item::new(23, "Meadow Backdrop", Normal).with_category(Background),
    ]
}
