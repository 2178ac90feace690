//! # Items
//!
//! Catalog entries and their classification.

use super::WeatherCondition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scarcity tier of an item, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Normal,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Every tier, most common first.
    pub const ALL: [Rarity; 5] = [
        Rarity::Normal,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Normal => "Normal",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Appearance slot an item can be worn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipSlot {
    Head,
    Body,
    Accessory,
    Background,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 4] = [
        EquipSlot::Head,
        EquipSlot::Body,
        EquipSlot::Accessory,
        EquipSlot::Background,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EquipSlot::Head => "head",
            EquipSlot::Body => "body",
            EquipSlot::Accessory => "accessory",
            EquipSlot::Background => "background",
        }
    }

    /// Looks up a slot by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry in the item catalog.
///
/// Items are reference data: they are created when the catalog is seeded or
/// loaded and never change afterwards.
///
/// # Examples
///
/// ```
/// use skypet::{Item, ItemId, Rarity, WeatherCondition};
///
/// let item = Item::new(7, "Raindrop", Rarity::Normal).with_affinity(WeatherCondition::Rainy);
/// assert_eq!(item.id, ItemId(7));
/// assert!(item.is_material());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Scarcity tier
    pub rarity: Rarity,
    /// Weather this item is themed around, if any
    #[serde(default, rename = "weather")]
    pub affinity: Option<WeatherCondition>,
    /// Slot this item is worn in; `None` for materials
    #[serde(default)]
    pub category: Option<EquipSlot>,
}

impl Item {
    /// Creates an item with no affinity and no equip slot.
    pub fn new(id: u32, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            rarity,
            affinity: None,
            category: None,
        }
    }

    /// Sets the weather affinity.
    pub fn with_affinity(mut self, affinity: WeatherCondition) -> Self {
        self.affinity = Some(affinity);
        self
    }

    /// Sets the equip slot.
    pub fn with_category(mut self, category: EquipSlot) -> Self {
        self.category = Some(category);
        self
    }

    /// Whether this item is a crafting material rather than something worn.
    pub fn is_material(&self) -> bool {
        self.category.is_none()
    }
}
