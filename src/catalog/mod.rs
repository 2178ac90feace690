//! # Catalog Module
//!
//! Immutable item reference data.
//!
//! The catalog is the single source of truth for what items exist. It is
//! seeded once (either from the built-in set or from a JSON file) and then
//! shared read-only by the drop selector, crafting and the pet's wardrobe.
//! The order of items is significant: it is the order the drop selector
//! walks when resolving a random draw.

pub mod item;
mod seed;
pub mod weather;

pub use item::*;
pub use weather::*;

use crate::{SkypetError, SkypetResult};
use std::collections::HashSet;
use std::path::Path;

/// An ordered collection of items with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Creates a catalog, rejecting duplicate ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use skypet::{Item, ItemCatalog, Rarity};
    ///
    /// let catalog = ItemCatalog::new(vec![Item::new(1, "Pebble", Rarity::Normal)]).unwrap();
    /// assert_eq!(catalog.len(), 1);
    ///
    /// let duplicate = vec![
    ///     Item::new(1, "Pebble", Rarity::Normal),
    ///     Item::new(1, "Leaf", Rarity::Normal),
    /// ];
    /// assert!(ItemCatalog::new(duplicate).is_err());
    /// ```
    pub fn new(items: Vec<Item>) -> SkypetResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(SkypetError::InvalidCatalog(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
        }

        Ok(Self { items })
    }

    /// The built-in catalog.
    pub fn seeded() -> Self {
        Self {
            items: seed::seed_items(),
        }
    }

    /// Parses a catalog from a JSON array of items.
    pub fn from_json(json: &str) -> SkypetResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Reads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SkypetResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        log::info!(
            "Loaded {} catalog items from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Serializes the catalog back to the JSON form `from_json` reads.
    pub fn to_json(&self) -> SkypetResult<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up an item by id, failing with `UnknownItem`.
    pub fn require(&self, id: ItemId) -> SkypetResult<&Item> {
        self.get(id).ok_or(SkypetError::UnknownItem(id))
    }

    /// Finds an item by display name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        let name = name.trim();
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Items themed around the given weather.
    pub fn with_affinity(&self, condition: WeatherCondition) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.affinity == Some(condition))
            .collect()
    }

    /// Items of the given rarity tier.
    pub fn by_rarity(&self, rarity: Rarity) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.rarity == rarity)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ItemCatalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
