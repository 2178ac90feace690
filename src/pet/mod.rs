//! # Pet Module
//!
//! The pet's identity, its wardrobe, and its weather-driven mood.

pub mod mood;

pub use mood::*;

use crate::{EquipSlot, Inventory, Item, ItemId, SkypetError, SkypetResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A player's pet.
///
/// # Examples
///
/// ```
/// use skypet::Pet;
///
/// let pet = Pet::new("Nimbus".to_string());
/// assert_eq!(pet.name, "Nimbus");
/// assert!(pet.equipped.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique identifier
    pub id: Uuid,
    /// Name chosen by the player
    pub name: String,
    /// Worn items keyed by slot
    #[serde(default)]
    pub equipped: BTreeMap<EquipSlot, ItemId>,
}

impl Pet {
    /// Creates a pet wearing nothing.
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            equipped: BTreeMap::new(),
        }
    }

    /// Puts on an owned item, returning whatever it replaced.
    pub fn equip(&mut self, item: &Item, inventory: &Inventory) -> SkypetResult<Option<ItemId>> {
        let slot = item.category.ok_or(SkypetError::NotEquippable(item.id))?;

        if !inventory.owns(item.id) {
            return Err(SkypetError::InsufficientItems {
                item: item.id,
                needed: 1,
                available: 0,
            });
        }

        let previous = self.equipped.insert(slot, item.id);
        log::info!("{} now wears {} ({})", self.name, item.name, slot);
        Ok(previous)
    }

    /// Takes off whatever is in a slot.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemId> {
        self.equipped.remove(&slot)
    }

    /// Takes off every worn item the inventory no longer holds.
    ///
    /// Returns the removed item ids.
    pub fn release_unowned(&mut self, inventory: &Inventory) -> Vec<ItemId> {
        let mut released = Vec::new();
        self.equipped.retain(|_, id| {
            let owned = inventory.owns(*id);
            if !owned {
                released.push(*id);
            }
            owned
        });
        if !released.is_empty() {
            log::info!("{} took off {} used-up items", self.name, released.len());
        }
        released
    }

    pub fn equipped_in(&self, slot: EquipSlot) -> Option<ItemId> {
        self.equipped.get(&slot).copied()
    }
}

impl Default for Pet {
    fn default() -> Self {
        Self::new("Nimbus".to_string())
    }
}
