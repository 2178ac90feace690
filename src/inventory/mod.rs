//! # Inventory Module
//!
//! Per-player item quantities and the walk currency.

use crate::{ItemId, SkypetError, SkypetResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Converts a step count into whole walks.
///
/// # Examples
///
/// ```
/// use skypet::walks_from_steps;
///
/// assert_eq!(walks_from_steps(2500, 1000).unwrap(), 2);
/// assert!(walks_from_steps(2500, 0).is_err());
/// ```
pub fn walks_from_steps(steps: u64, steps_per_walk: u32) -> SkypetResult<u64> {
    if steps_per_walk == 0 {
        return Err(SkypetError::InvalidConfig(
            "steps_per_walk must be positive".to_string(),
        ));
    }
    Ok(steps / u64::from(steps_per_walk))
}

/// A player's owned items and walk balance.
///
/// Quantities are stored as increment-or-create counters: an item is present
/// only while its count is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Spendable walk balance
    walks: u64,
    /// Item counts keyed by id
    items: BTreeMap<ItemId, u32>,
}

impl Inventory {
    /// Creates an empty inventory with the given walk balance.
    pub fn with_walks(walks: u64) -> Self {
        Self {
            walks,
            items: BTreeMap::new(),
        }
    }

    pub fn walks(&self) -> u64 {
        self.walks
    }

    /// Adds walks to the balance, saturating at `u64::MAX`.
    pub fn earn_walks(&mut self, walks: u64) -> u64 {
        self.walks = self.walks.saturating_add(walks);
        self.walks
    }

    /// Deducts walks, leaving the balance untouched if it is too low.
    pub fn spend_walks(&mut self, cost: u64) -> SkypetResult<u64> {
        if cost > self.walks {
            return Err(SkypetError::InsufficientWalks {
                needed: cost,
                available: self.walks,
            });
        }
        self.walks -= cost;
        Ok(self.walks)
    }

    /// Adds copies of an item, creating the entry if needed.
    ///
    /// Returns the new quantity.
    ///
    /// # Examples
    ///
    /// ```
    /// use skypet::{Inventory, ItemId};
    ///
    /// let mut inventory = Inventory::default();
    /// assert_eq!(inventory.add_item(ItemId(4), 1), 1);
    /// assert_eq!(inventory.add_item(ItemId(4), 2), 3);
    /// ```
    pub fn add_item(&mut self, item: ItemId, quantity: u32) -> u32 {
        let count = self.items.entry(item).or_insert(0);
        *count = count.saturating_add(quantity);
        *count
    }

    /// Removes copies of an item. Entries that reach zero are dropped.
    pub fn remove_item(&mut self, item: ItemId, quantity: u32) -> SkypetResult<u32> {
        let available = self.quantity(item);
        if quantity > available {
            return Err(SkypetError::InsufficientItems {
                item,
                needed: quantity,
                available,
            });
        }

        let remaining = available - quantity;
        if remaining == 0 {
            self.items.remove(&item);
        } else {
            self.items.insert(item, remaining);
        }
        Ok(remaining)
    }

    pub fn quantity(&self, item: ItemId) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn owns(&self, item: ItemId) -> bool {
        self.quantity(item) > 0
    }

    /// Owned items and their counts, sorted by id.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.items.iter().map(|(id, count)| (*id, *count))
    }

    /// Number of distinct items owned.
    pub fn distinct_items(&self) -> usize {
        self.items.len()
    }
}
