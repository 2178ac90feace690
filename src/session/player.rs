//! # Player State
//!
//! Everything persisted for one player between sessions.

use crate::{Inventory, Item, Pet, Rarity, SkypetResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Running totals of a player's activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStatistics {
    /// Items received from draws
    pub draws: u64,
    /// Legendary items received from draws
    pub legendary_draws: u64,
    /// Successful crafts
    pub items_crafted: u64,
    /// Steps reported
    pub steps_recorded: u64,
    /// Walks earned from steps
    pub walks_earned: u64,
}

impl PlayerStatistics {
    pub fn record_draw(&mut self, item: &Item) {
        self.draws += 1;
        if item.rarity == Rarity::Legendary {
            self.legendary_draws += 1;
        }
    }
}

/// A player's saved state: inventory, pet and progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub inventory: Inventory,
    pub pet: Pet,
    /// Steps not yet converted into a whole walk
    #[serde(default)]
    pub pending_steps: u64,
    #[serde(default)]
    pub statistics: PlayerStatistics,
}

impl PlayerState {
    /// A new player with a fresh pet.
    pub fn new(starting_walks: u64) -> Self {
        Self {
            inventory: Inventory::with_walks(starting_walks),
            pet: Pet::default(),
            pending_steps: 0,
            statistics: PlayerStatistics::default(),
        }
    }

    /// Serializes the state to JSON.
    pub fn save_to_json(&self) -> SkypetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads the state from JSON.
    pub fn load_from_json(json: &str) -> SkypetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the state to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> SkypetResult<()> {
        std::fs::write(path, self.save_to_json()?)?;
        Ok(())
    }

    /// Reads the state from a file.
    pub fn load(path: impl AsRef<Path>) -> SkypetResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::load_from_json(&contents)
    }

    /// Reads the state from a file, or starts a new player if there is none.
    pub fn load_or_new(path: impl AsRef<Path>, starting_walks: u64) -> SkypetResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("No save at {}; starting a new player", path.display());
            Ok(Self::new(starting_walks))
        }
    }
}
