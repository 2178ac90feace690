//! # Settings
//!
//! Runtime configuration loaded from JSON and overridable from the command line.

use crate::{config, SkypetError, SkypetResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunable game settings.
///
/// Missing fields take their defaults; unknown fields are rejected so typos
/// in a settings file surface as errors.
///
/// # Examples
///
/// ```
/// use skypet::GameSettings;
///
/// let settings = GameSettings::default();
/// assert!(settings.steps_per_walk > 0);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSettings {
    /// Random seed for reproducible draws; entropy when absent
    pub seed: Option<u64>,
    /// Walks charged per item draw
    pub draw_cost: u64,
    /// Steps needed to earn one walk
    pub steps_per_walk: u32,
    /// Walk balance for a new player
    pub starting_walks: u64,
    /// Item catalog to load instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Recipes to load alongside a custom catalog
    pub recipes_path: Option<PathBuf>,
    /// Default log filter
    pub log_level: String,
}

impl GameSettings {
    /// Settings for tests: fixed seed, cheap draws.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            draw_cost: 1,
            steps_per_walk: 100,
            starting_walks: 10,
            catalog_path: None,
            recipes_path: None,
            log_level: "debug".to_string(),
        }
    }

    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SkypetResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> SkypetResult<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> SkypetResult<()> {
        if self.steps_per_walk == 0 {
            return Err(SkypetError::InvalidConfig(
                "steps_per_walk must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: None,
            draw_cost: config::DEFAULT_DRAW_COST,
            steps_per_walk: config::DEFAULT_STEPS_PER_WALK,
            starting_walks: config::DEFAULT_STARTING_WALKS,
            catalog_path: None,
            recipes_path: None,
            log_level: "info".to_string(),
        }
    }
}
