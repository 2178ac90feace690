//! # Skypet
//!
//! A virtual pet whose world follows the real weather.
//!
//! ## Architecture Overview
//!
//! The crate is organised around a small set of strongly typed modules:
//!
//! - **Catalog**: immutable item reference data (rarity, weather affinity, equip slot)
//! - **Drops**: the rarity- and weather-weighted item selector
//! - **Inventory**: per-player item counters and the walk currency balance
//! - **Crafting**: recipes that turn collected materials into new items
//! - **Pet**: appearance slots and weather-driven mood
//! - **Session**: the context object that ties a player's state to the catalog
//!
//! The weather itself is supplied by the caller. Nothing in this crate keeps
//! global mutable state; every operation receives the context it needs.

pub mod catalog;
pub mod crafting;
pub mod drops;
pub mod inventory;
pub mod pet;
pub mod session;
pub mod settings;

pub use catalog::*;
pub use crafting::*;
pub use drops::*;
pub use inventory::*;
pub use pet::*;
pub use session::*;
pub use settings::*;

/// Core error type for Skypet.
#[derive(thiserror::Error, Debug)]
pub enum SkypetError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A requested resource does not exist (e.g. an empty catalog)
    #[error("Not found: {0}")]
    NotFound(String),

    /// The item catalog is malformed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// An item id is not present in the catalog
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    /// A recipe id is not present in the recipe book
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    /// Not enough walks to pay for an action
    #[error("Not enough walks: need {needed}, have {available}")]
    InsufficientWalks { needed: u64, available: u64 },

    /// Not enough copies of an item
    #[error("Not enough of item {item}: need {needed}, have {available}")]
    InsufficientItems {
        item: ItemId,
        needed: u32,
        available: u32,
    },

    /// Crafting inputs are missing
    #[error("Missing materials for {recipe}: {missing}")]
    MissingMaterials { recipe: String, missing: String },

    /// The item has no equip slot
    #[error("Item {0} cannot be equipped")]
    NotEquippable(ItemId),

    /// Configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Caller input is out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used throughout the Skypet codebase.
pub type SkypetResult<T> = Result<T, SkypetError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game tuning constants.
pub mod config {
    /// Walks charged for a single item draw
    pub const DEFAULT_DRAW_COST: u64 = 10;

    /// Steps needed to earn one walk
    pub const DEFAULT_STEPS_PER_WALK: u32 = 1000;

    /// Walk balance given to a brand new player
    pub const DEFAULT_STARTING_WALKS: u64 = 30;

    /// Largest number of draws the CLI performs in one invocation
    pub const MAX_DRAWS_PER_REQUEST: u32 = 100;
}
