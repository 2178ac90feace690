//! # Session Module
//!
//! The context object every gameplay operation runs against.
//!
//! A `Session` owns one player's state together with the settings, item
//! catalog, recipe book and random source used to act on it. Callers build a
//! session, issue requests against it and persist `PlayerState` afterwards;
//! there is no ambient or global state anywhere in the crate.

pub mod player;

pub use player::*;

use crate::{
    walks_from_steps, EquipSlot, GameSettings, Item, ItemCatalog, ItemId, ItemOdds, Mood,
    RecipeBook, SkypetError, SkypetResult, TimeOfDay, WeatherTag, WeightedItemSelector,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// A request for one random item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRequest {
    /// Current weather tag as reported by the weather source
    #[serde(default)]
    pub weather: Option<String>,
}

impl DrawRequest {
    pub fn new(weather: Option<&str>) -> Self {
        Self {
            weather: weather.map(str::to_string),
        }
    }

    /// The parsed weather tag; unknown tags are kept, blank ones dropped.
    pub fn weather_tag(&self) -> Option<WeatherTag> {
        self.weather.as_deref().and_then(WeatherTag::parse)
    }
}

/// The result of a successful draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResponse {
    /// Full catalog record of the item received
    pub item: Item,
    /// How many of this item the player now owns
    pub quantity: u32,
    /// Walk balance after paying for the draw
    pub walks_remaining: u64,
}

/// One player's game session.
#[derive(Debug)]
pub struct Session {
    settings: GameSettings,
    catalog: ItemCatalog,
    recipes: RecipeBook,
    player: PlayerState,
    rng: StdRng,
}

impl Session {
    /// Creates a session from explicit parts.
    ///
    /// Settings are validated and the recipe book is checked against the
    /// catalog.
    pub fn new(
        settings: GameSettings,
        catalog: ItemCatalog,
        recipes: RecipeBook,
        player: PlayerState,
    ) -> SkypetResult<Self> {
        settings.validate()?;
        recipes.validate_against(&catalog)?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            settings,
            catalog,
            recipes,
            player,
            rng,
        })
    }

    /// Creates a session from settings, loading any catalog or recipe files
    /// they name. Without a catalog file the built-in catalog and recipes
    /// are used.
    ///
    /// # Examples
    ///
    /// ```
    /// use skypet::{DrawRequest, GameSettings, Session};
    ///
    /// let mut session = Session::from_settings(GameSettings::for_testing(1), None).unwrap();
    /// let response = session.draw_item(&DrawRequest::new(Some("sunny"))).unwrap();
    /// assert_eq!(response.quantity, 1);
    /// ```
    pub fn from_settings(
        settings: GameSettings,
        player: Option<PlayerState>,
    ) -> SkypetResult<Self> {
        let (catalog, recipes) = match &settings.catalog_path {
            Some(path) => {
                let catalog = ItemCatalog::load(path)?;
                let recipes = match &settings.recipes_path {
                    Some(path) => RecipeBook::load(path)?,
                    None => RecipeBook::default(),
                };
                (catalog, recipes)
            }
            None => (ItemCatalog::seeded(), RecipeBook::seeded()),
        };

        let player = player.unwrap_or_else(|| PlayerState::new(settings.starting_walks));
        Self::new(settings, catalog, recipes, player)
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Ends the session, handing back the player state for saving.
    pub fn into_player(self) -> PlayerState {
        self.player
    }

    /// Pays for and performs one weighted item draw.
    ///
    /// An empty catalog is rejected before any walks are charged.
    pub fn draw_item(&mut self, request: &DrawRequest) -> SkypetResult<DrawResponse> {
        if self.catalog.is_empty() {
            return Err(SkypetError::NotFound("no items available".to_string()));
        }

        let weather = request.weather_tag();
        if let Some(WeatherTag::Unrecognized(tag)) = &weather {
            log::warn!("Unrecognized weather '{}'; no affinity will match", tag);
        }

        let walks_remaining = self
            .player
            .inventory
            .spend_walks(self.settings.draw_cost)?;

        let item = WeightedItemSelector::new(&self.catalog)
            .draw(weather.as_ref(), &mut self.rng)?
            .clone();
        let quantity = self.player.inventory.add_item(item.id, 1);
        self.player.statistics.record_draw(&item);

        log::info!(
            "{} received {} ({}); now owns {}",
            self.player.pet.name,
            item.name,
            item.rarity,
            quantity
        );

        Ok(DrawResponse {
            item,
            quantity,
            walks_remaining,
        })
    }

    /// Converts reported steps into walks, carrying over partial walks.
    ///
    /// Returns the number of walks earned.
    pub fn record_steps(&mut self, steps: u64) -> SkypetResult<u64> {
        let total = self.player.pending_steps.saturating_add(steps);
        let earned = walks_from_steps(total, self.settings.steps_per_walk)?;

        self.player.pending_steps = total % u64::from(self.settings.steps_per_walk);
        self.player.inventory.earn_walks(earned);
        let stats = &mut self.player.statistics;
        stats.steps_recorded = stats.steps_recorded.saturating_add(steps);
        stats.walks_earned = stats.walks_earned.saturating_add(earned);

        if earned > 0 {
            log::info!("Earned {} walks from {} steps", earned, steps);
        }
        Ok(earned)
    }

    /// Crafts a recipe from the player's inventory.
    ///
    /// Worn items used up by the craft are taken off the pet.
    pub fn craft(&mut self, recipe_id: &str) -> SkypetResult<u32> {
        let quantity = self.recipes.craft(recipe_id, &mut self.player.inventory)?;
        self.player.pet.release_unowned(&self.player.inventory);
        self.player.statistics.items_crafted += 1;
        Ok(quantity)
    }

    /// Puts an owned item on the pet, returning the item it replaced.
    pub fn equip(&mut self, item_id: ItemId) -> SkypetResult<Option<ItemId>> {
        let item = self.catalog.require(item_id)?;
        self.player.pet.equip(item, &self.player.inventory)
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemId> {
        self.player.pet.unequip(slot)
    }

    /// The pet's mood for a raw weather tag at the given hour.
    pub fn mood(&self, weather: Option<&str>, hour: u8) -> SkypetResult<Mood> {
        let weather = weather.and_then(WeatherTag::parse);
        Ok(Mood::from_conditions(weather.as_ref(), TimeOfDay::from_hour(hour)?))
    }

    /// Draw odds for every catalog item under a raw weather tag.
    pub fn odds(&self, weather: Option<&str>) -> Vec<ItemOdds<'_>> {
        let weather = weather.and_then(WeatherTag::parse);
        WeightedItemSelector::new(&self.catalog).distribution(weather.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::from_settings(GameSettings::for_testing(12345), None).unwrap()
    }

    #[test]
    fn test_draw_charges_walks_and_stores_item() {
        let mut session = test_session();
        let start = session.player().inventory.walks();

        let response = session.draw_item(&DrawRequest::new(Some("rainy"))).unwrap();
        assert_eq!(response.walks_remaining, start - 1);
        assert_eq!(response.quantity, 1);
        assert!(session.player().inventory.owns(response.item.id));
        assert!(session.catalog().get(response.item.id).is_some());
        assert_eq!(session.player().statistics.draws, 1);
    }

    #[test]
    fn test_draw_without_walks_fails_cleanly() {
        let settings = GameSettings::for_testing(1);
        let mut session = Session::from_settings(settings, Some(PlayerState::new(0))).unwrap();

        let result = session.draw_item(&DrawRequest::default());
        assert!(matches!(
            result,
            Err(SkypetError::InsufficientWalks {
                needed: 1,
                available: 0
            })
        ));
        assert_eq!(session.player().inventory.distinct_items(), 0);
    }

    #[test]
    fn test_empty_catalog_rejected_before_charging() {
        let settings = GameSettings::for_testing(1);
        let mut session = Session::new(
            settings,
            ItemCatalog::default(),
            RecipeBook::default(),
            PlayerState::new(5),
        )
        .unwrap();

        let result = session.draw_item(&DrawRequest::new(Some("sunny")));
        assert!(matches!(result, Err(SkypetError::NotFound(_))));
        assert_eq!(session.player().inventory.walks(), 5);
    }

    #[test]
    fn test_unrecognized_weather_is_tolerated() {
        let mut session = test_session();
        let response = session.draw_item(&DrawRequest::new(Some("volcanic ash")));
        assert!(response.is_ok());
    }

    #[test]
    fn test_steps_carry_over() {
        let mut session = test_session();
        let start = session.player().inventory.walks();

        assert_eq!(session.record_steps(150).unwrap(), 1);
        assert_eq!(session.player().pending_steps, 50);
        assert_eq!(session.record_steps(60).unwrap(), 1);
        assert_eq!(session.player().pending_steps, 10);
        assert_eq!(session.player().inventory.walks(), start + 2);
        assert_eq!(session.player().statistics.steps_recorded, 210);
    }

    #[test]
    fn test_huge_step_counts_saturate() {
        let mut session = test_session();
        session.record_steps(u64::MAX).unwrap();
        session.record_steps(u64::MAX).unwrap();

        let stats = &session.player().statistics;
        assert_eq!(stats.steps_recorded, u64::MAX);
        assert!(stats.walks_earned > 0);
        assert!(session.player().pending_steps < 100);
    }

    #[test]
    fn test_crafting_away_worn_item_unequips_it() {
        let recipes = RecipeBook::new(vec![crate::Recipe::new(
            "tee-to-backdrop",
            "Meadow Backdrop",
            vec![crate::Ingredient::new(21, 1)],
            23,
        )])
        .unwrap();
        let mut player = PlayerState::new(0);
        player.inventory.add_item(ItemId(21), 1);

        let mut session = Session::new(
            GameSettings::for_testing(1),
            ItemCatalog::seeded(),
            recipes,
            player,
        )
        .unwrap();
        session.equip(ItemId(21)).unwrap();

        session.craft("tee-to-backdrop").unwrap();
        assert!(!session.player().inventory.owns(ItemId(21)));
        assert_eq!(session.player().pet.equipped_in(EquipSlot::Body), None);
    }

    #[test]
    fn test_equip_through_session() {
        let mut session = test_session();
        assert!(matches!(
            session.equip(ItemId(9999)),
            Err(SkypetError::UnknownItem(_))
        ));

        let mut player = session.into_player();
        player.inventory.add_item(ItemId(21), 1);
        let mut session =
            Session::from_settings(GameSettings::for_testing(1), Some(player)).unwrap();

        assert_eq!(session.equip(ItemId(21)).unwrap(), None);
        assert_eq!(session.unequip(EquipSlot::Body), Some(ItemId(21)));
    }

    #[test]
    fn test_mood_and_odds() {
        let session = test_session();
        assert_eq!(session.mood(Some("snowy"), 10).unwrap(), Mood::Excited);
        assert!(session.mood(Some("snowy"), 25).is_err());

        let odds = session.odds(Some("rainy"));
        assert_eq!(odds.len(), session.catalog().len());
    }

    #[test]
    fn test_request_json() {
        let request: DrawRequest = serde_json::from_str(r#"{"weather": "Thunderstorm"}"#).unwrap();
        assert_eq!(
            request.weather_tag(),
            Some(WeatherTag::Known(crate::WeatherCondition::Thunderstorm))
        );

        let request: DrawRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.weather_tag(), None);
    }
}
