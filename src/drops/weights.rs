//! # Drop Weights
//!
//! Fixed weight tables keyed by rarity, and the per-item weight rule.

use crate::{Item, Rarity, WeatherTag};

/// Smallest weight any item can have. Keeps every item reachable and the
/// total weight above zero.
pub const WEIGHT_FLOOR: f64 = 0.1;

/// Multiplier for items with no weather theme while some weather is active.
pub const NO_AFFINITY_PENALTY: f64 = 0.8;

impl Rarity {
    /// Relative weight of a tier before any weather adjustment.
    pub fn base_weight(self) -> f64 {
        match self {
            Rarity::Normal => 100.0,
            Rarity::Uncommon => 50.0,
            Rarity::Rare => 25.0,
            Rarity::Epic => 10.0,
            Rarity::Legendary => 1.0,
        }
    }

    /// Multiplier applied when an item's affinity matches the current weather.
    pub fn affinity_boost(self) -> f64 {
        match self {
            Rarity::Legendary => 5.0,
            Rarity::Epic => 4.0,
            Rarity::Rare => 3.0,
            Rarity::Normal | Rarity::Uncommon => 2.0,
        }
    }
}

/// Computes an item's draw weight under the given weather.
///
/// Items whose affinity matches get the rarity boost. Items with no affinity
/// are penalised whenever any weather is reported, recognised or not. Items
/// themed around some *other* weather are left at their base weight.
///
/// # Examples
///
/// ```
/// use skypet::{effective_weight, Item, Rarity, WeatherCondition, WeatherTag};
///
/// let rainy = WeatherTag::Known(WeatherCondition::Rainy);
/// let puddle = Item::new(1, "Puddle", Rarity::Normal).with_affinity(WeatherCondition::Rainy);
/// let pebble = Item::new(2, "Pebble", Rarity::Normal);
///
/// assert_eq!(effective_weight(&puddle, Some(&rainy)), 200.0);
/// assert_eq!(effective_weight(&pebble, Some(&rainy)), 80.0);
/// assert_eq!(effective_weight(&pebble, None), 100.0);
/// ```
pub fn effective_weight(item: &Item, weather: Option<&WeatherTag>) -> f64 {
    let mut weight = item.rarity.base_weight();

    match (item.affinity, weather) {
        (Some(affinity), Some(tag)) if tag.condition() == Some(affinity) => {
            weight *= item.rarity.affinity_boost();
        }
        (None, Some(_)) => {
            weight *= NO_AFFINITY_PENALTY;
        }
        _ => {}
    }

    weight.max(WEIGHT_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeatherCondition;

    fn tag(condition: WeatherCondition) -> WeatherTag {
        WeatherTag::Known(condition)
    }

    #[test]
    fn test_base_weights_decrease_with_rarity() {
        let weights: Vec<f64> = Rarity::ALL.iter().map(|r| r.base_weight()).collect();
        assert!(weights.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_boost_never_decreases_with_rarity() {
        let boosts: Vec<f64> = Rarity::ALL.iter().map(|r| r.affinity_boost()).collect();
        assert!(boosts.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(Rarity::Legendary.affinity_boost(), 5.0);
    }

    #[test]
    fn test_matching_affinity_is_boosted() {
        let item =
            Item::new(1, "Aurora Cloak", Rarity::Legendary).with_affinity(WeatherCondition::Snowy);
        assert_eq!(effective_weight(&item, Some(&tag(WeatherCondition::Snowy))), 5.0);

        let item = Item::new(2, "Lightning Pin", Rarity::Epic)
            .with_affinity(WeatherCondition::Thunderstorm);
        assert_eq!(effective_weight(&item, Some(&tag(WeatherCondition::Thunderstorm))), 40.0);
    }

    #[test]
    fn test_other_affinity_is_untouched() {
        let item = Item::new(1, "Raincoat", Rarity::Rare).with_affinity(WeatherCondition::Rainy);
        assert_eq!(effective_weight(&item, Some(&tag(WeatherCondition::Sunny))), 25.0);
        assert_eq!(effective_weight(&item, None), 25.0);
    }

    #[test]
    fn test_unrecognized_weather_penalises_themeless_items() {
        let fog = WeatherTag::Unrecognized("fog".to_string());
        let pebble = Item::new(1, "Pebble", Rarity::Normal);
        let raindrop =
            Item::new(2, "Raindrop", Rarity::Normal).with_affinity(WeatherCondition::Rainy);

        assert_eq!(effective_weight(&pebble, Some(&fog)), 80.0);
        assert_eq!(effective_weight(&raindrop, Some(&fog)), 100.0);
    }

    #[test]
    fn test_penalised_legendary_hits_floor_only_if_below() {
        // 1.0 * 0.8 stays above the floor
        let relic = Item::new(1, "Relic", Rarity::Legendary);
        let weight = effective_weight(&relic, Some(&tag(WeatherCondition::Windy)));
        assert!((weight - 0.8).abs() < 1e-12);
        assert!(weight >= WEIGHT_FLOOR);
    }
}
