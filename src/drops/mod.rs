//! # Drops Module
//!
//! Weighted random item selection conditioned on the current weather.
//!
//! Each draw computes an effective weight for every catalog item (rarity base
//! weight, weather boost or penalty, clamped to a positive floor), rolls a
//! uniform value below the total and walks the catalog in order until the
//! roll is used up. The selector holds no state of its own: it borrows an
//! immutable catalog and takes the random source per call, so one catalog can
//! serve any number of concurrent draws.

pub mod weights;

pub use weights::*;

use crate::{Item, ItemCatalog, SkypetError, SkypetResult, WeatherTag};
use rand::Rng;
use serde::Serialize;

/// One item's share of a draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemOdds<'a> {
    pub item: &'a Item,
    pub weight: f64,
    /// Chance of this item being drawn, in `[0, 1]`
    pub probability: f64,
}

/// Draws items from a catalog with rarity and weather weighting.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use skypet::{ItemCatalog, WeatherCondition, WeatherTag, WeightedItemSelector};
///
/// let catalog = ItemCatalog::seeded();
/// let selector = WeightedItemSelector::new(&catalog);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let rainy = WeatherTag::Known(WeatherCondition::Rainy);
/// let item = selector.draw(Some(&rainy), &mut rng).unwrap();
/// assert!(catalog.get(item.id).is_some());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WeightedItemSelector<'a> {
    catalog: &'a ItemCatalog,
}

impl<'a> WeightedItemSelector<'a> {
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        Self { catalog }
    }

    /// Effective weight of every item, in catalog order.
    pub fn weights(&self, weather: Option<&WeatherTag>) -> Vec<f64> {
        self.catalog
            .iter()
            .map(|item| effective_weight(item, weather))
            .collect()
    }

    /// Selection probability of every item, in catalog order.
    pub fn distribution(&self, weather: Option<&WeatherTag>) -> Vec<ItemOdds<'a>> {
        let weights = self.weights(weather);
        let total: f64 = weights.iter().sum();

        self.catalog
            .iter()
            .zip(weights)
            .map(|(item, weight)| ItemOdds {
                item,
                weight,
                probability: if total > 0.0 { weight / total } else { 0.0 },
            })
            .collect()
    }

    /// Draws one item.
    ///
    /// Fails with `NotFound` when the catalog is empty; otherwise always
    /// returns a catalog member.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        weather: Option<&WeatherTag>,
        rng: &mut R,
    ) -> SkypetResult<&'a Item> {
        if self.catalog.is_empty() {
            return Err(SkypetError::NotFound("no items available".to_string()));
        }

        let weights = self.weights(weather);
        let total: f64 = weights.iter().sum();
        let roll = rng.gen_range(0.0..total);

        let index = pick_index(&weights, roll)
            .ok_or_else(|| SkypetError::NotFound("no items available".to_string()))?;
        let item = &self.catalog.items()[index];

        log::debug!(
            "Drew {} ({}) with roll {:.3} of {:.3} under {}",
            item.name,
            item.rarity,
            roll,
            total,
            weather.map_or_else(|| "no weather".to_string(), |tag| tag.to_string())
        );

        Ok(item)
    }
}

/// Draws one item from `catalog`. Shorthand for [`WeightedItemSelector::draw`].
pub fn select_item<'a, R: Rng + ?Sized>(
    catalog: &'a ItemCatalog,
    weather: Option<&WeatherTag>,
    rng: &mut R,
) -> SkypetResult<&'a Item> {
    WeightedItemSelector::new(catalog).draw(weather, rng)
}

/// Resolves a roll against a list of weights.
///
/// Subtracts each weight from `roll` in order and returns the first index at
/// which it goes negative. If rounding leaves the roll unspent, the last
/// index is returned. `None` only for an empty list.
///
/// # Examples
///
/// ```
/// use skypet::pick_index;
///
/// let weights = [10.0, 5.0, 1.0];
/// assert_eq!(pick_index(&weights, 0.0), Some(0));
/// assert_eq!(pick_index(&weights, 10.0), Some(1));
/// assert_eq!(pick_index(&weights, 15.5), Some(2));
/// assert_eq!(pick_index(&weights, 99.0), Some(2));
/// assert_eq!(pick_index(&[], 0.0), None);
/// ```
pub fn pick_index(weights: &[f64], roll: f64) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let mut remaining = roll;
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining < 0.0 {
            return Some(index);
        }
    }

    log::warn!(
        "Roll {} not consumed by {} weights; falling back to last item",
        roll,
        weights.len()
    );
    Some(weights.len() - 1)
}
