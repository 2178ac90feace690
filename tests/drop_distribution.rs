//! Statistical and property tests for the weighted item selector.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skypet::{
    effective_weight, select_item, Item, ItemCatalog, ItemId, Rarity, SkypetResult,
    WeatherCondition, WeatherTag, WeightedItemSelector, WEIGHT_FLOOR,
};
use std::collections::HashMap;

const TRIALS: u32 = 100_000;

fn count_draws(
    catalog: &ItemCatalog,
    weather: Option<&WeatherTag>,
    seed: u64,
) -> SkypetResult<HashMap<ItemId, u32>> {
    let selector = WeightedItemSelector::new(catalog);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = HashMap::new();

    for _ in 0..TRIALS {
        let item = selector.draw(weather, &mut rng)?;
        *counts.entry(item.id).or_insert(0) += 1;
    }
    Ok(counts)
}

fn count(counts: &HashMap<ItemId, u32>, id: u32) -> u32 {
    counts.get(&ItemId(id)).copied().unwrap_or(0)
}

#[test]
fn test_single_item_catalog_is_deterministic() -> SkypetResult<()> {
    let catalog = ItemCatalog::new(vec![Item::new(1, "Pebble", Rarity::Normal)])?;
    let sunny = WeatherTag::Known(WeatherCondition::Sunny);

    let counts = count_draws(&catalog, Some(&sunny), 1)?;
    assert_eq!(count(&counts, 1), TRIALS);
    Ok(())
}

#[test]
fn test_identical_items_converge_to_uniform() -> SkypetResult<()> {
    let catalog = ItemCatalog::new(
        (1..=4)
            .map(|id| Item::new(id, format!("Stone {id}"), Rarity::Uncommon))
            .collect(),
    )?;
    let windy = WeatherTag::Known(WeatherCondition::Windy);

    let counts = count_draws(&catalog, Some(&windy), 2)?;
    for id in 1..=4 {
        let share = f64::from(count(&counts, id)) / f64::from(TRIALS);
        assert!((share - 0.25).abs() < 0.01, "item {id} share {share}");
    }
    Ok(())
}

#[test]
fn test_matching_affinity_beats_themeless_item() -> SkypetResult<()> {
    // Normal rarity: 100 * 2 for the match versus 100 * 0.8 for the themeless item
    let catalog = ItemCatalog::new(vec![
        Item::new(1, "Raindrop", Rarity::Normal).with_affinity(WeatherCondition::Rainy),
        Item::new(2, "Pebble", Rarity::Normal),
    ])?;
    let rainy = WeatherTag::Known(WeatherCondition::Rainy);

    let counts = count_draws(&catalog, Some(&rainy), 3)?;
    let ratio = f64::from(count(&counts, 1)) / f64::from(count(&counts, 2));
    assert!((ratio - 2.5).abs() < 0.15, "ratio {ratio}");
    Ok(())
}

#[test]
fn test_rarity_dominates_weather_boost() -> SkypetResult<()> {
    let catalog = ItemCatalog::new(vec![
        Item::new(1, "Rainbow Backdrop", Rarity::Legendary).with_affinity(WeatherCondition::Rainy),
        Item::new(2, "Golden Sun Crown", Rarity::Legendary).with_affinity(WeatherCondition::Sunny),
        Item::new(3, "Pebble", Rarity::Normal),
    ])?;
    let rainy = WeatherTag::Known(WeatherCondition::Rainy);

    // Weights 5, 1 and 80
    let counts = count_draws(&catalog, Some(&rainy), 4)?;
    let matched = count(&counts, 1);
    let unmatched = count(&counts, 2);
    let normal = count(&counts, 3);

    assert!(matched > unmatched * 3, "matched {matched}, unmatched {unmatched}");
    assert!(normal > matched * 10, "normal {normal}, matched {matched}");
    Ok(())
}

#[test]
fn test_legendary_match_versus_themeless_normal() -> SkypetResult<()> {
    let catalog = ItemCatalog::new(vec![
        Item::new(1, "Rainbow Backdrop", Rarity::Legendary).with_affinity(WeatherCondition::Rainy),
        Item::new(2, "Pebble", Rarity::Normal),
    ])?;
    let rainy = WeatherTag::Known(WeatherCondition::Rainy);

    // 5 against 80: id 1 expected about 5.9% of draws
    let counts = count_draws(&catalog, Some(&rainy), 5)?;
    let legendary = count(&counts, 1);
    let normal = count(&counts, 2);

    assert!(normal > legendary * 10);
    let share = f64::from(legendary) / f64::from(TRIALS);
    assert!((share - 5.0 / 85.0).abs() < 0.005, "legendary share {share}");
    Ok(())
}

#[test]
fn test_seeded_catalog_draws_follow_distribution() -> SkypetResult<()> {
    let catalog = ItemCatalog::seeded();
    let snowy = WeatherTag::Known(WeatherCondition::Snowy);
    let odds = WeightedItemSelector::new(&catalog).distribution(Some(&snowy));

    let counts = count_draws(&catalog, Some(&snowy), 6)?;
    for entry in odds {
        let observed = f64::from(count(&counts, entry.item.id.0)) / f64::from(TRIALS);
        assert!(
            (observed - entry.probability).abs() < 0.01,
            "{}: observed {observed}, expected {}",
            entry.item.name,
            entry.probability
        );
    }
    Ok(())
}

fn rarity_strategy() -> impl Strategy<Value = Rarity> {
    prop::sample::select(Rarity::ALL.to_vec())
}

fn condition_strategy() -> impl Strategy<Value = Option<WeatherCondition>> {
    prop::option::of(prop::sample::select(WeatherCondition::ALL.to_vec()))
}

fn weather_strategy() -> impl Strategy<Value = Option<WeatherTag>> {
    prop_oneof![
        Just(None),
        prop::sample::select(WeatherCondition::ALL.to_vec())
            .prop_map(|c| Some(WeatherTag::Known(c))),
        "[a-z]{3,8}".prop_map(|s| WeatherTag::parse(&s)),
    ]
}

fn catalog_strategy() -> impl Strategy<Value = ItemCatalog> {
    prop::collection::vec((rarity_strategy(), condition_strategy()), 1..40).prop_map(|specs| {
        let items = specs
            .into_iter()
            .enumerate()
            .map(|(index, (rarity, affinity))| {
                let item = Item::new(index as u32 + 1, format!("Item {index}"), rarity);
                match affinity {
                    Some(condition) => item.with_affinity(condition),
                    None => item,
                }
            })
            .collect();
        ItemCatalog::new(items).expect("generated ids are unique")
    })
}

proptest! {
    #[test]
    fn prop_draw_returns_catalog_member(
        catalog in catalog_strategy(),
        weather in weather_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..20 {
            let item = select_item(&catalog, weather.as_ref(), &mut rng).unwrap();
            prop_assert!(catalog.get(item.id).is_some());
        }
    }

    #[test]
    fn prop_every_weight_is_positive(
        catalog in catalog_strategy(),
        weather in weather_strategy(),
    ) {
        for item in &catalog {
            prop_assert!(effective_weight(item, weather.as_ref()) >= WEIGHT_FLOOR);
        }
    }

    #[test]
    fn prop_probabilities_sum_to_one(
        catalog in catalog_strategy(),
        weather in weather_strategy(),
    ) {
        let total: f64 = WeightedItemSelector::new(&catalog)
            .distribution(weather.as_ref())
            .iter()
            .map(|odds| odds.probability)
            .sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }
}
