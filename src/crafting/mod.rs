//! # Crafting Module
//!
//! Recipes that turn collected materials into new items.
//!
//! Crafting is all-or-nothing: the inventory is checked for every ingredient
//! before anything is consumed, so a failed craft never leaves a partially
//! spent inventory behind.

use crate::{Inventory, ItemCatalog, ItemId, SkypetError, SkypetResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A quantity of one item consumed by a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: ItemId,
    pub quantity: u32,
}

impl Ingredient {
    pub fn new(item: u32, quantity: u32) -> Self {
        Self {
            item: ItemId(item),
            quantity,
        }
    }
}

/// A crafting recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier, e.g. `"umbrella-hat"`
    pub id: String,
    /// Display name
    pub name: String,
    /// Items consumed
    pub inputs: Vec<Ingredient>,
    /// Item produced
    pub output: ItemId,
    /// Copies produced per craft
    #[serde(default = "default_output_quantity")]
    pub output_quantity: u32,
}

fn default_output_quantity() -> u32 {
    1
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        inputs: Vec<Ingredient>,
        output: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            inputs,
            output: ItemId(output),
            output_quantity: 1,
        }
    }

    /// Total quantity needed per item. An item listed more than once is summed.
    pub fn requirements(&self) -> BTreeMap<ItemId, u32> {
        let mut needed = BTreeMap::new();
        for input in &self.inputs {
            let total: &mut u32 = needed.entry(input.item).or_insert(0);
            *total = total.saturating_add(input.quantity);
        }
        needed
    }

    /// Ingredients the inventory is short of, with the missing amount.
    pub fn shortfalls(&self, inventory: &Inventory) -> Vec<Ingredient> {
        self.requirements()
            .into_iter()
            .filter_map(|(item, quantity)| {
                let have = inventory.quantity(item);
                (have < quantity).then(|| Ingredient {
                    item,
                    quantity: quantity - have,
                })
            })
            .collect()
    }

    pub fn can_craft(&self, inventory: &Inventory) -> bool {
        self.shortfalls(inventory).is_empty()
    }
}

/// The set of known recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Creates a recipe book, rejecting duplicate ids and empty recipes.
    pub fn new(recipes: Vec<Recipe>) -> SkypetResult<Self> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(SkypetError::InvalidConfig(format!(
                    "duplicate recipe id '{}'",
                    recipe.id
                )));
            }
            if recipe.inputs.is_empty() || recipe.output_quantity == 0 {
                return Err(SkypetError::InvalidConfig(format!(
                    "recipe '{}' must consume and produce at least one item",
                    recipe.id
                )));
            }
        }
        Ok(Self { recipes })
    }

    /// Recipes matching the seeded catalog.
    pub fn seeded() -> Self {
        Self {
            recipes: vec![
                Recipe::new(
                    "straw-hat",
                    "Straw Hat",
                    vec![Ingredient::new(3, 2), Ingredient::new(2, 2)],
                    11,
                ),
                Recipe::new(
                    "umbrella-hat",
                    "Umbrella Hat",
                    vec![Ingredient::new(4, 3), Ingredient::new(2, 1)],
                    12,
                ),
                Recipe::new(
                    "knit-beanie",
                    "Knit Beanie",
                    vec![Ingredient::new(5, 3), Ingredient::new(1, 1)],
                    13,
                ),
                Recipe::new(
                    "striped-scarf",
                    "Striped Scarf",
                    vec![Ingredient::new(7, 2), Ingredient::new(2, 1)],
                    15,
                ),
                Recipe::new(
                    "cloud-pillow",
                    "Cloud Pillow",
                    vec![Ingredient::new(6, 4)],
                    22,
                ),
                Recipe::new(
                    "starry-backdrop",
                    "Starry Sky Backdrop",
                    vec![Ingredient::new(8, 5), Ingredient::new(10, 1)],
                    17,
                ),
            ],
        }
    }

    /// Parses recipes from a JSON array.
    pub fn from_json(json: &str) -> SkypetResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Reads recipes from a JSON file.
    pub fn load(path: impl AsRef<std::path::Path>) -> SkypetResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Checks that every item a recipe mentions exists in the catalog.
    pub fn validate_against(&self, catalog: &ItemCatalog) -> SkypetResult<()> {
        for recipe in &self.recipes {
            catalog.require(recipe.output)?;
            for input in &recipe.inputs {
                catalog.require(input.item)?;
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes the inventory currently has every ingredient for.
    pub fn craftable<'a>(&'a self, inventory: &'a Inventory) -> impl Iterator<Item = &'a Recipe> {
        self.recipes
            .iter()
            .filter(move |recipe| recipe.can_craft(inventory))
    }

    /// Crafts a recipe, consuming its inputs and adding its output.
    ///
    /// Returns the new quantity of the output item.
    ///
    /// # Examples
    ///
    /// ```
    /// use skypet::{Inventory, ItemId, RecipeBook};
    ///
    /// let book = RecipeBook::seeded();
    /// let mut inventory = Inventory::default();
    /// inventory.add_item(ItemId(6), 4);
    ///
    /// assert_eq!(book.craft("cloud-pillow", &mut inventory).unwrap(), 1);
    /// assert!(!inventory.owns(ItemId(6)));
    /// ```
    pub fn craft(&self, recipe_id: &str, inventory: &mut Inventory) -> SkypetResult<u32> {
        let recipe = self
            .get(recipe_id)
            .ok_or_else(|| SkypetError::UnknownRecipe(recipe_id.to_string()))?;

        let shortfalls = recipe.shortfalls(inventory);
        if !shortfalls.is_empty() {
            let missing = shortfalls
                .iter()
                .map(|s| format!("{} x{}", s.item, s.quantity))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(SkypetError::MissingMaterials {
                recipe: recipe.id.clone(),
                missing,
            });
        }

        for (item, quantity) in recipe.requirements() {
            inventory.remove_item(item, quantity)?;
        }
        let quantity = inventory.add_item(recipe.output, recipe.output_quantity);

        log::info!("Crafted {} (now own {})", recipe.name, quantity);
        Ok(quantity)
    }
}
