use std::collections::HashMap;

use crate::error::{NutriError, Result};
use crate::models::Food;

/// In-memory food catalog with case-insensitive lookup.
pub struct FoodCatalog {
    /// All foods keyed by lowercase name.
    foods: HashMap<String, Food>,
}

impl FoodCatalog {
    /// Create a catalog from a list of foods.
    pub fn new(foods: Vec<Food>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        Self { foods: map }
    }

    /// Get a food by name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&Food> {
        self.foods.get(&name.to_lowercase())
    }

    /// Get a food by name or fail with `FoodNotFound`.
    pub fn require_food(&self, name: &str) -> Result<&Food> {
        self.get_food(name)
            .ok_or_else(|| NutriError::FoodNotFound(name.to_string()))
    }

    /// Insert or replace a food by name. Returns true if it was new.
    pub fn upsert(&mut self, food: Food) -> bool {
        self.foods.insert(food.key(), food).is_none()
    }

    /// Merge a batch of foods in, replacing existing entries by name.
    ///
    /// Returns (added, updated) counts. Invalid records are skipped.
    pub fn merge(&mut self, foods: Vec<Food>) -> (usize, usize) {
        let mut added = 0;
        let mut updated = 0;
        for food in foods {
            if !food.is_valid() {
                continue;
            }
            if self.upsert(food) {
                added += 1;
            } else {
                updated += 1;
            }
        }
        (added, updated)
    }

    /// All foods, sorted by name for stable listings.
    pub fn all_foods(&self) -> Vec<&Food> {
        let mut foods: Vec<&Food> = self.foods.values().collect();
        foods.sort_by(|a, b| a.key().cmp(&b.key()));
        foods
    }

    /// Convert the catalog back to a list for serialization.
    pub fn to_foods(&self) -> Vec<Food> {
        self.foods.values().cloned().collect()
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
