use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Food, Settings};

/// Load foods from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<Food> = serde_json::from_str(&content)?;
    Ok(dedup_by_key(foods))
}

/// Save foods to a JSON file, deduplicated by lowercase name.
pub fn save_foods<P: AsRef<Path>>(path: P, foods: &[Food]) -> Result<()> {
    let deduped = dedup_by_key(foods.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the settings record from a JSON file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the settings record to a JSON file.
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Import foods from a CSV file with Name/Calories/Protein/Carbs/Fats
/// columns. Empty cells become missing fields, not zeros.
pub fn import_foods_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for record in reader.deserialize() {
        let food: Food = record?;
        foods.push(food);
    }
    Ok(dedup_by_key(foods))
}

fn dedup_by_key(foods: Vec<Food>) -> Vec<Food> {
    let mut seen: HashMap<String, Food> = HashMap::new();
    for food in foods {
        seen.insert(food.key(), food);
    }
    seen.into_values().collect()
}
