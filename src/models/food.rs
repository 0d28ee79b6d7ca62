use serde::{Deserialize, Serialize};

/// Calories per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Calories per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Calories per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Macronutrient profile per 100 g of food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroProfile {
    /// Calories implied by the macros alone (4/4/9 kcal per gram).
    #[inline]
    pub fn macro_calories(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.carbs_g * KCAL_PER_G_CARBS
            + self.fat_g * KCAL_PER_G_FAT
    }

    /// All fields finite and non-negative.
    pub fn is_plausible(&self) -> bool {
        [self.calories, self.protein_g, self.carbs_g, self.fat_g]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Scale every macro by a portion factor (e.g. grams eaten / 100).
    pub fn scaled(&self, factor: f64) -> MacroProfile {
        MacroProfile {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }
}

/// A catalog food with per-100 g nutritional data.
///
/// Macro fields are optional: imported rows and upstream estimates can
/// leave gaps, and a food with gaps is ungradeable rather than invalid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: Option<f64>,

    #[serde(rename = "Protein")]
    pub protein: Option<f64>,

    #[serde(rename = "Carbs")]
    pub carbs: Option<f64>,

    #[serde(rename = "Fats")]
    pub fats: Option<f64>,
}

impl Food {
    /// Per-100 g macro profile, if all four fields are present and finite.
    pub fn macro_profile(&self) -> Option<MacroProfile> {
        let profile = MacroProfile {
            calories: self.calories?,
            protein_g: self.protein?,
            carbs_g: self.carbs?,
            fat_g: self.fats?,
        };
        profile.is_plausible().then_some(profile)
    }

    /// Basic validation: name present, known fields non-negative.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [self.calories, self.protein, self.carbs, self.fats]
                .into_iter()
                .flatten()
                .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        fn fmt(v: Option<f64>) -> String {
            v.map_or_else(|| "?".to_string(), |v| format!("{}", v))
        }
        format!(
            "{}: {} cal, P:{} C:{} F:{}",
            self.name,
            fmt(self.calories),
            fmt(self.protein),
            fmt(self.carbs),
            fmt(self.fats)
        )
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        Food {
            name: "Chicken Breast".to_string(),
            calories: Some(165.0),
            protein: Some(31.0),
            carbs: Some(0.0),
            fats: Some(3.6),
        }
    }

    #[test]
    fn test_macro_profile_complete() {
        let profile = sample_food().macro_profile().unwrap();
        assert!((profile.calories - 165.0).abs() < 0.001);
        assert!((profile.protein_g - 31.0).abs() < 0.001);
    }

    #[test]
    fn test_macro_profile_missing_field() {
        let mut food = sample_food();
        food.fats = None;
        assert!(food.macro_profile().is_none());
    }

    #[test]
    fn test_macro_profile_non_numeric() {
        let mut food = sample_food();
        food.calories = Some(f64::NAN);
        assert!(food.macro_profile().is_none());
    }

    #[test]
    fn test_macro_calories() {
        let profile = sample_food().macro_profile().unwrap();
        // 31*4 + 0*4 + 3.6*9 = 156.4
        assert!((profile.macro_calories() - 156.4).abs() < 0.001);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut invalid = sample_food();
        invalid.protein = Some(-1.0);
        assert!(!invalid.is_valid());

        let mut unnamed = sample_food();
        unnamed.name = "  ".to_string();
        assert!(!unnamed.is_valid());
    }

    #[test]
    fn test_key_lowercases() {
        assert_eq!(sample_food().key(), "chicken breast");
    }
}
