use serde::{Deserialize, Serialize};

/// Biological sex, as used by the BMR formulas and calorie floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Self-reported overall activity level (basic questionnaire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Occupational activity category (advanced questionnaire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobActivity {
    Sitting,
    Standing,
    Manual,
    Heavy,
}

/// Exercise intensity band for resistance or cardio sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffortIntensity {
    Light,
    Moderate,
    Vigorous,
}

/// Direction of the calorie goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryGoal {
    Lose,
    Maintain,
    Gain,
}

/// How hard to push toward the primary goal.
///
/// Ignored when the primary goal is maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalIntensity {
    Mild,
    Moderate,
    Aggressive,
}

/// User biometrics feeding the BMR formulas.
///
/// Values are assumed pre-validated by the collecting layer: positive,
/// plausible numbers. The calculators do not re-validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricProfile {
    pub age_years: f64,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat_pct: Option<f64>,
}

impl BiometricProfile {
    /// Lean body mass in kg, when a positive body-fat percentage is known.
    pub fn lean_body_mass(&self) -> Option<f64> {
        self.body_fat_pct
            .filter(|bf| *bf > 0.0)
            .map(|bf| self.weight_kg * (1.0 - bf / 100.0))
    }
}

/// Activity pattern, tagged by which estimation strategy collected it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum ActivityInput {
    /// Single self-reported level, mapped through a fixed multiplier table.
    Basic { level: ActivityLevel },

    /// Factorial questionnaire resolved through a MET-hour model.
    Advanced {
        job: JobActivity,
        sleep_hours: f64,
        resistance_hours_per_week: f64,
        resistance_intensity: EffortIntensity,
        cardio_hours_per_week: f64,
        cardio_intensity: EffortIntensity,
    },
}

impl ActivityInput {
    /// Whether this input came from the advanced questionnaire.
    pub fn is_advanced(&self) -> bool {
        matches!(self, ActivityInput::Advanced { .. })
    }

    /// The basic activity level, when present.
    pub fn basic_level(&self) -> Option<ActivityLevel> {
        match self {
            ActivityInput::Basic { level } => Some(*level),
            ActivityInput::Advanced { .. } => None,
        }
    }
}

/// The user's stated goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalInput {
    pub primary: PrimaryGoal,
    pub intensity: GoalIntensity,
}

/// Daily macro targets. A zero value means "no goal set"; the grading
/// engine substitutes safe defaults rather than dividing by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Output of the goal pipeline: daily targets plus a note when the
/// calorie floor had to clamp the computed goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatedGoals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub calorie_floor_applied: bool,
}

impl CalculatedGoals {
    /// The targets as plain daily goals, for grading.
    pub fn to_daily_goals(&self) -> DailyGoals {
        DailyGoals {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }
}
