pub mod food;
pub mod profile;
pub mod settings;

pub use food::{Food, MacroProfile, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
pub use profile::{
    ActivityInput, ActivityLevel, BiometricProfile, CalculatedGoals, DailyGoals, EffortIntensity,
    GoalInput, GoalIntensity, JobActivity, PrimaryGoal, Sex,
};
pub use settings::Settings;
