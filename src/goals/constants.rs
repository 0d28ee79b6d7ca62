use crate::models::{ActivityLevel, EffortIntensity, GoalInput, JobActivity, PrimaryGoal};

// ─────────────────────────────────────────────────────────────────────────────
// BMR formulas
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin-St Jeor coefficients (weight kg, height cm, age years).
pub const MIFFLIN_WEIGHT_COEF: f64 = 10.0;
pub const MIFFLIN_HEIGHT_COEF: f64 = 6.25;
pub const MIFFLIN_AGE_COEF: f64 = 5.0;
pub const MIFFLIN_MALE_OFFSET: f64 = 5.0;
pub const MIFFLIN_FEMALE_OFFSET: f64 = -161.0;

/// Katch-McArdle coefficients over lean body mass.
pub const KATCH_BASE: f64 = 370.0;
pub const KATCH_LBM_COEF: f64 = 21.6;

// ─────────────────────────────────────────────────────────────────────────────
// TDEE: basic activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const ACTIVITY_MULT_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_MULT_LIGHT: f64 = 1.375;
pub const ACTIVITY_MULT_MODERATE: f64 = 1.55;
pub const ACTIVITY_MULT_ACTIVE: f64 = 1.725;
pub const ACTIVITY_MULT_VERY_ACTIVE: f64 = 1.9;

/// TDEE multiplier for a self-reported activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => ACTIVITY_MULT_SEDENTARY,
        ActivityLevel::Light => ACTIVITY_MULT_LIGHT,
        ActivityLevel::Moderate => ACTIVITY_MULT_MODERATE,
        ActivityLevel::Active => ACTIVITY_MULT_ACTIVE,
        ActivityLevel::VeryActive => ACTIVITY_MULT_VERY_ACTIVE,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TDEE: factorial MET-hour model
// ─────────────────────────────────────────────────────────────────────────────

pub const MET_SLEEP: f64 = 0.95;
pub const MET_JOB_SITTING: f64 = 1.3;
pub const MET_JOB_STANDING: f64 = 2.5;
pub const MET_JOB_MANUAL: f64 = 3.5;
pub const MET_JOB_HEAVY: f64 = 5.0;
pub const MET_RESISTANCE_LIGHT: f64 = 3.5;
pub const MET_RESISTANCE_MODERATE: f64 = 5.0;
pub const MET_RESISTANCE_VIGOROUS: f64 = 6.0;
pub const MET_CARDIO_LIGHT: f64 = 5.0;
pub const MET_CARDIO_MODERATE: f64 = 7.0;
pub const MET_CARDIO_VIGOROUS: f64 = 9.8;

/// MET for everything not otherwise accounted for in the day.
pub const MET_RESIDUAL: f64 = 1.3;

/// The model assumes a fixed 8-hour work block.
pub const WORK_BLOCK_HOURS: f64 = 8.0;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_WEEK: f64 = 7.0;

/// MET for an occupational activity category.
pub fn job_met(job: JobActivity) -> f64 {
    match job {
        JobActivity::Sitting => MET_JOB_SITTING,
        JobActivity::Standing => MET_JOB_STANDING,
        JobActivity::Manual => MET_JOB_MANUAL,
        JobActivity::Heavy => MET_JOB_HEAVY,
    }
}

/// MET for resistance training at a given intensity.
pub fn resistance_met(intensity: EffortIntensity) -> f64 {
    match intensity {
        EffortIntensity::Light => MET_RESISTANCE_LIGHT,
        EffortIntensity::Moderate => MET_RESISTANCE_MODERATE,
        EffortIntensity::Vigorous => MET_RESISTANCE_VIGOROUS,
    }
}

/// MET for cardio at a given intensity.
pub fn cardio_met(intensity: EffortIntensity) -> f64 {
    match intensity {
        EffortIntensity::Light => MET_CARDIO_LIGHT,
        EffortIntensity::Moderate => MET_CARDIO_MODERATE,
        EffortIntensity::Vigorous => MET_CARDIO_VIGOROUS,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Calorie goal adjustment and floors
// ─────────────────────────────────────────────────────────────────────────────

pub const ADJUST_LOSE_MILD: f64 = -300.0;
pub const ADJUST_LOSE_MODERATE: f64 = -500.0;
pub const ADJUST_LOSE_AGGRESSIVE: f64 = -750.0;
pub const ADJUST_GAIN_MILD: f64 = 200.0;
pub const ADJUST_GAIN_MODERATE: f64 = 350.0;
pub const ADJUST_GAIN_AGGRESSIVE: f64 = 500.0;

/// Daily kcal adjustment for a goal. Maintenance ignores intensity.
pub fn goal_adjustment(goal: &GoalInput) -> f64 {
    use crate::models::GoalIntensity::*;
    match goal.primary {
        PrimaryGoal::Maintain => 0.0,
        PrimaryGoal::Lose => match goal.intensity {
            Mild => ADJUST_LOSE_MILD,
            Moderate => ADJUST_LOSE_MODERATE,
            Aggressive => ADJUST_LOSE_AGGRESSIVE,
        },
        PrimaryGoal::Gain => match goal.intensity {
            Mild => ADJUST_GAIN_MILD,
            Moderate => ADJUST_GAIN_MODERATE,
            Aggressive => ADJUST_GAIN_AGGRESSIVE,
        },
    }
}

/// Minimum safe daily calorie goals. Results below are clamped up.
pub const CALORIE_FLOOR_FEMALE: f64 = 1200.0;
pub const CALORIE_FLOOR_MALE: f64 = 1500.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split: grams per kilogram tiers
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_PER_KG_DEFAULT: f64 = 1.6;

/// Higher protein target for cuts under the advanced method.
pub const PROTEIN_PER_KG_CUT: f64 = 2.2;
pub const PROTEIN_PER_KG_GAIN: f64 = 2.0;
pub const PROTEIN_PER_KG_SEDENTARY: f64 = 1.2;

pub const FAT_PER_KG_DEFAULT: f64 = 0.9;
pub const FAT_PER_KG_AGGRESSIVE_CUT: f64 = 0.7;
