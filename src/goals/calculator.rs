use crate::goals::constants::*;
use crate::models::{
    ActivityInput, ActivityLevel, BiometricProfile, CalculatedGoals, GoalInput, GoalIntensity,
    PrimaryGoal, Sex, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

/// Basal metabolic rate in kcal/day.
///
/// Uses Katch-McArdle over lean body mass when the advanced method has a
/// positive body-fat percentage to work with; otherwise Mifflin-St Jeor.
pub fn compute_bmr(profile: &BiometricProfile, activity: &ActivityInput) -> f64 {
    if activity.is_advanced() {
        if let Some(lbm) = profile.lean_body_mass() {
            return KATCH_BASE + KATCH_LBM_COEF * lbm;
        }
    }

    let base = MIFFLIN_WEIGHT_COEF * profile.weight_kg + MIFFLIN_HEIGHT_COEF * profile.height_cm
        - MIFFLIN_AGE_COEF * profile.age_years;
    match profile.sex {
        Sex::Male => base + MIFFLIN_MALE_OFFSET,
        Sex::Female => base + MIFFLIN_FEMALE_OFFSET,
    }
}

/// Total daily energy expenditure in kcal/day.
///
/// Basic inputs go through the fixed multiplier table. Advanced inputs go
/// through the factorial MET-hour model: weekly exercise hours averaged
/// over the week, a fixed 8-hour work block, and everything left over at
/// the residual MET, floored so over-filled days cannot go negative.
pub fn compute_tdee(bmr: f64, activity: &ActivityInput) -> f64 {
    match activity {
        ActivityInput::Basic { level } => bmr * activity_multiplier(*level),
        ActivityInput::Advanced {
            job,
            sleep_hours,
            resistance_hours_per_week,
            resistance_intensity,
            cardio_hours_per_week,
            cardio_intensity,
        } => {
            let resistance_daily = resistance_hours_per_week / DAYS_PER_WEEK;
            let cardio_daily = cardio_hours_per_week / DAYS_PER_WEEK;
            let residual_hours = (HOURS_PER_DAY
                - sleep_hours
                - WORK_BLOCK_HOURS
                - resistance_daily
                - cardio_daily)
                .max(0.0);

            let total_met_hours = sleep_hours * MET_SLEEP
                + WORK_BLOCK_HOURS * job_met(*job)
                + resistance_daily * resistance_met(*resistance_intensity)
                + cardio_daily * cardio_met(*cardio_intensity)
                + residual_hours * MET_RESIDUAL;

            let pal = total_met_hours / HOURS_PER_DAY;
            bmr * pal
        }
    }
}

/// Apply the goal's kcal adjustment and the per-sex calorie floor.
///
/// Returns the calorie goal and whether the floor had to clamp it; the
/// clamp is informational, not an error.
pub fn apply_goal_adjustment(tdee: f64, goal: &GoalInput, sex: Sex) -> (f64, bool) {
    let target = tdee + goal_adjustment(goal);
    let floor = match sex {
        Sex::Male => CALORIE_FLOOR_MALE,
        Sex::Female => CALORIE_FLOOR_FEMALE,
    };

    if target < floor {
        (floor, true)
    } else {
        (target, false)
    }
}

/// Macro split in grams for a calorie goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Split a calorie goal into protein/fat/carb grams.
///
/// Protein scales per kg of lean mass when the advanced method knows the
/// body-fat percentage, per kg of total weight otherwise. Fat always uses
/// total weight. Carbs take whatever calories remain, floored at zero.
pub fn compute_macros(
    calorie_goal: f64,
    profile: &BiometricProfile,
    activity: &ActivityInput,
    goal: &GoalInput,
) -> MacroSplit {
    let advanced = activity.is_advanced();

    let protein_per_kg = if advanced && goal.primary == PrimaryGoal::Lose {
        PROTEIN_PER_KG_CUT
    } else if goal.primary == PrimaryGoal::Gain {
        PROTEIN_PER_KG_GAIN
    } else if activity.basic_level() == Some(ActivityLevel::Sedentary) {
        PROTEIN_PER_KG_SEDENTARY
    } else {
        PROTEIN_PER_KG_DEFAULT
    };

    let weight_basis = if advanced {
        profile.lean_body_mass().unwrap_or(profile.weight_kg)
    } else {
        profile.weight_kg
    };
    let protein_g = (protein_per_kg * weight_basis).round();
    let protein_calories = protein_g * KCAL_PER_G_PROTEIN;

    let fat_per_kg =
        if goal.primary == PrimaryGoal::Lose && goal.intensity == GoalIntensity::Aggressive {
            FAT_PER_KG_AGGRESSIVE_CUT
        } else {
            FAT_PER_KG_DEFAULT
        };
    let fat_g = (fat_per_kg * profile.weight_kg).round();
    let fat_calories = fat_g * KCAL_PER_G_FAT;

    let carb_calories = (calorie_goal - protein_calories - fat_calories).max(0.0);
    let carbs_g = (carb_calories / KCAL_PER_G_CARBS).round();

    MacroSplit {
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// The full stateless pipeline: BMR, TDEE, calorie goal, macro split.
pub fn compute_goals(
    profile: &BiometricProfile,
    activity: &ActivityInput,
    goal: &GoalInput,
) -> CalculatedGoals {
    let bmr = compute_bmr(profile, activity);
    let tdee = compute_tdee(bmr, activity);
    let (calorie_goal, calorie_floor_applied) = apply_goal_adjustment(tdee, goal, profile.sex);
    let macros = compute_macros(calorie_goal, profile, activity, goal);

    CalculatedGoals {
        calories: calorie_goal.round(),
        protein_g: macros.protein_g,
        carbs_g: macros.carbs_g,
        fat_g: macros.fat_g,
        calorie_floor_applied,
    }
}
