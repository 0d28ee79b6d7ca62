use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::{
    ActivityInput, ActivityLevel, BiometricProfile, EffortIntensity, Food, GoalInput,
    GoalIntensity, JobActivity, PrimaryGoal, Sex,
};

/// Minimum Jaro-Winkler similarity for a fuzzy food-name match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Prompt for a number with a default shown.
fn prompt_f64(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for a positive number; zero and negatives are rejected.
fn prompt_positive_f64(prompt: &str, default: &str) -> Result<f64> {
    let value = prompt_f64(prompt, default)?;
    if value <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "{} must be positive",
            prompt
        )));
    }
    Ok(value)
}

/// Prompt for an optional number; an empty answer means "unknown".
fn prompt_optional_f64(prompt: &str) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(Some)
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))
}

/// Yes/no confirmation prompt.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the user's biometrics.
pub fn prompt_biometrics() -> Result<BiometricProfile> {
    let age_years = prompt_positive_f64("Age (years)", "30")?;

    let sexes = ["Male", "Female"];
    let sex_idx = Select::new()
        .with_prompt("Sex")
        .items(&sexes)
        .default(0)
        .interact()?;
    let sex = if sex_idx == 0 { Sex::Male } else { Sex::Female };

    let height_cm = prompt_positive_f64("Height (cm)", "175")?;
    let weight_kg = prompt_positive_f64("Weight (kg)", "75")?;
    let body_fat_pct = prompt_optional_f64("Body fat % (leave empty if unknown)")?;

    Ok(BiometricProfile {
        age_years,
        sex,
        height_cm,
        weight_kg,
        body_fat_pct,
    })
}

fn prompt_effort_intensity(prompt: &str) -> Result<EffortIntensity> {
    let intensities = ["Light", "Moderate", "Vigorous"];
    let idx = Select::new()
        .with_prompt(prompt)
        .items(&intensities)
        .default(1)
        .interact()?;
    Ok(match idx {
        0 => EffortIntensity::Light,
        1 => EffortIntensity::Moderate,
        _ => EffortIntensity::Vigorous,
    })
}

/// Collect the activity pattern, choosing between the basic level and the
/// advanced questionnaire.
pub fn prompt_activity() -> Result<ActivityInput> {
    let methods = ["Basic (single activity level)", "Advanced (questionnaire)"];
    let method_idx = Select::new()
        .with_prompt("Estimation method")
        .items(&methods)
        .default(0)
        .interact()?;

    if method_idx == 0 {
        let levels = [
            "Sedentary",
            "Lightly active",
            "Moderately active",
            "Active",
            "Very active",
        ];
        let idx = Select::new()
            .with_prompt("Activity level")
            .items(&levels)
            .default(0)
            .interact()?;
        let level = match idx {
            0 => ActivityLevel::Sedentary,
            1 => ActivityLevel::Light,
            2 => ActivityLevel::Moderate,
            3 => ActivityLevel::Active,
            _ => ActivityLevel::VeryActive,
        };
        return Ok(ActivityInput::Basic { level });
    }

    let jobs = [
        "Sitting (desk work)",
        "Standing (retail, teaching)",
        "Manual (trades, nursing)",
        "Heavy (construction, farm)",
    ];
    let job_idx = Select::new()
        .with_prompt("Job activity")
        .items(&jobs)
        .default(0)
        .interact()?;
    let job = match job_idx {
        0 => JobActivity::Sitting,
        1 => JobActivity::Standing,
        2 => JobActivity::Manual,
        _ => JobActivity::Heavy,
    };

    let sleep_hours = prompt_positive_f64("Sleep (hours per night)", "8")?;
    let resistance_hours_per_week = prompt_f64("Resistance training (hours per week)", "0")?;
    let resistance_intensity = prompt_effort_intensity("Resistance intensity")?;
    let cardio_hours_per_week = prompt_f64("Cardio (hours per week)", "0")?;
    let cardio_intensity = prompt_effort_intensity("Cardio intensity")?;

    Ok(ActivityInput::Advanced {
        job,
        sleep_hours,
        resistance_hours_per_week,
        resistance_intensity,
        cardio_hours_per_week,
        cardio_intensity,
    })
}

/// Collect the primary goal and its intensity.
pub fn prompt_goal() -> Result<GoalInput> {
    let goals = ["Lose weight", "Maintain weight", "Gain weight"];
    let goal_idx = Select::new()
        .with_prompt("Primary goal")
        .items(&goals)
        .default(1)
        .interact()?;
    let primary = match goal_idx {
        0 => PrimaryGoal::Lose,
        1 => PrimaryGoal::Maintain,
        _ => PrimaryGoal::Gain,
    };

    let intensity = if primary == PrimaryGoal::Maintain {
        GoalIntensity::Moderate
    } else {
        let intensities = ["Mild", "Moderate", "Aggressive"];
        let idx = Select::new()
            .with_prompt("How aggressively?")
            .items(&intensities)
            .default(1)
            .interact()?;
        match idx {
            0 => GoalIntensity::Mild,
            1 => GoalIntensity::Moderate,
            _ => GoalIntensity::Aggressive,
        }
    };

    Ok(GoalInput { primary, intensity })
}

/// Resolve a typed food name against the catalog.
///
/// Tries an exact (case-insensitive) match first, then offers the best
/// fuzzy candidate above the similarity threshold for confirmation.
pub fn resolve_food_name(foods: &[&Food], query: &str) -> Result<Option<String>> {
    let query_lower = query.to_lowercase();

    if let Some(food) = foods.iter().find(|f| f.key() == query_lower) {
        return Ok(Some(food.name.clone()));
    }

    let mut candidates: Vec<(&Food, f64)> = foods
        .iter()
        .map(|f| (*f, jaro_winkler(&f.key(), &query_lower)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let Some((best, _)) = candidates.first() else {
        return Ok(None);
    };

    let confirm = Confirm::new()
        .with_prompt(format!("Did you mean '{}'?", best.name))
        .default(true)
        .interact()?;

    Ok(confirm.then(|| best.name.clone()))
}
