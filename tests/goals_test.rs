use assert_float_eq::*;

use nutri_grade_rs::goals::{compute_bmr, compute_goals, compute_macros, compute_tdee};
use nutri_grade_rs::models::{
    ActivityInput, ActivityLevel, BiometricProfile, EffortIntensity, GoalInput, GoalIntensity,
    JobActivity, PrimaryGoal, Sex,
};

fn make_profile(sex: Sex, age: f64, height: f64, weight: f64, bf: Option<f64>) -> BiometricProfile {
    BiometricProfile {
        age_years: age,
        sex,
        height_cm: height,
        weight_kg: weight,
        body_fat_pct: bf,
    }
}

fn basic(level: ActivityLevel) -> ActivityInput {
    ActivityInput::Basic { level }
}

fn goal(primary: PrimaryGoal, intensity: GoalIntensity) -> GoalInput {
    GoalInput { primary, intensity }
}

#[test]
fn test_basic_sedentary_maintain_reference_case() {
    // 25-year-old male, 180 cm, 80 kg: BMR 1805, TDEE 1805 * 1.2 = 2166.
    let profile = make_profile(Sex::Male, 25.0, 180.0, 80.0, None);
    let activity = basic(ActivityLevel::Sedentary);

    let bmr = compute_bmr(&profile, &activity);
    assert_float_absolute_eq!(bmr, 1805.0, 1e-9);

    let tdee = compute_tdee(bmr, &activity);
    assert_float_absolute_eq!(tdee, 2166.0, 1e-9);

    let goals = compute_goals(
        &profile,
        &activity,
        &goal(PrimaryGoal::Maintain, GoalIntensity::Moderate),
    );
    assert_float_absolute_eq!(goals.calories, 2166.0, 1e-9);
    assert!(!goals.calorie_floor_applied);

    // Sedentary basic tier: 1.2 g/kg protein, 0.9 g/kg fat, rest carbs.
    assert_float_absolute_eq!(goals.protein_g, 96.0, 1e-9);
    assert_float_absolute_eq!(goals.fat_g, 72.0, 1e-9);
    assert_float_absolute_eq!(goals.carbs_g, 284.0, 1e-9);
}

#[test]
fn test_female_floor_clamps_to_exactly_1200() {
    // Small, light, sedentary: an aggressive cut lands under the floor.
    let profile = make_profile(Sex::Female, 30.0, 150.0, 45.0, None);
    let activity = basic(ActivityLevel::Sedentary);

    let goals = compute_goals(
        &profile,
        &activity,
        &goal(PrimaryGoal::Lose, GoalIntensity::Aggressive),
    );
    assert_float_absolute_eq!(goals.calories, 1200.0, 1e-9);
    assert!(goals.calorie_floor_applied);
}

#[test]
fn test_advanced_full_pipeline_with_body_fat() {
    // 80 kg at 25% body fat: LBM 60 kg, Katch-McArdle BMR 1666.
    let profile = make_profile(Sex::Male, 35.0, 178.0, 80.0, Some(25.0));
    let activity = ActivityInput::Advanced {
        job: JobActivity::Standing,
        sleep_hours: 7.0,
        resistance_hours_per_week: 3.5,
        resistance_intensity: EffortIntensity::Light,
        cardio_hours_per_week: 7.0,
        cardio_intensity: EffortIntensity::Vigorous,
    };

    let bmr = compute_bmr(&profile, &activity);
    assert_float_absolute_eq!(bmr, 1666.0, 1e-9);

    // Daily averages: 0.5 h resistance, 1 h cardio, residual 7.5 h.
    // MET-hours: 7*0.95 + 8*2.5 + 0.5*3.5 + 1*9.8 + 7.5*1.3 = 47.95.
    let tdee = compute_tdee(bmr, &activity);
    assert_float_absolute_eq!(tdee, 1666.0 * (47.95 / 24.0), 1e-9);

    let goals = compute_goals(
        &profile,
        &activity,
        &goal(PrimaryGoal::Lose, GoalIntensity::Aggressive),
    );
    // TDEE 3328.53 - 750 = 2578.53, rounded to 2579.
    assert_float_absolute_eq!(goals.calories, 2579.0, 1e-9);
    // Advanced cut: 2.2 g/kg over 60 kg lean mass.
    assert_float_absolute_eq!(goals.protein_g, 132.0, 1e-9);
    // Aggressive cut fat tier uses total weight: 0.7 * 80.
    assert_float_absolute_eq!(goals.fat_g, 56.0, 1e-9);
    assert_float_absolute_eq!(goals.carbs_g, 387.0, 1e-9);
}

#[test]
fn test_gain_protein_tier_applies_on_both_methods() {
    let profile = make_profile(Sex::Male, 28.0, 182.0, 75.0, None);
    let gain = goal(PrimaryGoal::Gain, GoalIntensity::Moderate);

    let split = compute_macros(2800.0, &profile, &basic(ActivityLevel::Active), &gain);
    assert_float_absolute_eq!(split.protein_g, 150.0, 1e-9); // 2.0 g/kg * 75

    let advanced = ActivityInput::Advanced {
        job: JobActivity::Sitting,
        sleep_hours: 8.0,
        resistance_hours_per_week: 4.0,
        resistance_intensity: EffortIntensity::Moderate,
        cardio_hours_per_week: 1.0,
        cardio_intensity: EffortIntensity::Light,
    };
    let split = compute_macros(2800.0, &profile, &advanced, &gain);
    assert_float_absolute_eq!(split.protein_g, 150.0, 1e-9);
}

#[test]
fn test_default_protein_tier_for_active_basic() {
    let profile = make_profile(Sex::Female, 28.0, 165.0, 60.0, None);
    let split = compute_macros(
        2200.0,
        &profile,
        &basic(ActivityLevel::Moderate),
        &goal(PrimaryGoal::Maintain, GoalIntensity::Mild),
    );
    assert_float_absolute_eq!(split.protein_g, 96.0, 1e-9); // 1.6 g/kg * 60
    assert_float_absolute_eq!(split.fat_g, 54.0, 1e-9); // 0.9 g/kg * 60
}

#[test]
fn test_basic_method_never_uses_lean_mass() {
    // Body fat on file is ignored by the basic method, for BMR and macros.
    let with_bf = make_profile(Sex::Male, 25.0, 180.0, 80.0, Some(20.0));
    let without_bf = make_profile(Sex::Male, 25.0, 180.0, 80.0, None);
    let activity = basic(ActivityLevel::Moderate);
    let maintain = goal(PrimaryGoal::Maintain, GoalIntensity::Moderate);

    assert_float_absolute_eq!(
        compute_bmr(&with_bf, &activity),
        compute_bmr(&without_bf, &activity),
        1e-9
    );

    let split_with = compute_macros(2800.0, &with_bf, &activity, &maintain);
    let split_without = compute_macros(2800.0, &without_bf, &activity, &maintain);
    assert_float_absolute_eq!(split_with.protein_g, split_without.protein_g, 1e-9);
}

#[test]
fn test_tdee_multiplier_table() {
    let cases = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::Light, 1.375),
        (ActivityLevel::Moderate, 1.55),
        (ActivityLevel::Active, 1.725),
        (ActivityLevel::VeryActive, 1.9),
    ];
    for (level, mult) in cases {
        assert_float_absolute_eq!(compute_tdee(1800.0, &basic(level)), 1800.0 * mult, 1e-9);
    }
}
