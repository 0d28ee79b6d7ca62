use crate::grading::constants::*;
use crate::grading::mapper::{map_score, FoodGradeResult, LetterGrade};
use crate::models::{DailyGoals, MacroProfile, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Percentage of `part` relative to `whole`, 0 when the whole is not positive.
fn pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// One goal value with the unset sentinel replaced and floored.
fn safe_goal(value: f64, fallback: f64) -> f64 {
    let value = if value.is_finite() && value != 0.0 {
        value
    } else {
        fallback
    };
    value.max(MIN_GOAL_VALUE)
}

/// Goals with every unset (zero/non-finite) value replaced by its safe
/// default, so portion shares never divide by a user-supplied zero.
fn safe_goals(goals: &DailyGoals) -> DailyGoals {
    DailyGoals {
        calories: safe_goal(goals.calories, DEFAULT_CALORIE_GOAL),
        protein_g: safe_goal(goals.protein_g, DEFAULT_PROTEIN_GOAL_G),
        carbs_g: safe_goal(goals.carbs_g, DEFAULT_CARB_GOAL_G),
        fat_g: safe_goal(goals.fat_g, DEFAULT_FAT_GOAL_G),
    }
}

/// Grade a food's per-100 g macro profile.
///
/// Returns `None` when the profile is ungradeable (any field non-finite
/// or negative); the caller renders no badge in that case.
pub fn base_grade(food: &MacroProfile) -> Option<FoodGradeResult> {
    if !food.is_plausible() {
        return None;
    }

    let MacroProfile {
        calories,
        protein_g: protein,
        carbs_g: carbs,
        fat_g: fat,
    } = *food;

    let mut score = BASE_SCORE;

    // Calorie density per 100 g.
    if calories < LOW_CAL_THRESHOLD {
        score += LOW_CAL_BONUS;
    } else if calories < MODERATE_CAL_THRESHOLD {
        score += MODERATE_CAL_BONUS;
    }
    if calories > HIGH_CAL_THRESHOLD {
        score -= (calories - HIGH_CAL_THRESHOLD) * HIGH_CAL_PENALTY_RATE;
    }
    if calories > VERY_HIGH_CAL_THRESHOLD {
        score -= VERY_HIGH_CAL_PENALTY;
    }

    // Protein quantity.
    if protein > HIGH_PROTEIN_THRESHOLD {
        score += HIGH_PROTEIN_BONUS;
    } else if protein > MODERATE_PROTEIN_THRESHOLD {
        score += MODERATE_PROTEIN_BONUS;
    } else if protein < LOW_PROTEIN_THRESHOLD && calories > LOW_PROTEIN_CAL_THRESHOLD {
        score -= LOW_PROTEIN_PENALTY;
    }

    // Fat quantity and quality.
    let fat_pct = pct(fat * KCAL_PER_G_FAT, calories);
    if fat > FAT_GRAMS_THRESHOLD {
        score -= (fat - FAT_GRAMS_THRESHOLD) * FAT_EXCESS_PENALTY_RATE;
        if protein < fat * FAT_PROTEIN_RATIO && protein < FAT_LOW_PROTEIN_THRESHOLD {
            score -= FAT_LOW_PROTEIN_PENALTY;
        }
    }
    if fat_pct > FAT_PCT_HIGH {
        score -= FAT_PCT_HIGH_PENALTY;
    } else if fat_pct > FAT_PCT_MODERATE {
        score -= FAT_PCT_MODERATE_PENALTY;
    }

    // Carb quantity and quality.
    let carb_pct = pct(carbs * KCAL_PER_G_CARBS, calories);
    if carbs > CARB_GRAMS_THRESHOLD && calories > CARB_CAL_THRESHOLD {
        score -= (carbs - CARB_GRAMS_THRESHOLD) * CARB_EXCESS_PENALTY_RATE;
        if protein < carbs * CARB_PROTEIN_RATIO && protein < CARB_LOW_PROTEIN_THRESHOLD {
            score -= CARB_LOW_PROTEIN_PENALTY;
        }
    }
    if carb_pct > CARB_PCT_HIGH {
        score -= CARB_PCT_HIGH_PENALTY;
    } else if carb_pct > CARB_PCT_MODERATE {
        score -= CARB_PCT_MODERATE_PENALTY;
    }

    // Macro balance bonus.
    let protein_pct = pct(protein * KCAL_PER_G_PROTEIN, calories);
    let mut balance_points = 0.0;
    if (BALANCE_PROTEIN_PCT_MIN..=BALANCE_PROTEIN_PCT_MAX).contains(&protein_pct) {
        balance_points += BALANCE_POINTS_PER_MACRO;
    }
    if (BALANCE_FAT_PCT_MIN..=BALANCE_FAT_PCT_MAX).contains(&fat_pct) {
        balance_points += BALANCE_POINTS_PER_MACRO;
    }
    if (BALANCE_CARB_PCT_MIN..=BALANCE_CARB_PCT_MAX).contains(&carb_pct) {
        balance_points += BALANCE_POINTS_PER_MACRO;
    }
    if balance_points >= BALANCE_FULL_THRESHOLD {
        score += BALANCE_FULL_BONUS;
    } else if balance_points >= BALANCE_PARTIAL_THRESHOLD {
        score += BALANCE_PARTIAL_BONUS;
    }

    // Synergy overrides, each applied independently.
    if protein > PROTEIN_FAT_SYNERGY_PROTEIN_MIN && fat_pct > PROTEIN_FAT_SYNERGY_FAT_PCT_MIN {
        score += PROTEIN_FAT_SYNERGY_BONUS;
    }
    if fat > HEALTHY_FAT_FAT_MIN
        && carbs < HEALTHY_FAT_CARBS_MAX
        && protein < HEALTHY_FAT_PROTEIN_MAX
    {
        score += HEALTHY_FAT_BONUS;
    }
    if protein < IMBALANCE_PROTEIN_MAX
        && fat > IMBALANCE_FAT_MIN
        && carbs > IMBALANCE_CARBS_MIN
        && calories > IMBALANCE_CAL_MIN
    {
        score -= IMBALANCE_PENALTY;
    }
    if calories <= LIGHT_BALANCED_CAL_MAX
        && protein >= LIGHT_BALANCED_PROTEIN_MIN
        && carbs >= LIGHT_BALANCED_CARBS_MIN
        && fat >= LIGHT_BALANCED_FAT_MIN
    {
        score += LIGHT_BALANCED_BONUS;
    }

    Some(map_score(score))
}

/// Grade a consumed portion of a food against the daily goals.
///
/// Starts from the base grade and adjusts for how much of each daily
/// target the portion uses up. A non-positive portion returns the base
/// grade unchanged.
pub fn daily_entry_grade(
    food: &MacroProfile,
    consumed_grams: f64,
    goals: &DailyGoals,
) -> Option<FoodGradeResult> {
    let base = base_grade(food)?;
    if consumed_grams <= 0.0 {
        return Some(base);
    }

    let goals = safe_goals(goals);
    let consumed = food.scaled(consumed_grams / 100.0);

    let calorie_share = pct(consumed.calories, goals.calories);
    let protein_share = pct(consumed.protein_g, goals.protein_g);
    let carb_share = pct(consumed.carbs_g, goals.carbs_g);
    let fat_share = pct(consumed.fat_g, goals.fat_g);

    let mut score = f64::from(base.score);

    if calorie_share > CAL_SHARE_HIGH {
        score -= CAL_SHARE_HIGH_PENALTY;
    } else if calorie_share > CAL_SHARE_MODERATE {
        score -= CAL_SHARE_MODERATE_PENALTY;
    }

    if fat_share > FAT_SHARE_HIGH {
        score -= FAT_SHARE_HIGH_PENALTY;
    } else if fat_share > FAT_SHARE_MODERATE {
        score -= FAT_SHARE_MODERATE_PENALTY;
    }

    if carb_share > CARB_SHARE_HIGH {
        score -= CARB_SHARE_HIGH_PENALTY;
    } else if carb_share > CARB_SHARE_MODERATE {
        score -= CARB_SHARE_MODERATE_PENALTY;
    }

    if protein_share > PROTEIN_SHARE_HIGH && calorie_share < PROTEIN_SHARE_HIGH_CAL_CAP {
        score += PROTEIN_SHARE_HIGH_BONUS;
    } else if protein_share > PROTEIN_SHARE_MODERATE
        && calorie_share < PROTEIN_SHARE_MODERATE_CAL_CAP
    {
        score += PROTEIN_SHARE_MODERATE_BONUS;
    }

    // Small portions of poorly graded foods are forgiven.
    if base.letter == LetterGrade::F && calorie_share < F_MITIGATION_CAL_SHARE_MAX {
        score += F_MITIGATION_BONUS;
    } else if base.letter == LetterGrade::D && calorie_share < D_MITIGATION_CAL_SHARE_MAX {
        score += D_MITIGATION_BONUS;
    }

    // Even an excellent food drags the day down when eaten in bulk.
    if base.score >= EXCELLENT_SCORE_MIN && calorie_share > EXCELLENT_PORTION_CAL_SHARE {
        score -= EXCELLENT_PORTION_PENALTY;
    }

    Some(map_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(calories: f64, protein: f64, carbs: f64, fat: f64) -> MacroProfile {
        MacroProfile {
            calories,
            protein_g: protein,
            carbs_g: carbs,
            fat_g: fat,
        }
    }

    fn goals(calories: f64, protein: f64, carbs: f64, fat: f64) -> DailyGoals {
        DailyGoals {
            calories,
            protein_g: protein,
            carbs_g: carbs,
            fat_g: fat,
        }
    }

    #[test]
    fn test_chicken_breast_base_grade() {
        // 70 + 7 (under 200 kcal) + 18 (high protein) = 95
        let grade = base_grade(&profile(165.0, 31.0, 0.0, 3.6)).unwrap();
        assert_eq!(grade.letter, LetterGrade::A);
        assert_eq!(grade.score, 95);
    }

    #[test]
    fn test_glazed_donut_base_grade() {
        let grade = base_grade(&profile(452.0, 4.9, 51.0, 25.0)).unwrap();
        assert_eq!(grade.letter, LetterGrade::F);
        assert_eq!(grade.score, 15);
    }

    #[test]
    fn test_avocado_base_grade() {
        // Low protein and very fatty, but the healthy-fat synergy lifts it back.
        let grade = base_grade(&profile(160.0, 2.0, 9.0, 15.0)).unwrap();
        assert_eq!(grade.letter, LetterGrade::B);
        assert_eq!(grade.score, 72);
    }

    #[test]
    fn test_zero_calorie_food_does_not_divide() {
        let grade = base_grade(&profile(0.0, 0.0, 0.0, 0.0)).unwrap();
        // 70 + 15 low-calorie bonus, no percentage tier can fire.
        assert_eq!(grade.score, 85);
        assert_eq!(grade.letter, LetterGrade::A);
    }

    #[test]
    fn test_ungradeable_profiles() {
        assert!(base_grade(&profile(f64::NAN, 10.0, 10.0, 10.0)).is_none());
        assert!(base_grade(&profile(100.0, -1.0, 10.0, 10.0)).is_none());
        assert!(base_grade(&profile(f64::INFINITY, 10.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn test_zero_grams_returns_base_grade() {
        let food = profile(165.0, 31.0, 0.0, 3.6);
        let g = goals(2000.0, 150.0, 200.0, 70.0);
        assert_eq!(daily_entry_grade(&food, 0.0, &g), base_grade(&food));
        assert_eq!(daily_entry_grade(&food, -5.0, &g), base_grade(&food));
    }

    #[test]
    fn test_zero_goals_fall_back_to_defaults() {
        let food = profile(165.0, 31.0, 0.0, 3.6);
        let unset = DailyGoals::default();
        let explicit = goals(2000.0, 100.0, 200.0, 70.0);
        assert_eq!(
            daily_entry_grade(&food, 150.0, &unset),
            daily_entry_grade(&food, 150.0, &explicit)
        );
    }

    #[test]
    fn test_large_portion_drops_excellent_food() {
        let chicken = profile(165.0, 31.0, 0.0, 3.6);
        let g = goals(2200.0, 180.0, 250.0, 70.0);

        let base = base_grade(&chicken).unwrap();
        assert_eq!(base.letter, LetterGrade::A);

        // 600 g: 990 kcal is 45% of the calorie goal (-20), and a big
        // serving of a top-scored food costs a further 10.
        let entry = daily_entry_grade(&chicken, 600.0, &g).unwrap();
        assert_eq!(entry.score, 65);
        assert_eq!(entry.letter, LetterGrade::C);
    }

    #[test]
    fn test_small_portion_of_junk_food_is_forgiven() {
        let donut = profile(452.0, 4.9, 51.0, 25.0);
        let g = goals(2200.0, 180.0, 250.0, 70.0);

        // 40 g is 180.8 kcal = 8.2% of the calorie goal: F mitigation fires.
        let entry = daily_entry_grade(&donut, 40.0, &g).unwrap();
        let base = base_grade(&donut).unwrap();
        assert!(entry.score > base.score);
        assert_eq!(entry.score, base.score + 25);
    }

    #[test]
    fn test_protein_heavy_light_portion_bonus() {
        let chicken = profile(165.0, 31.0, 0.0, 3.6);
        let g = goals(2200.0, 180.0, 250.0, 70.0);

        // 150 g: 11.3% of calories, 25.8% of protein goal -> +10, capped at 100.
        let entry = daily_entry_grade(&chicken, 150.0, &g).unwrap();
        assert_eq!(entry.score, 100);
        assert_eq!(entry.letter, LetterGrade::A);
    }
}
