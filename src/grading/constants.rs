// ─────────────────────────────────────────────────────────────────────────────
// Letter grade thresholds and badge colors
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum rounded score for an A grade.
pub const GRADE_A_MIN: u8 = 85;

/// Minimum rounded score for a B grade.
pub const GRADE_B_MIN: u8 = 70;

/// Minimum rounded score for a C grade.
pub const GRADE_C_MIN: u8 = 55;

/// Minimum rounded score for a D grade. Anything below is an F.
pub const GRADE_D_MIN: u8 = 40;

pub const GRADE_A_COLOR: &str = "#4CAF50";
pub const GRADE_B_COLOR: &str = "#8BC34A";
pub const GRADE_C_COLOR: &str = "#FFC107";
pub const GRADE_D_COLOR: &str = "#FF9800";
pub const GRADE_F_COLOR: &str = "#F44336";

// ─────────────────────────────────────────────────────────────────────────────
// Base grade: starting point and calorie-density tiers (per 100 g)
// ─────────────────────────────────────────────────────────────────────────────

/// Starting score before any adjustment.
pub const BASE_SCORE: f64 = 70.0;

/// Below this many kcal/100 g the food earns the full low-calorie bonus.
pub const LOW_CAL_THRESHOLD: f64 = 100.0;
pub const LOW_CAL_BONUS: f64 = 15.0;

/// Below this many kcal/100 g the food earns a smaller bonus.
pub const MODERATE_CAL_THRESHOLD: f64 = 200.0;
pub const MODERATE_CAL_BONUS: f64 = 7.0;

/// Above this, each extra kcal costs `HIGH_CAL_PENALTY_RATE` points.
pub const HIGH_CAL_THRESHOLD: f64 = 350.0;
pub const HIGH_CAL_PENALTY_RATE: f64 = 0.08;

/// Above this, an additional flat penalty applies.
pub const VERY_HIGH_CAL_THRESHOLD: f64 = 500.0;
pub const VERY_HIGH_CAL_PENALTY: f64 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// Base grade: protein tiers (grams per 100 g)
// ─────────────────────────────────────────────────────────────────────────────

pub const HIGH_PROTEIN_THRESHOLD: f64 = 20.0;
pub const HIGH_PROTEIN_BONUS: f64 = 18.0;

pub const MODERATE_PROTEIN_THRESHOLD: f64 = 10.0;
pub const MODERATE_PROTEIN_BONUS: f64 = 10.0;

/// A low-protein food is only penalized when it is also calorie-dense.
pub const LOW_PROTEIN_THRESHOLD: f64 = 5.0;
pub const LOW_PROTEIN_CAL_THRESHOLD: f64 = 150.0;
pub const LOW_PROTEIN_PENALTY: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Base grade: fat quantity and quality
// ─────────────────────────────────────────────────────────────────────────────

/// Grams of fat per 100 g above which the excess penalty ramps in.
pub const FAT_GRAMS_THRESHOLD: f64 = 25.0;
pub const FAT_EXCESS_PENALTY_RATE: f64 = 0.5;

/// Extra penalty when a fatty food carries little protein to show for it.
pub const FAT_PROTEIN_RATIO: f64 = 0.5;
pub const FAT_LOW_PROTEIN_THRESHOLD: f64 = 10.0;
pub const FAT_LOW_PROTEIN_PENALTY: f64 = 10.0;

/// Penalties by share of calories coming from fat.
pub const FAT_PCT_HIGH: f64 = 50.0;
pub const FAT_PCT_HIGH_PENALTY: f64 = 15.0;
pub const FAT_PCT_MODERATE: f64 = 35.0;
pub const FAT_PCT_MODERATE_PENALTY: f64 = 7.0;

// ─────────────────────────────────────────────────────────────────────────────
// Base grade: carb quantity and quality
// ─────────────────────────────────────────────────────────────────────────────

/// Grams of carbs per 100 g above which the excess penalty ramps in,
/// gated on the food being calorie-dense at all.
pub const CARB_GRAMS_THRESHOLD: f64 = 40.0;
pub const CARB_CAL_THRESHOLD: f64 = 100.0;
pub const CARB_EXCESS_PENALTY_RATE: f64 = 0.3;

/// Extra penalty for carb-heavy foods with almost no protein.
pub const CARB_PROTEIN_RATIO: f64 = 0.1;
pub const CARB_LOW_PROTEIN_THRESHOLD: f64 = 7.0;
pub const CARB_LOW_PROTEIN_PENALTY: f64 = 12.0;

/// Penalties by share of calories coming from carbs.
pub const CARB_PCT_HIGH: f64 = 60.0;
pub const CARB_PCT_HIGH_PENALTY: f64 = 15.0;
pub const CARB_PCT_MODERATE: f64 = 50.0;
pub const CARB_PCT_MODERATE_PENALTY: f64 = 7.0;

// ─────────────────────────────────────────────────────────────────────────────
// Base grade: macro balance bonus
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie-share windows that count as "balanced" per macro.
pub const BALANCE_PROTEIN_PCT_MIN: f64 = 15.0;
pub const BALANCE_PROTEIN_PCT_MAX: f64 = 40.0;
pub const BALANCE_FAT_PCT_MIN: f64 = 15.0;
pub const BALANCE_FAT_PCT_MAX: f64 = 40.0;
pub const BALANCE_CARB_PCT_MIN: f64 = 35.0;
pub const BALANCE_CARB_PCT_MAX: f64 = 55.0;

/// Points awarded per macro inside its window.
pub const BALANCE_POINTS_PER_MACRO: f64 = 4.0;

/// All three macros in window (12 points) earns the full bonus.
pub const BALANCE_FULL_THRESHOLD: f64 = 10.0;
pub const BALANCE_FULL_BONUS: f64 = 10.0;

/// Two macros in window (8 points) earns a partial bonus.
pub const BALANCE_PARTIAL_THRESHOLD: f64 = 8.0;
pub const BALANCE_PARTIAL_BONUS: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Base grade: synergy overrides
// ─────────────────────────────────────────────────────────────────────────────

/// High-protein fatty foods (salmon-like profiles).
pub const PROTEIN_FAT_SYNERGY_PROTEIN_MIN: f64 = 18.0;
pub const PROTEIN_FAT_SYNERGY_FAT_PCT_MIN: f64 = 35.0;
pub const PROTEIN_FAT_SYNERGY_BONUS: f64 = 20.0;

/// Mostly-fat, low-carb, low-protein foods (avocado/oil-like profiles).
pub const HEALTHY_FAT_FAT_MIN: f64 = 10.0;
pub const HEALTHY_FAT_CARBS_MAX: f64 = 10.0;
pub const HEALTHY_FAT_PROTEIN_MAX: f64 = 5.0;
pub const HEALTHY_FAT_BONUS: f64 = 20.0;

/// Calorie-dense foods heavy in both fat and carbs with no protein.
pub const IMBALANCE_PROTEIN_MAX: f64 = 5.0;
pub const IMBALANCE_FAT_MIN: f64 = 20.0;
pub const IMBALANCE_CARBS_MIN: f64 = 30.0;
pub const IMBALANCE_CAL_MIN: f64 = 200.0;
pub const IMBALANCE_PENALTY: f64 = 15.0;

/// Low-calorie foods carrying some of every macro (grain-like profiles).
pub const LIGHT_BALANCED_CAL_MAX: f64 = 120.0;
pub const LIGHT_BALANCED_PROTEIN_MIN: f64 = 4.0;
pub const LIGHT_BALANCED_CARBS_MIN: f64 = 20.0;
pub const LIGHT_BALANCED_FAT_MIN: f64 = 2.0;
pub const LIGHT_BALANCED_BONUS: f64 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// Daily entry grade: safe goal substitutes
// ─────────────────────────────────────────────────────────────────────────────

/// Fallback targets used when a daily goal is unset.
pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;
pub const DEFAULT_PROTEIN_GOAL_G: f64 = 100.0;
pub const DEFAULT_CARB_GOAL_G: f64 = 200.0;
pub const DEFAULT_FAT_GOAL_G: f64 = 70.0;

/// Hard lower bound on any goal used as a divisor.
pub const MIN_GOAL_VALUE: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Daily entry grade: portion-share tiers (percent of daily goal)
// ─────────────────────────────────────────────────────────────────────────────

pub const CAL_SHARE_HIGH: f64 = 50.0;
pub const CAL_SHARE_HIGH_PENALTY: f64 = 30.0;
pub const CAL_SHARE_MODERATE: f64 = 35.0;
pub const CAL_SHARE_MODERATE_PENALTY: f64 = 20.0;

pub const FAT_SHARE_HIGH: f64 = 60.0;
pub const FAT_SHARE_HIGH_PENALTY: f64 = 15.0;
pub const FAT_SHARE_MODERATE: f64 = 40.0;
pub const FAT_SHARE_MODERATE_PENALTY: f64 = 7.0;

pub const CARB_SHARE_HIGH: f64 = 60.0;
pub const CARB_SHARE_HIGH_PENALTY: f64 = 10.0;
pub const CARB_SHARE_MODERATE: f64 = 45.0;
pub const CARB_SHARE_MODERATE_PENALTY: f64 = 5.0;

/// Protein bonuses only apply when the portion is calorie-light.
pub const PROTEIN_SHARE_HIGH: f64 = 25.0;
pub const PROTEIN_SHARE_HIGH_CAL_CAP: f64 = 30.0;
pub const PROTEIN_SHARE_HIGH_BONUS: f64 = 10.0;
pub const PROTEIN_SHARE_MODERATE: f64 = 15.0;
pub const PROTEIN_SHARE_MODERATE_CAL_CAP: f64 = 20.0;
pub const PROTEIN_SHARE_MODERATE_BONUS: f64 = 5.0;

/// Small portions of poorly graded foods are forgiven.
pub const F_MITIGATION_CAL_SHARE_MAX: f64 = 10.0;
pub const F_MITIGATION_BONUS: f64 = 25.0;
pub const D_MITIGATION_CAL_SHARE_MAX: f64 = 7.0;
pub const D_MITIGATION_BONUS: f64 = 7.0;

/// Large portions of even excellent foods are penalized.
pub const EXCELLENT_SCORE_MIN: u8 = 85;
pub const EXCELLENT_PORTION_CAL_SHARE: f64 = 25.0;
pub const EXCELLENT_PORTION_PENALTY: f64 = 10.0;
