pub mod calculator;
pub mod constants;

pub use calculator::{
    apply_goal_adjustment, compute_bmr, compute_goals, compute_macros, compute_tdee, MacroSplit,
};
pub use constants::*;
