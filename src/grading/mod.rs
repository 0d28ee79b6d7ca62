pub mod constants;
pub mod engine;
pub mod mapper;

pub use constants::*;
pub use engine::{base_grade, daily_entry_grade};
pub use mapper::{map_score, FoodGradeResult, LetterGrade};
