use serde::Serialize;

use crate::grading::constants::*;

/// Letter grade for a food quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Badge color for this letter.
    pub fn color(self) -> &'static str {
        match self {
            LetterGrade::A => GRADE_A_COLOR,
            LetterGrade::B => GRADE_B_COLOR,
            LetterGrade::C => GRADE_C_COLOR,
            LetterGrade::D => GRADE_D_COLOR,
            LetterGrade::F => GRADE_F_COLOR,
        }
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Result of grading a food: letter, rounded 0-100 score, badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoodGradeResult {
    pub letter: LetterGrade,
    pub score: u8,
    pub color: &'static str,
}

/// Map a raw score to a letter grade result.
///
/// The score is clamped to [0, 100] and rounded to the nearest integer
/// before the threshold lookup, so this is total over any finite input.
pub fn map_score(score: f64) -> FoodGradeResult {
    let score = score.clamp(0.0, 100.0).round() as u8;

    let letter = if score >= GRADE_A_MIN {
        LetterGrade::A
    } else if score >= GRADE_B_MIN {
        LetterGrade::B
    } else if score >= GRADE_C_MIN {
        LetterGrade::C
    } else if score >= GRADE_D_MIN {
        LetterGrade::D
    } else {
        LetterGrade::F
    };

    FoodGradeResult {
        letter,
        score,
        color: letter.color(),
    }
}
