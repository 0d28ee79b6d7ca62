use crate::grading::{base_grade, FoodGradeResult};
use crate::models::{CalculatedGoals, Food};

/// Display the computed daily targets with the pipeline intermediates.
pub fn display_goals(bmr: f64, tdee: f64, goals: &CalculatedGoals) {
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("BMR:  {:.0} kcal", bmr);
    println!("TDEE: {:.0} kcal", tdee);
    println!();
    println!("Calories: {:.0} kcal", goals.calories);
    println!("Protein:  {:.0} g", goals.protein_g);
    println!("Carbs:    {:.0} g", goals.carbs_g);
    println!("Fat:      {:.0} g", goals.fat_g);

    if goals.calorie_floor_applied {
        println!();
        println!("Note: the computed goal fell below the minimum safe intake and was raised to the floor.");
    }

    println!();
}

/// Display a grade badge line for one food.
///
/// `None` means the food is missing macro data and gets no badge.
pub fn display_grade(name: &str, grade: Option<&FoodGradeResult>) {
    match grade {
        Some(g) => println!("{} [{}] {} ({})", name, g.letter, g.score, g.color),
        None => println!("{} (not gradeable: missing macro data)", name),
    }
}

/// Display the catalog as a table with a grade badge per row.
pub fn display_catalog(foods: &[&Food]) {
    if foods.is_empty() {
        println!("Catalog is empty. Use 'import --csv <file>' to add foods.");
        return;
    }

    println!();
    println!("=== Food Catalog ({} items) ===", foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        let badge = food
            .macro_profile()
            .and_then(|p| base_grade(&p))
            .map(|g| format!("[{}] {:>3}", g.letter, g.score))
            .unwrap_or_else(|| "[-]  --".to_string());

        let macros = match food.macro_profile() {
            Some(p) => format!(
                "{:>4.0} cal | P:{:<5.1} C:{:<5.1} F:{:<5.1}",
                p.calories, p.protein_g, p.carbs_g, p.fat_g
            ),
            None => "incomplete macro data".to_string(),
        };

        println!(
            "  {:<width$}  {}  {}",
            food.name,
            badge,
            macros,
            width = max_name_len
        );
    }

    println!();
}
