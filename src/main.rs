use clap::Parser;
use std::path::Path;

use nutri_grade_rs::cli::{Cli, Command};
use nutri_grade_rs::error::Result;
use nutri_grade_rs::goals::{compute_bmr, compute_goals, compute_tdee};
use nutri_grade_rs::grading::{base_grade, daily_entry_grade};
use nutri_grade_rs::interface::{
    display_catalog, display_goals, display_grade, prompt_activity, prompt_biometrics,
    prompt_goal, prompt_yes_no, resolve_food_name,
};
use nutri_grade_rs::models::{DailyGoals, Settings};
use nutri_grade_rs::state::{
    import_foods_csv, load_foods, load_settings, save_foods, save_settings, FoodCatalog,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Goals => cmd_goals(&cli.settings),
        Command::Grade { name } => cmd_grade(&cli.file, &name),
        Command::Log { name, grams } => cmd_log(&cli.file, &cli.settings, &name, grams),
        Command::List => cmd_list(&cli.file),
        Command::Import { csv } => cmd_import(&cli.file, &csv),
    }
}

/// Load the catalog, or explain how to create one.
fn load_catalog(file_path: &str) -> Result<Option<FoodCatalog>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Food catalog not found: {}", file_path);
        eprintln!("Use 'import --csv <file>' to create one.");
        return Ok(None);
    }

    let foods = load_foods(path)?;
    Ok(Some(FoodCatalog::new(foods)))
}

/// Run the goal wizard and optionally persist the result.
fn cmd_goals(settings_path: &str) -> Result<()> {
    let biometrics = prompt_biometrics()?;
    let activity = prompt_activity()?;
    let goal = prompt_goal()?;

    let bmr = compute_bmr(&biometrics, &activity);
    let tdee = compute_tdee(bmr, &activity);
    let goals = compute_goals(&biometrics, &activity, &goal);

    display_goals(bmr, tdee, &goals);

    let save = prompt_yes_no("Save these targets?", true)?;
    if save {
        let settings = Settings {
            biometrics,
            activity,
            goal,
            goals,
        };
        save_settings(settings_path, &settings)?;
        println!("Settings saved to {}.", settings_path);
    }

    Ok(())
}

/// Show the base grade for one catalog food.
fn cmd_grade(file_path: &str, name: &str) -> Result<()> {
    let Some(catalog) = load_catalog(file_path)? else {
        return Ok(());
    };

    let foods = catalog.all_foods();
    let Some(resolved) = resolve_food_name(&foods, name)? else {
        println!("No matching food found for '{}'", name);
        return Ok(());
    };

    let food = catalog.require_food(&resolved)?;
    let grade = food.macro_profile().and_then(|p| base_grade(&p));
    display_grade(&food.name, grade.as_ref());

    Ok(())
}

/// Grade a consumed portion against the saved daily targets.
fn cmd_log(file_path: &str, settings_path: &str, name: &str, grams: f64) -> Result<()> {
    let Some(catalog) = load_catalog(file_path)? else {
        return Ok(());
    };

    let foods = catalog.all_foods();
    let Some(resolved) = resolve_food_name(&foods, name)? else {
        println!("No matching food found for '{}'", name);
        return Ok(());
    };

    let daily_goals = if Path::new(settings_path).exists() {
        load_settings(settings_path)?.goals.to_daily_goals()
    } else {
        println!("No saved targets ({}), grading against defaults.", settings_path);
        DailyGoals::default()
    };

    let food = catalog.require_food(&resolved)?;
    let grade = food
        .macro_profile()
        .and_then(|p| daily_entry_grade(&p, grams, &daily_goals));

    let label = format!("{} ({:.0} g)", food.name, grams);
    display_grade(&label, grade.as_ref());

    Ok(())
}

/// List the catalog with grade badges.
fn cmd_list(file_path: &str) -> Result<()> {
    let Some(catalog) = load_catalog(file_path)? else {
        return Ok(());
    };

    println!("Loaded {} foods", catalog.len());
    display_catalog(&catalog.all_foods());

    Ok(())
}

/// Import foods from CSV and merge them into the catalog.
fn cmd_import(file_path: &str, csv_path: &str) -> Result<()> {
    let imported = import_foods_csv(csv_path)?;
    if imported.is_empty() {
        println!("No foods found in {}.", csv_path);
        return Ok(());
    }

    let existing = if Path::new(file_path).exists() {
        load_foods(file_path)?
    } else {
        Vec::new()
    };

    let mut catalog = FoodCatalog::new(existing);
    let (added, updated) = catalog.merge(imported);

    save_foods(file_path, &catalog.to_foods())?;
    println!(
        "Imported {} new and updated {} foods ({} total).",
        added,
        updated,
        catalog.len()
    );

    Ok(())
}
