use clap::{Parser, Subcommand};

/// NutriGrade — computes daily macro targets and grades foods against them.
#[derive(Parser, Debug)]
#[command(name = "nutri_grade")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "food_catalog.json")]
    pub file: String,

    /// Path to the settings JSON file.
    #[arg(short, long, default_value = "settings.json")]
    pub settings: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute daily calorie and macro targets from biometrics and activity.
    Goals,

    /// Show the base quality grade for a catalog food.
    Grade {
        /// Food name (fuzzy-matched against the catalog).
        name: String,
    },

    /// Grade a consumed portion of a food against the daily targets.
    Log {
        /// Food name (fuzzy-matched against the catalog).
        name: String,

        /// Amount eaten, in grams.
        grams: f64,
    },

    /// List the food catalog with grade badges.
    List,

    /// Import foods from a CSV file into the catalog.
    Import {
        /// CSV file with Name,Calories,Protein,Carbs,Fats columns.
        #[arg(long)]
        csv: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List
    }
}
