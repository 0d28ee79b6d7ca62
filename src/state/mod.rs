mod manager;
mod persistence;

pub use manager::FoodCatalog;
pub use persistence::{import_foods_csv, load_foods, load_settings, save_foods, save_settings};
