pub mod cli;
pub mod error;
pub mod goals;
pub mod grading;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{Food, MacroProfile};
