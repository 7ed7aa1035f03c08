//! Scenario comparison: saved calculations, CSV import and batch runs

mod book;
pub mod loader;
mod runner;

pub use book::{ComparisonRow, Scenario, ScenarioBook};
pub use loader::{load_scenarios, load_scenarios_from_reader};
pub use runner::ScenarioRunner;

use crate::error::Result;
use std::path::Path;

impl ScenarioBook {
    /// Build a book from a scenario CSV, keeping the names in the file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut book = Self::new();
        for (name, inputs) in load_scenarios(path)? {
            book.save_named(name, inputs);
        }
        Ok(book)
    }
}
