mod csv;
mod json;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::summary::WorkoutSummary;

/// Trait for formatting a batch of workout summaries.
pub trait WorkoutFormatter {
    /// Format the workouts into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, workouts: &[WorkoutSummary]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn WorkoutFormatter> {
        match self {
            Self::Csv => Box::new(CsvFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
