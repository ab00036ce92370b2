use crate::error::Result;
use crate::summary::WorkoutSummary;

use super::WorkoutFormatter;

/// The header line followed by one line per workout.
pub struct CsvFormatter;

impl WorkoutFormatter for CsvFormatter {
    fn format(&self, workouts: &[WorkoutSummary]) -> Result<String> {
        let mut output = WorkoutSummary::csv_header();
        output.push('\n');
        for workout in workouts {
            output.push_str(&workout.csv());
            output.push('\n');
        }
        Ok(output)
    }
}
