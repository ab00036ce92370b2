use crate::error::Result;
use crate::summary::{WorkoutReport, WorkoutSummary};

use super::WorkoutFormatter;

/// A pretty-printed JSON array of workout reports.
pub struct JsonFormatter;

impl WorkoutFormatter for JsonFormatter {
    fn format(&self, workouts: &[WorkoutSummary]) -> Result<String> {
        let reports: Vec<WorkoutReport> = workouts.iter().map(WorkoutSummary::report).collect();
        let mut output = serde_json::to_string_pretty(&reports)?;
        output.push('\n');
        Ok(output)
    }
}
