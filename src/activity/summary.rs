use std::path::Path;

use serde::Deserialize;

use crate::error::{PaceIntervalsError, Result};

/// The parts of an exported activity summary that are used for filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActivitySummary {
    #[serde(rename = "activityName", default)]
    pub activity_name: Option<String>,
}

impl ActivitySummary {
    /// The activity name, `None` when it is missing or empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.activity_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Read an activity summary JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a JSON object.
pub fn read_summary(path: &Path) -> Result<ActivitySummary> {
    let content = std::fs::read_to_string(path).map_err(|source| PaceIntervalsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| PaceIntervalsError::SummaryParse {
        path: path.to_path_buf(),
        source,
    })
}
