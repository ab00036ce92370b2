use std::path::Path;

use serde::Deserialize;

use crate::error::{PaceIntervalsError, Result};
use crate::lap::Lap;

/// Extract the laps of every activity in a TCX document, in document order.
///
/// # Errors
/// Returns [`PaceIntervalsError::TcxSyntax`] for malformed XML and
/// [`PaceIntervalsError::InvalidLap`] if a lap lacks one of its time,
/// distance or heart-rate values or a value is not numeric.
pub fn parse_tcx_laps(xml: &str) -> Result<Vec<Lap>> {
    let tcx: TrainingCenterDatabase = quick_xml::de::from_str(xml)?;

    tcx.activities
        .into_iter()
        .flat_map(|activities| activities.activity)
        .flat_map(|activity| activity.lap)
        .map(TcxLap::into_lap)
        .collect()
}

/// Read the laps of a TCX file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TCX, or holds
/// an invalid lap.
pub fn read_tcx_laps(path: &Path) -> Result<Vec<Lap>> {
    let content = std::fs::read_to_string(path).map_err(|source| PaceIntervalsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tcx_laps(&content).map_err(|e| match e {
        PaceIntervalsError::TcxSyntax(source) => PaceIntervalsError::TcxParse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

// TCX XML structures

#[derive(Debug, Deserialize)]
#[serde(rename = "TrainingCenterDatabase")]
struct TrainingCenterDatabase {
    #[serde(rename = "Activities")]
    activities: Option<Activities>,
}

#[derive(Debug, Deserialize)]
struct Activities {
    #[serde(rename = "Activity", default)]
    activity: Vec<Activity>,
}

#[derive(Debug, Deserialize)]
struct Activity {
    #[serde(rename = "Lap", default)]
    lap: Vec<TcxLap>,
}

#[derive(Debug, Deserialize)]
struct TcxLap {
    #[serde(rename = "TotalTimeSeconds")]
    total_time_seconds: Option<String>,
    #[serde(rename = "DistanceMeters")]
    distance_meters: Option<String>,
    #[serde(rename = "AverageHeartRateBpm")]
    average_heart_rate: Option<HeartRate>,
    #[serde(rename = "MaximumHeartRateBpm")]
    maximum_heart_rate: Option<HeartRate>,
}

#[derive(Debug, Deserialize)]
struct HeartRate {
    #[serde(rename = "Value")]
    value: Option<String>,
}

impl TcxLap {
    fn into_lap(self) -> Result<Lap> {
        Lap::parse(
            self.distance_meters.as_deref().unwrap_or_default(),
            self.total_time_seconds.as_deref().unwrap_or_default(),
            heart_rate(self.average_heart_rate.as_ref()),
            heart_rate(self.maximum_heart_rate.as_ref()),
        )
    }
}

fn heart_rate(rate: Option<&HeartRate>) -> &str {
    rate.and_then(|rate| rate.value.as_deref()).unwrap_or_default()
}

#[cfg(test)]
#[path = "tcx_tests.rs"]
mod tests;
