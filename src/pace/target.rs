use serde::Serialize;

use super::format_min_sec;
use super::parse::pace_seconds_per_km;
use crate::error::{PaceIntervalsError, Result};

/// A pace derived as a percentage of a source speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetPace {
    pub percentage: u32,
    /// `MM:SS` per km, seconds truncated.
    pub pace: String,
    pub speed_kph: f64,
}

/// Source speed in km/h for a `MM:SS` per km pace.
///
/// # Errors
/// Returns an error if the pace cannot be parsed.
pub fn source_speed_kph(pace: &str) -> Result<f64> {
    let seconds = pace_seconds_per_km(pace)?;
    Ok(3600.0 / f64::from(seconds))
}

/// Compute target paces for each percentage of the source pace's speed.
///
/// Faster targets use percentages above 100.
///
/// # Errors
/// Returns an error if the pace is malformed or a percentage is zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn target_paces(pace: &str, percentages: &[u32]) -> Result<Vec<TargetPace>> {
    let speed_kph = source_speed_kph(pace)?;

    percentages
        .iter()
        .map(|&percentage| {
            if percentage == 0 {
                return Err(PaceIntervalsError::InvalidPercentage(percentage));
            }
            let target_speed_kph = speed_kph * (f64::from(percentage) / 100.0);
            let min_per_km = 60.0 / target_speed_kph;
            let minutes = min_per_km.trunc();
            let seconds = ((min_per_km - minutes) * 60.0).trunc();

            Ok(TargetPace {
                percentage,
                pace: format_min_sec(minutes as u64, seconds as u64),
                speed_kph: target_speed_kph,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
