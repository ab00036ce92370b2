//! Pace values and pace/time string parsing.
//!
//! A pace is the time needed to cover one kilometer, rendered as `MM:SS`.

mod parse;
mod target;

pub use parse::{parse_race_time, pace_seconds_per_km, speed_from_pace};
pub use target::{TargetPace, source_speed_kph, target_paces};

use std::fmt;

use serde::Serialize;

use crate::error::{PaceIntervalsError, Result};

/// A pace per kilometer, formatted as zero-padded `MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pace {
    formatted: String,
}

impl Pace {
    /// Compute the pace for covering `distance_m` meters in `time_s` seconds.
    ///
    /// Minutes are floored and seconds rounded (halves to even) from the
    /// fractional minute.
    /// Rounding is not carried into the minutes, so `04:60` can occur.
    ///
    /// # Errors
    /// Returns [`PaceIntervalsError::DegeneratePace`] if the time is not
    /// positive, the distance is not positive, or either is not finite.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compute(distance_m: f64, time_s: f64) -> Result<Self> {
        if !distance_m.is_finite() || !time_s.is_finite() || time_s <= 0.0 || distance_m <= 0.0 {
            return Err(PaceIntervalsError::DegeneratePace { distance_m, time_s });
        }

        let min_per_km = (time_s / 60.0) / (distance_m / 1000.0);
        let minutes = min_per_km.floor();
        let seconds = ((min_per_km - minutes) * 60.0).round_ties_even();

        Ok(Self {
            formatted: format_min_sec(minutes as u64, seconds as u64),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.formatted
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Pad minutes and seconds to two digits each, e.g. `7` becomes `07`.
pub(crate) fn format_min_sec(minutes: u64, seconds: u64) -> String {
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
#[path = "pace_tests.rs"]
mod tests;
