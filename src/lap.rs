use serde::Serialize;

use crate::error::{PaceIntervalsError, Result};

/// One recorded lap segment of a run.
///
/// Laps built through [`Lap::new`] or [`Lap::parse`] always have a positive
/// duration. Only the aggregate of an empty slice has zero time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Lap {
    distance: f64,
    time: f64,
    #[serde(rename = "avgHR")]
    avg_hr: u32,
    #[serde(rename = "maxHR")]
    max_hr: u32,
}

impl Lap {
    /// Create a lap from numeric values.
    ///
    /// # Errors
    /// Returns [`PaceIntervalsError::InvalidLap`] if the distance is negative,
    /// the time is not positive, or either is not finite.
    pub fn new(distance: f64, time: f64, avg_hr: u32, max_hr: u32) -> Result<Self> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(invalid("distance", distance));
        }
        if !time.is_finite() || time <= 0.0 {
            return Err(invalid("time", time));
        }

        Ok(Self {
            distance,
            time,
            avg_hr,
            max_hr,
        })
    }

    /// Create a lap from the untyped text values of a recorded activity.
    ///
    /// # Errors
    /// Returns [`PaceIntervalsError::InvalidLap`] if a value is not numeric
    /// or violates the constraints of [`Lap::new`].
    pub fn parse(distance: &str, time: &str, avg_hr: &str, max_hr: &str) -> Result<Self> {
        Self::new(
            parse_float("distance", distance)?,
            parse_float("time", time)?,
            parse_heart_rate("avg_hr", avg_hr)?,
            parse_heart_rate("max_hr", max_hr)?,
        )
    }

    /// Merge consecutive laps into one aggregate lap.
    ///
    /// Distance and time are summed and `max_hr` is the highest of all laps.
    /// `avg_hr` is weighted by each lap's heartbeat count, so longer laps
    /// count more. Heartbeats and the result round halves to even.
    /// An empty slice yields a zero lap.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn combine(laps: &[Self]) -> Self {
        if laps.is_empty() {
            return Self::default();
        }

        let distance = laps.iter().map(|lap| lap.distance).sum();
        let time: f64 = laps.iter().map(|lap| lap.time).sum();
        let max_hr = laps.iter().map(|lap| lap.max_hr).max().unwrap_or(0);
        let heartbeats: f64 = laps.iter().map(Self::heartbeats).sum();
        let avg_hr = if time > 0.0 {
            (heartbeats / (time / 60.0)).round_ties_even() as u32
        } else {
            0
        };

        Self {
            distance,
            time,
            avg_hr,
            max_hr,
        }
    }

    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub const fn avg_hr(&self) -> u32 {
        self.avg_hr
    }

    #[must_use]
    pub const fn max_hr(&self) -> u32 {
        self.max_hr
    }

    /// Speed in meters per second, `None` for a zero-duration lap.
    #[must_use]
    pub fn pace_mps(&self) -> Option<f64> {
        (self.time > 0.0).then(|| self.distance / self.time)
    }

    fn heartbeats(&self) -> f64 {
        (f64::from(self.avg_hr) * (self.time / 60.0)).round_ties_even()
    }
}

fn invalid(field: &'static str, value: impl ToString) -> PaceIntervalsError {
    PaceIntervalsError::InvalidLap {
        field,
        value: value.to_string(),
    }
}

fn parse_float(field: &'static str, value: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| invalid(field, value))
}

fn parse_heart_rate(field: &'static str, value: &str) -> Result<u32> {
    value.trim().parse().map_err(|_| invalid(field, value))
}

#[cfg(test)]
#[path = "lap_tests.rs"]
mod tests;
