pub mod stats;

use serde::Serialize;

use crate::error::Result;
use crate::lap::Lap;
use crate::matcher::Segment;
use crate::pace::Pace;

/// Column names of the CSV representation: workout time, then the interval
/// block and the recovery block with ten columns each.
pub const CSV_HEADERS: [&str; 21] = [
    "Time",
    "I Dist",
    "I count",
    "I avg time",
    "I avg",
    "I max time",
    "I slow",
    "I min time",
    "I fast",
    "I avg HR",
    "I max HR",
    "R Dist",
    "R count",
    "R avg time",
    "R avg",
    "R max time",
    "R slow",
    "R min time",
    "R fast",
    "R avg HR",
    "R max HR",
];

/// Statistics of one group of laps (all intervals or all recoveries).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    /// Average lap distance in meters.
    pub distance: f64,
    pub count: usize,
    pub avg_time: f64,
    pub max_time: f64,
    pub min_time: f64,
    pub avg_pace: Option<Pace>,
    pub slow_pace: Option<Pace>,
    pub fast_pace: Option<Pace>,
    pub avg_hr: u32,
    pub max_hr: u32,
}

impl GroupStats {
    #[must_use]
    pub fn from_laps(laps: &[Lap]) -> Self {
        Self {
            distance: stats::avg_distance(laps),
            count: laps.len(),
            avg_time: stats::avg_time(laps),
            max_time: stats::max_time(laps),
            min_time: stats::min_time(laps),
            avg_pace: stats::avg_pace(laps),
            slow_pace: stats::slowest_pace(laps),
            fast_pace: stats::fastest_pace(laps),
            avg_hr: stats::avg_hr(laps),
            max_hr: stats::max_hr(laps),
        }
    }

    /// The ten CSV fields of this group, in header order.
    #[must_use]
    pub fn csv_fields(&self) -> [String; 10] {
        [
            float_field(self.distance),
            self.count.to_string(),
            float_field(self.avg_time),
            pace_field(self.avg_pace.as_ref()),
            float_field(self.max_time),
            pace_field(self.slow_pace.as_ref()),
            float_field(self.min_time),
            pace_field(self.fast_pace.as_ref()),
            self.avg_hr.to_string(),
            self.max_hr.to_string(),
        ]
    }
}

/// Float columns always keep a decimal point: `400.0`, `134.5`.
fn float_field(value: f64) -> String {
    format!("{value:?}")
}

fn pace_field(pace: Option<&Pace>) -> String {
    pace.map(ToString::to_string).unwrap_or_default()
}

/// Nested representation of a workout summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutReport {
    pub time: String,
    pub intervals: GroupStats,
    pub recoveries: GroupStats,
}

/// Interval statistics of one workout.
///
/// Built once from the matcher's segments; statistics are recomputed on each
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    time: String,
    segments: Vec<Segment>,
}

impl WorkoutSummary {
    #[must_use]
    pub fn new(segments: Vec<Segment>, time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            segments,
        }
    }

    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn interval_laps(&self) -> Vec<Lap> {
        self.laps_where(true)
    }

    #[must_use]
    pub fn recovery_laps(&self) -> Vec<Lap> {
        self.laps_where(false)
    }

    #[must_use]
    pub fn intervals(&self) -> GroupStats {
        GroupStats::from_laps(&self.interval_laps())
    }

    #[must_use]
    pub fn recoveries(&self) -> GroupStats {
        GroupStats::from_laps(&self.recovery_laps())
    }

    #[must_use]
    pub fn csv_header() -> String {
        CSV_HEADERS.join(",")
    }

    /// One CSV row matching [`WorkoutSummary::csv_header`]. Absent paces are
    /// left empty.
    #[must_use]
    pub fn csv(&self) -> String {
        let mut fields = Vec::with_capacity(CSV_HEADERS.len());
        fields.push(self.time.clone());
        fields.extend(self.intervals().csv_fields());
        fields.extend(self.recoveries().csv_fields());
        fields.join(",")
    }

    #[must_use]
    pub fn report(&self) -> WorkoutReport {
        WorkoutReport {
            time: self.time.clone(),
            intervals: self.intervals(),
            recoveries: self.recoveries(),
        }
    }

    /// The report as a JSON tree.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.report())?)
    }

    fn laps_where(&self, interval: bool) -> Vec<Lap> {
        self.segments
            .iter()
            .filter(|segment| segment.is_interval() == interval)
            .map(|segment| *segment.lap())
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
