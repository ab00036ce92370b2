use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

pub const DEFAULT_INTERVAL_PACE: &str = "04:15";
pub const DEFAULT_MIN_INTERVAL_DISTANCE: f64 = 150.0;
pub const DEFAULT_NAME_PATTERN: &str = ".*";
pub const DEFAULT_START_DATE: &str = "2000-01-01";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub intervals: IntervalsConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Interval detection settings [intervals].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IntervalsConfig {
    /// Slowest pace (MM:SS per km) that still counts as an interval effort.
    #[serde(default = "default_interval_pace")]
    pub interval_pace: String,

    /// Minimum distance in meters of the lap that starts the interval block.
    #[serde(default = "default_min_interval_distance")]
    pub min_interval_distance: f64,
}

impl Default for IntervalsConfig {
    fn default() -> Self {
        Self {
            interval_pace: default_interval_pace(),
            min_interval_distance: DEFAULT_MIN_INTERVAL_DISTANCE,
        }
    }
}

/// Activity selection [filter].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Regex searched for in activity names.
    #[serde(default = "default_name_pattern")]
    pub name_pattern: String,

    /// First activity date (YYYY-MM-DD), inclusive.
    #[serde(default = "default_start_date")]
    pub start_date: String,

    /// Last activity date (YYYY-MM-DD), inclusive. Defaults to today.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            name_pattern: default_name_pattern(),
            start_date: default_start_date(),
            end_date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_interval_pace() -> String {
    DEFAULT_INTERVAL_PACE.to_string()
}

const fn default_min_interval_distance() -> f64 {
    DEFAULT_MIN_INTERVAL_DISTANCE
}

fn default_name_pattern() -> String {
    DEFAULT_NAME_PATTERN.to_string()
}

fn default_start_date() -> String {
    DEFAULT_START_DATE.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
