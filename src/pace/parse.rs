use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PaceIntervalsError, Result};

static PACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}):(\d{2})$").expect("Invalid regex"));

static RACE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d{2}):)?(\d{2}):(\d{2})$").expect("Invalid regex")
});

/// Parse a `MM:SS` pace string into seconds per kilometer.
///
/// # Errors
/// Returns [`PaceIntervalsError::InvalidPace`] if the string is not `MM:SS`
/// or describes a zero pace.
pub fn pace_seconds_per_km(pace: &str) -> Result<u32> {
    let caps = PACE_PATTERN
        .captures(pace.trim())
        .ok_or_else(|| PaceIntervalsError::InvalidPace(pace.to_string()))?;

    let minutes = parse_two_digits(&caps[1]);
    let seconds = parse_two_digits(&caps[2]);
    let total = minutes * 60 + seconds;
    if total == 0 {
        return Err(PaceIntervalsError::InvalidPace(pace.to_string()));
    }
    Ok(total)
}

/// Convert a `MM:SS` per km pace into a speed in meters per second.
///
/// # Errors
/// Returns [`PaceIntervalsError::InvalidPace`] if the pace cannot be parsed.
pub fn speed_from_pace(pace: &str) -> Result<f64> {
    let seconds = pace_seconds_per_km(pace)?;
    Ok(1000.0 / f64::from(seconds))
}

/// Parse a `[HH:]MM:SS` race time into seconds.
///
/// # Errors
/// Returns [`PaceIntervalsError::InvalidTime`] if the string does not match.
pub fn parse_race_time(time: &str) -> Result<f64> {
    let caps = RACE_TIME_PATTERN
        .captures(time.trim())
        .ok_or_else(|| PaceIntervalsError::InvalidTime(time.to_string()))?;

    let hours = caps.get(1).map_or(0, |m| parse_two_digits(m.as_str()));
    let minutes = parse_two_digits(&caps[2]);
    let seconds = parse_two_digits(&caps[3]);

    Ok(f64::from(hours * 3600 + minutes * 60 + seconds))
}

// The patterns only admit two ASCII digits per group.
fn parse_two_digits(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
