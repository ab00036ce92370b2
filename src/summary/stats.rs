//! Aggregate statistics over a group of laps.
//!
//! Every function accepts an empty group and returns a zero or absent value.
//! Halves round to even.

use crate::lap::Lap;
use crate::pace::Pace;

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[allow(clippy::cast_precision_loss)]
fn mean(laps: &[Lap], value: impl Fn(&Lap) -> f64) -> f64 {
    if laps.is_empty() {
        return 0.0;
    }
    laps.iter().map(value).sum::<f64>() / laps.len() as f64
}

#[must_use]
pub fn avg_time(laps: &[Lap]) -> f64 {
    round2(mean(laps, Lap::time))
}

#[must_use]
pub fn max_time(laps: &[Lap]) -> f64 {
    laps.iter()
        .map(Lap::time)
        .reduce(f64::max)
        .map_or(0.0, round2)
}

#[must_use]
pub fn min_time(laps: &[Lap]) -> f64 {
    laps.iter()
        .map(Lap::time)
        .reduce(f64::min)
        .map_or(0.0, round2)
}

#[must_use]
pub fn avg_distance(laps: &[Lap]) -> f64 {
    round2(mean(laps, Lap::distance))
}

/// Pace over the whole group: total distance divided by total time.
#[must_use]
pub fn avg_pace(laps: &[Lap]) -> Option<Pace> {
    if laps.is_empty() {
        return None;
    }
    let distance: f64 = laps.iter().map(Lap::distance).sum();
    let time: f64 = laps.iter().map(Lap::time).sum();
    Pace::compute(distance, time).ok()
}

/// Pace of the slowest lap. Ties go to the earliest lap.
#[must_use]
pub fn slowest_pace(laps: &[Lap]) -> Option<Pace> {
    extreme_lap(laps, |candidate, best| candidate < best).and_then(lap_pace)
}

/// Pace of the fastest lap. Ties go to the earliest lap.
#[must_use]
pub fn fastest_pace(laps: &[Lap]) -> Option<Pace> {
    extreme_lap(laps, |candidate, best| candidate > best).and_then(lap_pace)
}

/// Mean of the per-lap average heart rates, not weighted by duration.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn avg_hr(laps: &[Lap]) -> u32 {
    mean(laps, |lap| f64::from(lap.avg_hr())).round_ties_even() as u32
}

#[must_use]
pub fn max_hr(laps: &[Lap]) -> u32 {
    laps.iter().map(Lap::max_hr).max().unwrap_or(0)
}

fn extreme_lap(laps: &[Lap], replaces: impl Fn(f64, f64) -> bool) -> Option<&Lap> {
    let mut best: Option<(&Lap, f64)> = None;
    for lap in laps {
        let Some(pace) = lap.pace_mps() else {
            continue;
        };
        match best {
            Some((_, best_pace)) if !replaces(pace, best_pace) => {}
            _ => best = Some((lap, pace)),
        }
    }
    best.map(|(lap, _)| lap)
}

fn lap_pace(lap: &Lap) -> Option<Pace> {
    Pace::compute(lap.distance(), lap.time()).ok()
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
