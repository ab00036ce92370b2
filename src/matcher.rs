use serde::Serialize;

use crate::lap::Lap;

/// A lap classified by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "lap", rename_all = "lowercase")]
pub enum Segment {
    /// One logical interval, possibly merged from several device laps.
    Interval(Lap),
    /// The lap following an interval, whatever its pace.
    Recovery(Lap),
}

impl Segment {
    #[must_use]
    pub const fn lap(&self) -> &Lap {
        match self {
            Self::Interval(lap) | Self::Recovery(lap) => lap,
        }
    }

    #[must_use]
    pub const fn is_interval(&self) -> bool {
        matches!(self, Self::Interval(_))
    }
}

/// Detects interval blocks in a run's laps.
///
/// A block starts at the first lap that is both fast enough and long enough,
/// which keeps short strides from being taken for intervals. After that,
/// every run of consecutive fast laps is merged into one interval and the lap
/// right after it becomes the recovery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalLapMatcher {
    interval_pace_threshold: f64,
    min_interval_distance: f64,
}

impl IntervalLapMatcher {
    /// `interval_pace_threshold` is a speed in m/s; laps at or above it are
    /// interval efforts. `min_interval_distance` is in meters.
    #[must_use]
    pub const fn new(interval_pace_threshold: f64, min_interval_distance: f64) -> Self {
        Self {
            interval_pace_threshold,
            min_interval_distance,
        }
    }

    #[must_use]
    pub const fn interval_pace_threshold(&self) -> f64 {
        self.interval_pace_threshold
    }

    #[must_use]
    pub const fn min_interval_distance(&self) -> f64 {
        self.min_interval_distance
    }

    /// Classify `laps` into alternating interval and recovery segments.
    ///
    /// Returns an empty vector when no lap qualifies as the start of an
    /// interval block. The result may end on an interval without recovery.
    #[must_use]
    pub fn interval_laps(&self, laps: &[Lap]) -> Vec<Segment> {
        let Some(start) = laps.iter().position(|lap| self.is_interval_start(lap)) else {
            return Vec::new();
        };

        let mut segments = Vec::new();
        let mut next = start;
        while next < laps.len() {
            let Some((interval, end)) = self.next_interval(laps, next) else {
                break;
            };
            segments.push(Segment::Interval(interval));
            next = end;

            if let Some(recovery) = laps.get(next) {
                segments.push(Segment::Recovery(*recovery));
                next += 1;
            }
        }

        segments
    }

    /// Merge the run of fast laps starting at `start`.
    /// Returns the merged lap and the index just past the run.
    fn next_interval(&self, laps: &[Lap], start: usize) -> Option<(Lap, usize)> {
        let run = laps[start..]
            .iter()
            .take_while(|lap| self.is_interval_pace(lap))
            .count();
        if run == 0 {
            return None;
        }

        let end = start + run;
        Some((Lap::combine(&laps[start..end]), end))
    }

    fn is_interval_pace(&self, lap: &Lap) -> bool {
        lap.pace_mps()
            .is_some_and(|pace| pace >= self.interval_pace_threshold)
    }

    fn is_interval_start(&self, lap: &Lap) -> bool {
        self.is_interval_pace(lap) && lap.distance() >= self.min_interval_distance
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
