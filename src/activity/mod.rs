//! Recorded activities of a garminexport backup directory.
//!
//! Each activity is a `<time>_<id>_summary.json` file holding its metadata
//! and a sibling `<time>_<id>.tcx` file holding its laps.

mod file;
mod summary;
mod tcx;

pub use file::{ActivityFile, ActivityFilter, parse_date, scan_activities};
pub use summary::{ActivitySummary, read_summary};
pub use tcx::{parse_tcx_laps, read_tcx_laps};

use rayon::prelude::*;

use crate::error::Result;
use crate::matcher::IntervalLapMatcher;
use crate::summary::WorkoutSummary;

/// Summarize the intervals of one activity.
///
/// Returns `None` when the activity holds no interval.
///
/// # Errors
/// Returns an error if the TCX file cannot be read or holds invalid laps.
pub fn load_workout(
    file: &ActivityFile,
    matcher: &IntervalLapMatcher,
) -> Result<Option<WorkoutSummary>> {
    let laps = read_tcx_laps(&file.tcx_path)?;
    let segments = matcher.interval_laps(&laps);
    if segments.is_empty() {
        tracing::debug!(activity = %file.id, laps = laps.len(), "no interval laps found");
        return Ok(None);
    }

    for (i, segment) in segments.iter().enumerate() {
        tracing::trace!(activity = %file.id, index = i + 1, ?segment);
    }
    Ok(Some(WorkoutSummary::new(segments, file.label())))
}

/// Apply the name filter, then summarize the activity.
///
/// Activities without a name are skipped.
///
/// # Errors
/// Returns an error if the summary or TCX file cannot be read or parsed.
pub fn process_activity(
    file: &ActivityFile,
    filter: &ActivityFilter,
    matcher: &IntervalLapMatcher,
) -> Result<Option<WorkoutSummary>> {
    let summary = read_summary(&file.summary_path)?;
    let Some(name) = summary.name() else {
        tracing::debug!(activity = %file.id, "skipping unnamed activity");
        return Ok(None);
    };
    if !filter.matches_name(name) {
        return Ok(None);
    }

    tracing::debug!(time = %file.time, activity = %file.id, name, "reading activity");
    load_workout(file, matcher)
}

/// Summarize many activities in parallel, keeping their order.
///
/// An activity that fails is logged and left out.
#[must_use]
pub fn load_workouts(
    files: &[ActivityFile],
    filter: &ActivityFilter,
    matcher: &IntervalLapMatcher,
) -> Vec<WorkoutSummary> {
    files
        .par_iter()
        .filter_map(|file| match process_activity(file, filter, matcher) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::warn!(
                    activity = %file.id,
                    error_type = e.error_type(),
                    "skipping activity: {e}"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
