use chrono::NaiveDate;

use crate::activity::{ActivityFilter, load_workouts, scan_activities};
use crate::cli::{Cli, WorkoutsArgs};
use crate::config::Config;
use crate::matcher::IntervalLapMatcher;
use crate::output::{OutputFormat, WorkoutFormatter};
use crate::pace::speed_from_pace;
use crate::{EXIT_SUCCESS, PaceIntervalsError, Result};

use super::{load_config, report_error, write_output};

/// Workout command settings after merging CLI arguments over the config file.
#[derive(Debug, Clone)]
pub struct WorkoutSettings {
    pub matcher: IntervalLapMatcher,
    pub filter: ActivityFilter,
    pub format: OutputFormat,
}

impl WorkoutSettings {
    /// Resolve and validate the settings. CLI values take precedence over
    /// config values; a missing end date means `today`.
    ///
    /// # Errors
    /// Returns a configuration error for a malformed pace, date, or name
    /// pattern.
    pub fn resolve(config: &Config, args: &WorkoutsArgs, today: NaiveDate) -> Result<Self> {
        let interval_pace = args
            .interval_pace
            .as_deref()
            .unwrap_or(&config.intervals.interval_pace);
        let min_interval_distance = args
            .min_interval_distance
            .unwrap_or(config.intervals.min_interval_distance);
        if !min_interval_distance.is_finite() || min_interval_distance < 0.0 {
            return Err(PaceIntervalsError::Config(format!(
                "min_interval_distance must be a non-negative number of meters, got {min_interval_distance}"
            )));
        }
        let matcher = IntervalLapMatcher::new(speed_from_pace(interval_pace)?, min_interval_distance);

        let name_pattern = args
            .name_pattern
            .as_deref()
            .unwrap_or(&config.filter.name_pattern);
        let start_date = args
            .start_date
            .as_deref()
            .unwrap_or(&config.filter.start_date);
        let end_date = args
            .end_date
            .clone()
            .or_else(|| config.filter.end_date.clone())
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
        let filter = ActivityFilter::parse(name_pattern, start_date, &end_date)?;

        Ok(Self {
            matcher,
            filter,
            format: args.format.unwrap_or(config.output.format),
        })
    }
}

#[must_use]
pub fn run_workouts(args: &WorkoutsArgs, cli: &Cli) -> i32 {
    match run_workouts_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Summarizes the interval workouts of a backup directory.
///
/// # Errors
/// Returns an error if the configuration is invalid, the directory cannot be
/// read, or the output cannot be written. Failing activities are skipped.
pub fn run_workouts_impl(args: &WorkoutsArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let today = chrono::Local::now().date_naive();
    let settings = WorkoutSettings::resolve(&config, args, today)?;

    tracing::debug!(
        start_date = %settings.filter.start_date(),
        end_date = %settings.filter.end_date(),
        "reading activities"
    );
    let files = scan_activities(&args.dir, &settings.filter)?;
    let workouts = load_workouts(&files, &settings.filter, &settings.matcher);
    tracing::info!(
        activities = files.len(),
        workouts = workouts.len(),
        "summarized interval workouts"
    );

    let output = settings.format.formatter().format(&workouts)?;
    write_output(args.output.as_deref(), &output)
}

#[cfg(test)]
#[path = "workouts_tests.rs"]
mod tests;
