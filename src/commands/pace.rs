use crate::cli::{Cli, PaceArgs};
use crate::pace::{Pace, parse_race_time};
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_pace(args: &PaceArgs, cli: &Cli) -> i32 {
    match run_pace_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

/// Prints the average pace of a race.
///
/// # Errors
/// Returns an error if the time is malformed or the distance is not positive.
pub fn run_pace_impl(args: &PaceArgs, cli: &Cli) -> Result<()> {
    let report = format_pace_report(&args.time, args.distance)?;
    if cli.quiet {
        return Ok(());
    }
    super::write_output(None, &report)
}

/// Average pace line for covering `distance_m` meters in a `[HH:]MM:SS` time.
///
/// # Errors
/// Returns an error if the time is malformed or the distance is not positive.
pub fn format_pace_report(time: &str, distance_m: f64) -> Result<String> {
    let seconds = parse_race_time(time)?;
    let pace = Pace::compute(distance_m, seconds)?;
    tracing::debug!(seconds, distance_m, "computed average pace");
    Ok(format!("average pace:  {pace} min/km\n"))
}

#[cfg(test)]
#[path = "pace_tests.rs"]
mod tests;
