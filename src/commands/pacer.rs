use std::fmt::Write;

use crate::cli::{Cli, PacerArgs};
use crate::pace::{source_speed_kph, target_paces};
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_pacer(args: &PacerArgs, cli: &Cli) -> i32 {
    match run_pacer_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

/// Prints target paces for percentages of a pace.
///
/// # Errors
/// Returns an error if the pace is malformed or a percentage is zero.
pub fn run_pacer_impl(args: &PacerArgs, cli: &Cli) -> Result<()> {
    let report = format_pacer_report(&args.pace, &args.percentages)?;
    if cli.quiet {
        return Ok(());
    }
    super::write_output(None, &report)
}

/// Source pace and speed, followed by one line per target percentage.
///
/// # Errors
/// Returns an error if the pace is malformed or a percentage is zero.
pub fn format_pacer_report(pace: &str, percentages: &[u32]) -> Result<String> {
    let speed_kph = source_speed_kph(pace)?;
    let targets = target_paces(pace, percentages)?;

    let mut report = String::new();
    let _ = writeln!(report, "source pace:  {} min/km", pace.trim());
    let _ = writeln!(report, "source speed: {speed_kph:.6} km/h");
    let _ = writeln!(report);
    let _ = writeln!(report, "target speeds");
    let _ = writeln!(report, "=============");
    for target in targets {
        let _ = writeln!(
            report,
            "{:>3}%: pace: {} min/km, speed: {:.6} km/h",
            target.percentage, target.pace, target.speed_kph
        );
    }
    Ok(report)
}

#[cfg(test)]
#[path = "pacer_tests.rs"]
mod tests;
