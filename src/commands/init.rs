use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PaceIntervalsError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PaceIntervalsError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# pace-intervals configuration file
# Command line options override the values below.

[intervals]
# Slowest lap pace (MM:SS per km) that still counts as an interval effort
interval_pace = "04:15"

# Minimum distance in meters of the lap that starts the interval block.
# Shorter fast laps, such as strides, are ignored until then.
min_interval_distance = 150.0

[filter]
# Regex searched for in activity names
name_pattern = ".*"

# Activity date window (YYYY-MM-DD, inclusive)
start_date = "2000-01-01"
# end_date = "2024-12-31"  # default: today

[output]
# Output format: "csv" or "json"
format = "csv"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
