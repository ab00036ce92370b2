pub mod init;
pub mod pace;
pub mod pacer;
pub mod workouts;

pub use init::{generate_config_template, run_init, run_init_impl};
pub use pace::{format_pace_report, run_pace, run_pace_impl};
pub use pacer::{format_pacer_report, run_pacer, run_pacer_impl};
pub use workouts::{WorkoutSettings, run_workouts, run_workouts_impl};

use std::fs;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURE, PaceIntervalsError, Result};

/// Load the configuration file, or the defaults when `no_config` is set.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write command output to a file, or to stdout.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

/// Print a command error and map it to the process exit code.
#[must_use]
pub fn report_error(e: &PaceIntervalsError) -> i32 {
    eprintln!("Error: {e}");
    if e.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
