use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "pace-intervals")]
#[command(author, version, about = "Running pace calculators and interval workout statistics")]
#[command(long_about = "Computes paces from race times, target paces from percentages, \
    and interval statistics from recorded runs.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid input or runtime error\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors; calculators also print nothing
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize interval workouts of a garminexport backup directory
    Workouts(WorkoutsArgs),

    /// Calculate the average pace of a race
    Pace(PaceArgs),

    /// Calculate target paces as percentages of a pace
    Pacer(PacerArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct WorkoutsArgs {
    /// A directory holding activities backed up by garminexport
    pub dir: PathBuf,

    /// Only include activities whose name contains a match of this regex
    #[arg(long = "name", value_name = "REGEX")]
    pub name_pattern: Option<String>,

    /// Slowest lap pace (MM:SS per km) that counts as an interval
    #[arg(long, value_name = "MM:SS")]
    pub interval_pace: Option<String>,

    /// Minimum distance in meters of the first interval lap
    #[arg(long, value_name = "METERS")]
    pub min_interval_distance: Option<f64>,

    /// Earliest activity date to include
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start_date: Option<String>,

    /// Latest activity date to include (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end_date: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: csv, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct PaceArgs {
    /// A race time [HH:]MM:SS, for instance 40:55
    pub time: String,

    /// The distance in meters, for instance 10000
    pub distance: f64,
}

#[derive(Parser, Debug)]
pub struct PacerArgs {
    /// A pace in MM:SS per km, for instance 03:55
    pub pace: String,

    /// Target percentages of the pace's speed, for instance 94
    #[arg(required = true, value_name = "PERCENT")]
    pub percentages: Vec<u32>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".pace-intervals.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
