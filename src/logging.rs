//! Log setup of the binary. Library code only emits `tracing` events.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a log filter, e.g. `debug` or
/// `pace_intervals::activity=trace`. Overrides the verbosity flags.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Level implied by the `-q` and `-v` flags.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter from `LOG_LEVEL`, or from the flags when it is unset or invalid.
#[must_use]
pub fn env_filter(verbose: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_for(verbose, quiet).into()))
}

/// Install the global subscriber, logging to stderr.
pub fn init(verbose: u8, quiet: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, quiet))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
