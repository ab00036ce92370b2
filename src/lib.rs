pub mod activity;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lap;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod pace;
pub mod summary;

pub use error::{PaceIntervalsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
