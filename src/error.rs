use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaceIntervalsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pace \"{0}\": must be of form MM:SS")]
    InvalidPace(String),

    #[error("Invalid time \"{0}\": must be of form [HH:]MM:SS")]
    InvalidTime(String),

    #[error("Invalid target percentage: {0}")]
    InvalidPercentage(u32),

    #[error("Invalid lap {field}: \"{value}\"")]
    InvalidLap { field: &'static str, value: String },

    #[error("Pace is undefined for {distance_m} m in {time_s} s")]
    DegeneratePace { distance_m: f64, time_s: f64 },

    #[error("Invalid date \"{value}\": expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid name pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse activity summary: {path}")]
    SummaryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse TCX file: {path}")]
    TcxParse {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("TCX syntax error: {0}")]
    TcxSyntax(#[from] quick_xml::DeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PaceIntervalsError {
    /// Short category name, used in log fields.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::InvalidPace(_)
            | Self::InvalidTime(_)
            | Self::InvalidPercentage(_)
            | Self::InvalidDate { .. }
            | Self::InvalidPattern { .. } => "Input",
            Self::InvalidLap { .. } | Self::DegeneratePace { .. } => "Lap",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::SummaryParse { .. } | Self::TcxParse { .. } | Self::TcxSyntax(_) => "Activity",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Errors that must abort the run before any activity is processed.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::TomlParse(_)
                | Self::InvalidPace(_)
                | Self::InvalidDate { .. }
                | Self::InvalidPattern { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PaceIntervalsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
