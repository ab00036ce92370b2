use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate};
use regex::Regex;
use walkdir::WalkDir;

use crate::error::{PaceIntervalsError, Result};

const SUMMARY_SUFFIX: &str = "_summary.json";
const TCX_SUFFIX: &str = ".tcx";

static ACTIVITY_FILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\+\d{2}:\d{2})_(\d{8,10})_summary\.json$")
        .expect("Invalid regex")
});

/// One activity of a backup directory: a `<time>_<id>_summary.json` file and
/// its sibling `<time>_<id>.tcx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFile {
    pub time: DateTime<FixedOffset>,
    pub id: String,
    pub summary_path: PathBuf,
    pub tcx_path: PathBuf,
}

impl ActivityFile {
    /// Recognize an activity summary file by its name.
    ///
    /// Returns `None` for any other file, including names whose timestamp
    /// matches the pattern but is not a valid date.
    #[must_use]
    pub fn from_summary_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let captures = ACTIVITY_FILE_PATTERN.captures(file_name)?;
        let time = DateTime::parse_from_rfc3339(&captures[1]).ok()?;

        let tcx_name = file_name.replace(SUMMARY_SUFFIX, TCX_SUFFIX);
        Some(Self {
            time,
            id: captures[2].to_string(),
            summary_path: path.to_path_buf(),
            tcx_path: path.with_file_name(tcx_name),
        })
    }

    /// Calendar date of the activity in its own time zone.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.time.date_naive()
    }

    /// Workout label, e.g. `2024-05-01 06:30:00`.
    #[must_use]
    pub fn label(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Selection criteria for activities.
#[derive(Debug, Clone)]
pub struct ActivityFilter {
    name_pattern: Regex,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl ActivityFilter {
    /// Build a filter from its textual form.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regex or a date is not
    /// of the form `YYYY-MM-DD`.
    pub fn parse(name_pattern: &str, start_date: &str, end_date: &str) -> Result<Self> {
        let name_pattern =
            Regex::new(name_pattern).map_err(|source| PaceIntervalsError::InvalidPattern {
                pattern: name_pattern.to_string(),
                source,
            })?;
        Ok(Self::new(
            name_pattern,
            parse_date(start_date)?,
            parse_date(end_date)?,
        ))
    }

    #[must_use]
    pub const fn new(name_pattern: Regex, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            name_pattern,
            start_date,
            end_date,
        }
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Whether the activity name contains a match of the name pattern.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name_pattern.is_match(name)
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns [`PaceIntervalsError::InvalidDate`] for any other input.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| {
        PaceIntervalsError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

/// List the activities of `dir` within the filter's date window, sorted by
/// file name.
///
/// The directory is not searched recursively. Since names start with the
/// activity time, the listing stops at the first activity past the end date.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn scan_activities(dir: &Path, filter: &ActivityFilter) -> Result<Vec<ActivityFile>> {
    let mut activities = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| walkdir_error(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(activity) = ActivityFile::from_summary_path(entry.path()) else {
            continue;
        };

        let date = activity.date();
        if date < filter.start_date {
            continue;
        }
        if date > filter.end_date {
            break;
        }
        activities.push(activity);
    }

    Ok(activities)
}

fn walkdir_error(dir: &Path, error: walkdir::Error) -> PaceIntervalsError {
    let path = error.path().unwrap_or(dir).to_path_buf();
    let source = error
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
    PaceIntervalsError::FileRead { path, source }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
