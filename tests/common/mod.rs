#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the pace-intervals binary.
#[macro_export]
macro_rules! pace_intervals {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pace-intervals"))
    };
}

/// A track session: two fast 400s, a jog, one more fast 400.
pub const TRACK_SESSION: &[(u32, u32)] = &[(90, 400), (88, 400), (150, 400), (91, 400)];

/// Steady kilometers, no interval.
pub const EASY_RUN: &[(u32, u32)] = &[(330, 1000), (325, 1000), (328, 1000)];

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the temp directory as a command argument.
    pub fn arg(&self) -> &str {
        self.path().to_str().expect("Non UTF-8 temp path")
    }

    /// Creates a pace-intervals config file in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".pace-intervals.toml", content);
    }

    /// Creates a garminexport activity: `<stem>_summary.json` with the given
    /// name and `<stem>.tcx` with one lap per `(seconds, meters)` pair.
    pub fn create_activity(&self, stem: &str, name: &str, laps: &[(u32, u32)]) {
        self.create_file(
            &format!("{stem}_summary.json"),
            &format!(r#"{{"activityId": 1, "activityName": "{name}"}}"#),
        );
        self.create_file(&format!("{stem}.tcx"), &tcx_document(laps));
    }
}

/// A TCX document with one running activity holding the given laps.
pub fn tcx_document(laps: &[(u32, u32)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="Running">
      <Id>2024-05-01T04:30:00.000Z</Id>
"#,
    );
    for (time, distance) in laps {
        let _ = writeln!(
            xml,
            r#"      <Lap StartTime="2024-05-01T04:30:00.000Z">
        <TotalTimeSeconds>{time}.0</TotalTimeSeconds>
        <DistanceMeters>{distance}.0</DistanceMeters>
        <AverageHeartRateBpm><Value>160</Value></AverageHeartRateBpm>
        <MaximumHeartRateBpm><Value>175</Value></MaximumHeartRateBpm>
        <Intensity>Active</Intensity>
      </Lap>"#
        );
    }
    xml.push_str("    </Activity>\n  </Activities>\n</TrainingCenterDatabase>\n");
    xml
}
