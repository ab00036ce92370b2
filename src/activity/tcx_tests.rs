use std::fs;

use tempfile::TempDir;

use super::*;

fn lap_xml(time: &str, distance: &str, avg: &str, max: &str) -> String {
    format!(
        r#"<Lap StartTime="2024-05-01T04:30:00.000Z">
          <TotalTimeSeconds>{time}</TotalTimeSeconds>
          <DistanceMeters>{distance}</DistanceMeters>
          <MaximumSpeed>5.2</MaximumSpeed>
          <Calories>30</Calories>
          <AverageHeartRateBpm><Value>{avg}</Value></AverageHeartRateBpm>
          <MaximumHeartRateBpm><Value>{max}</Value></MaximumHeartRateBpm>
          <Intensity>Active</Intensity>
          <TriggerMethod>Manual</TriggerMethod>
          <Track>
            <Trackpoint><Time>2024-05-01T04:30:00.000Z</Time></Trackpoint>
          </Track>
        </Lap>"#
    )
}

fn document(laps: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="Running">
      <Id>2024-05-01T04:30:00.000Z</Id>
      {}
      <Creator><Name>Forerunner</Name></Creator>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#,
        laps.join("\n")
    )
}

#[test]
fn yields_one_lap_per_lap_element() {
    let xml = document(&[
        lap_xml("90.0", "400.0", "160", "170"),
        lap_xml("150.5", "400.0", "140", "165"),
    ]);

    let laps = parse_tcx_laps(&xml).unwrap();
    assert_eq!(
        laps,
        vec![
            Lap::new(400.0, 90.0, 160, 170).unwrap(),
            Lap::new(400.0, 150.5, 140, 165).unwrap(),
        ]
    );
}

#[test]
fn document_without_activities_has_no_laps() {
    let xml = r#"<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2"></TrainingCenterDatabase>"#;
    assert!(parse_tcx_laps(xml).unwrap().is_empty());
}

#[test]
fn missing_heart_rate_is_a_lap_error() {
    let xml = document(&[r"<Lap>
          <TotalTimeSeconds>90</TotalTimeSeconds>
          <DistanceMeters>400</DistanceMeters>
          <MaximumHeartRateBpm><Value>170</Value></MaximumHeartRateBpm>
        </Lap>"
        .to_string()]);

    let err = parse_tcx_laps(&xml).unwrap_err();
    assert!(matches!(
        err,
        PaceIntervalsError::InvalidLap {
            field: "avg_hr",
            ..
        }
    ));
}

#[test]
fn non_numeric_value_is_a_lap_error() {
    let xml = document(&[lap_xml("90", "far", "160", "170")]);
    let err = parse_tcx_laps(&xml).unwrap_err();
    assert!(matches!(
        err,
        PaceIntervalsError::InvalidLap {
            field: "distance",
            ..
        }
    ));
}

#[test]
fn malformed_xml_is_a_syntax_error() {
    let err = parse_tcx_laps("<TrainingCenterDatabase><Activities>").unwrap_err();
    assert!(matches!(err, PaceIntervalsError::TcxSyntax(_)));
}

#[test]
fn read_attaches_path_to_syntax_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.tcx");
    fs::write(&path, "<TrainingCenterDatabase><Activities>").unwrap();

    let err = read_tcx_laps(&path).unwrap_err();
    assert!(matches!(err, PaceIntervalsError::TcxParse { path: ref p, .. } if *p == path));
}

#[test]
fn read_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = read_tcx_laps(&dir.path().join("missing.tcx")).unwrap_err();
    assert!(matches!(err, PaceIntervalsError::FileRead { .. }));
}

#[test]
fn read_parses_file_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.tcx");
    fs::write(&path, document(&[lap_xml("200", "1000", "150", "160")])).unwrap();

    let laps = read_tcx_laps(&path).unwrap();
    assert_eq!(laps, vec![Lap::new(1000.0, 200.0, 150, 160).unwrap()]);
}
