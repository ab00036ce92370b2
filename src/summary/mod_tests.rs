use super::*;
use crate::matcher::IntervalLapMatcher;

const TIME: &str = "2024-05-01 06:30:00";

fn lap(distance: f64, time: f64) -> Lap {
    Lap::new(distance, time, 160, 175).unwrap()
}

fn workout(laps: &[Lap]) -> WorkoutSummary {
    let matcher = IntervalLapMatcher::new(4.0, 150.0);
    WorkoutSummary::new(matcher.interval_laps(laps), TIME)
}

fn track_session() -> WorkoutSummary {
    workout(&[
        lap(400.0, 90.0),
        lap(400.0, 88.0),
        lap(400.0, 150.0),
        lap(400.0, 91.0),
    ])
}

fn header_len() -> usize {
    WorkoutSummary::csv_header().split(',').count()
}

#[test]
fn csv_header_lists_interval_then_recovery_columns() {
    let header = WorkoutSummary::csv_header();
    assert!(header.starts_with("Time,I Dist,I count,I avg time,I avg,"));
    assert!(header.ends_with("R fast,R avg HR,R max HR"));
    assert_eq!(header_len(), 21);
}

#[test]
fn splits_segments_into_intervals_and_recoveries() {
    let summary = track_session();
    assert_eq!(summary.interval_laps().len(), 2);
    assert_eq!(summary.recovery_laps(), vec![lap(400.0, 150.0)]);
    assert_eq!(summary.segments().len(), 3);
    assert_eq!(summary.time(), TIME);
}

#[test]
fn interval_statistics() {
    let stats = track_session().intervals();

    assert_eq!(stats.count, 2);
    assert!((stats.distance - 600.0).abs() < 1e-9);
    assert!((stats.avg_time - 134.5).abs() < 1e-9);
    assert!((stats.max_time - 178.0).abs() < 1e-9);
    assert!((stats.min_time - 91.0).abs() < 1e-9);
    assert_eq!(stats.avg_pace.unwrap().as_str(), "03:44");
    assert_eq!(stats.slow_pace.unwrap().as_str(), "03:47");
    assert_eq!(stats.fast_pace.unwrap().as_str(), "03:43");
    assert_eq!(stats.avg_hr, 160);
    assert_eq!(stats.max_hr, 175);
}

#[test]
fn csv_row_renders_all_statistics() {
    assert_eq!(
        track_session().csv(),
        "2024-05-01 06:30:00,600.0,2,134.5,03:44,178.0,03:47,91.0,03:43,160,175,\
         400.0,1,150.0,06:15,150.0,06:15,150.0,06:15,160,175"
    );
}

#[test]
fn csv_row_matches_header_width_for_any_shape() {
    let empty = WorkoutSummary::new(Vec::new(), TIME);
    let single = workout(&[lap(400.0, 90.0)]);
    let many = workout(
        &(0..12)
            .map(|i| if i % 2 == 0 { lap(400.0, 85.0) } else { lap(200.0, 90.0) })
            .collect::<Vec<_>>(),
    );

    for summary in [empty, single, track_session(), many] {
        assert_eq!(summary.csv().split(',').count(), header_len());
    }
}

#[test]
fn interval_only_workout_has_empty_recovery_block() {
    let summary = workout(&[lap(400.0, 90.0), lap(400.0, 89.0)]);
    let recoveries = summary.recoveries();

    assert_eq!(recoveries.count, 0);
    assert_eq!(recoveries.avg_hr, 0);
    assert_eq!(recoveries.max_hr, 0);
    assert!(recoveries.avg_pace.is_none());
    assert!(summary.csv().ends_with(",0.0,0,0.0,,0.0,,0.0,,0,0"));
}

#[test]
fn csv_float_columns_keep_decimal_point() {
    let fields = GroupStats::from_laps(&[lap(400.0, 90.125), lap(401.5, 90.0)]).csv_fields();
    assert_eq!(fields[0], "400.75");
    assert_eq!(fields[2], "90.06");
    assert_eq!(fields[4], "90.12");
    assert_eq!(fields[6], "90.0");

    let empty = GroupStats::from_laps(&[]).csv_fields();
    assert_eq!(empty[0], "0.0");
    assert_eq!(empty[2], "0.0");
}

#[test]
fn nested_value_has_time_and_both_groups() {
    let value = track_session().to_value().unwrap();

    assert_eq!(value["time"], TIME);
    assert_eq!(value["intervals"]["count"], 2);
    assert_eq!(value["intervals"]["avg_pace"], "03:44");
    assert_eq!(value["intervals"]["slow_pace"], "03:47");
    assert_eq!(value["recoveries"]["distance"], 400.0);
    assert_eq!(value["recoveries"]["fast_pace"], "06:15");
}

#[test]
fn nested_value_uses_null_for_missing_paces() {
    let value = WorkoutSummary::new(Vec::new(), TIME).to_value().unwrap();
    assert!(value["intervals"]["avg_pace"].is_null());
    assert!(value["recoveries"]["fast_pace"].is_null());
    assert_eq!(value["recoveries"]["count"], 0);
}

#[test]
fn report_matches_group_statistics() {
    let summary = track_session();
    let report = summary.report();
    assert_eq!(report.intervals, summary.intervals());
    assert_eq!(report.recoveries, summary.recoveries());
    assert_eq!(report.time, TIME);
}
