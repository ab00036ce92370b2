use super::*;

// 4 m/s, i.e. 400 m in 100 s
const THRESHOLD: f64 = 400.0 / 100.0;
const MIN_DISTANCE: f64 = 150.0;

fn lap(distance: f64, time: f64) -> Lap {
    Lap::new(distance, time, 160, 175).unwrap()
}

fn matcher() -> IntervalLapMatcher {
    IntervalLapMatcher::new(THRESHOLD, MIN_DISTANCE)
}

#[test]
fn empty_input_yields_no_segments() {
    assert!(matcher().interval_laps(&[]).is_empty());
}

#[test]
fn no_fast_lap_yields_no_segments() {
    let laps = [lap(1000.0, 330.0), lap(1000.0, 320.0)];
    assert!(matcher().interval_laps(&laps).is_empty());
}

#[test]
fn short_fast_laps_do_not_seed_intervals() {
    // Strides: fast but shorter than the minimum distance
    let laps = [lap(1000.0, 330.0), lap(100.0, 18.0), lap(100.0, 17.0)];
    assert!(matcher().interval_laps(&laps).is_empty());
}

#[test]
fn merges_consecutive_fast_laps_and_pairs_recovery() {
    let laps = [
        lap(400.0, 90.0),
        lap(400.0, 88.0),
        lap(400.0, 150.0),
        lap(400.0, 91.0),
    ];
    let segments = matcher().interval_laps(&laps);

    assert_eq!(
        segments,
        vec![
            Segment::Interval(Lap::combine(&laps[0..2])),
            Segment::Recovery(laps[2]),
            Segment::Interval(laps[3]),
        ]
    );
}

#[test]
fn warmup_before_seed_is_skipped() {
    let laps = [
        lap(1000.0, 330.0),
        lap(100.0, 18.0),
        lap(400.0, 90.0),
        lap(200.0, 70.0),
    ];
    let segments = matcher().interval_laps(&laps);

    assert_eq!(
        segments,
        vec![Segment::Interval(laps[2]), Segment::Recovery(laps[3])]
    );
}

#[test]
fn short_sub_laps_merge_after_seed() {
    // A 1 km rep auto-split at 900 m: the 100 m tail still belongs to it
    let laps = [lap(900.0, 200.0), lap(100.0, 22.0), lap(400.0, 150.0)];
    let segments = matcher().interval_laps(&laps);

    assert_eq!(segments.len(), 2);
    let interval = segments[0].lap();
    assert!(segments[0].is_interval());
    assert!((interval.distance() - 1000.0).abs() < f64::EPSILON);
    assert!((interval.time() - 222.0).abs() < f64::EPSILON);
}

#[test]
fn stops_when_lap_after_recovery_is_slow() {
    let laps = [
        lap(400.0, 90.0),
        lap(400.0, 150.0),
        lap(1000.0, 330.0),
        lap(400.0, 90.0),
    ];
    let segments = matcher().interval_laps(&laps);

    assert_eq!(
        segments,
        vec![Segment::Interval(laps[0]), Segment::Recovery(laps[1])]
    );
}

#[test]
fn lap_exactly_at_threshold_counts_as_interval() {
    let laps = [lap(400.0, 100.0), lap(200.0, 80.0)];
    let segments = matcher().interval_laps(&laps);
    assert_eq!(segments.len(), 2);
    assert!(segments[0].is_interval());
}

#[test]
fn seed_exactly_at_min_distance_qualifies() {
    let laps = [lap(150.0, 30.0)];
    assert_eq!(
        matcher().interval_laps(&laps),
        vec![Segment::Interval(laps[0])]
    );
}

#[test]
fn segments_alternate_starting_with_interval() {
    let laps: Vec<Lap> = (0..9)
        .map(|i| if i % 2 == 0 { lap(400.0, 85.0) } else { lap(200.0, 90.0) })
        .collect();
    let segments = matcher().interval_laps(&laps);

    assert_eq!(segments.len(), 9);
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.is_interval(), i % 2 == 0);
    }
}

#[test]
fn accessors_return_configuration() {
    let matcher = matcher();
    assert!((matcher.interval_pace_threshold() - THRESHOLD).abs() < f64::EPSILON);
    assert!((matcher.min_interval_distance() - MIN_DISTANCE).abs() < f64::EPSILON);
}

#[test]
fn segment_serializes_with_kind_tag() {
    let value = serde_json::to_value(Segment::Recovery(lap(200.0, 90.0))).unwrap();
    assert_eq!(value["kind"], "recovery");
    assert_eq!(value["lap"]["distance"], 200.0);
}
