#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn seg(a: (f64, f64, f64), b: (f64, f64, f64)) -> Segment {
    Segment::new(Point3::new(a.0, a.1, a.2), Point3::new(b.0, b.1, b.2)).unwrap()
}

// --- Segment construction ---

#[test]
fn segment_new_accepts_distinct_points() {
    let s = seg((0.0, 0.0, 0.0), (10.0, 0.0, 4.0));
    assert_eq!(s.start(), Point3::new(0.0, 0.0, 0.0));
    assert_eq!(s.end(), Point3::new(10.0, 0.0, 4.0));
}

#[test]
fn segment_new_rejects_coincident_points() {
    let p = Point3::new(1.0, 2.0, 3.0);
    assert_eq!(Segment::new(p, p), Err(MatchError::DegenerateSegment));
}

#[test]
fn segment_new_rejects_non_finite() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(f64::NAN, 0.0, 0.0);
    assert_eq!(Segment::new(a, b), Err(MatchError::DegenerateSegment));
}

#[test]
fn segment_length() {
    let s = seg((0.0, 0.0, 0.0), (3.0, 4.0, 0.0));
    assert!(approx_eq(s.length(), 5.0));
}

#[test]
fn segment_vertical_has_no_horizontal_run() {
    let s = seg((1.0, 1.0, 0.0), (1.0, 1.0, 9.0));
    assert_eq!(s.horizontal_delta(), (0.0, 0.0));
    assert!(approx_eq(s.length(), 9.0));
}

#[test]
fn validate_rejects_collapsed_segment() {
    let s = seg((0.0, 0.0, 0.0), (0.0, 0.0, 1e-6));
    let collapsed = shift_to_midpoint(&s, 1e12);
    assert_eq!(collapsed.validate(), Err(MatchError::DegenerateSegment));
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn segment_deserialize_rejects_degenerate() {
    let json = r#"{"start":{"x":0,"y":0,"z":0},"end":{"x":0,"y":0,"z":0}}"#;
    assert!(serde_json::from_str::<Segment>(json).is_err());
}

#[test]
fn segment_deserialize_valid() {
    let json = r#"{"start":{"x":0,"y":0,"z":0},"end":{"x":1,"y":0,"z":0}}"#;
    let s: Segment = serde_json::from_str(json).unwrap();
    assert_eq!(s.end().x, 1.0);
}

// --- Midpoint elevation ---

#[test]
fn midpoint_elevation_averages_z() {
    let s = seg((0.0, 0.0, 0.0), (10.0, 0.0, 4.0));
    assert_eq!(midpoint_elevation(&s), 2.0);
}

// --- Shift to midpoint ---

#[test]
fn shift_concrete_scenario() {
    let s = seg((0.0, 0.0, 0.0), (10.0, 0.0, 4.0));
    let shifted = shift_to_midpoint(&s, 5.0);
    assert!(approx_eq(midpoint_elevation(&shifted), 5.0));
    assert_eq!(shifted.start(), Point3::new(0.0, 0.0, 3.0));
    assert_eq!(shifted.end(), Point3::new(10.0, 0.0, 7.0));
    assert_eq!(shifted.horizontal_delta(), s.horizontal_delta());
}

#[test]
fn shift_converges_on_target_for_many_cases() {
    let segments = [
        seg((0.0, 0.0, 0.0), (10.0, 0.0, 4.0)),
        seg((-3.5, 2.25, 11.0), (7.0, -8.0, 9.5)),
        seg((100.0, 200.0, -4.0), (100.5, 201.0, -4.0)),
        seg((2.0, 2.0, 1.0), (2.0, 2.0, 6.0)),
    ];
    let targets = [-12.75, 0.0, 2.0, 8.3333, 1234.5];
    for s in &segments {
        for &target in &targets {
            let shifted = shift_to_midpoint(s, target);
            assert!(approx_eq(midpoint_elevation(&shifted), target), "{s:?} -> {target}");
            assert_eq!(shifted.horizontal_delta(), s.horizontal_delta());
            assert_eq!(shifted.start().x, s.start().x);
            assert_eq!(shifted.start().y, s.start().y);
            assert_eq!(shifted.end().x, s.end().x);
            assert_eq!(shifted.end().y, s.end().y);
        }
    }
}

#[test]
fn shift_preserves_rise() {
    let s = seg((0.0, 0.0, 1.0), (20.0, 0.0, 1.4));
    let shifted = shift_to_midpoint(&s, -6.0);
    let rise = |seg: &Segment| seg.end().z - seg.start().z;
    assert!(approx_eq(rise(&s), rise(&shifted)));
    assert!(approx_eq(s.length(), shifted.length()));
}

#[test]
fn shift_twice_is_idempotent() {
    let s = seg((1.0, 2.0, 3.0), (4.0, 6.0, 5.0));
    let once = shift_to_midpoint(&s, 10.0);
    let twice = shift_to_midpoint(&once, 10.0);
    assert_eq!(once, twice);
}

#[test]
fn shift_vertical_segment_moves_uniformly() {
    let s = seg((2.0, 2.0, 0.0), (2.0, 2.0, 4.0));
    let shifted = shift_to_midpoint(&s, 12.0);
    assert_eq!(shifted.start().z, 10.0);
    assert_eq!(shifted.end().z, 14.0);
}

#[test]
fn shift_leaves_input_untouched() {
    let s = seg((0.0, 0.0, 0.0), (10.0, 0.0, 4.0));
    let _ = shift_to_midpoint(&s, 50.0);
    assert_eq!(midpoint_elevation(&s), 2.0);
}
