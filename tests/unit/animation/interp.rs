use super::*;

fn clamped() -> InterpolateOptions {
    InterpolateOptions::default()
}

#[test]
fn two_point_linear_mapping() {
    let v = interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], clamped()).unwrap();
    assert_eq!(v, 50.0);
}

#[test]
fn clamps_outside_range_by_default() {
    for frame in [-100.0, -1.0, -0.001] {
        assert_eq!(
            interpolate(frame, &[0.0, 10.0], &[3.0, 7.0], clamped()).unwrap(),
            3.0
        );
    }
    for frame in [10.001, 11.0, 1e9] {
        assert_eq!(
            interpolate(frame, &[0.0, 10.0], &[3.0, 7.0], clamped()).unwrap(),
            7.0
        );
    }
}

#[test]
fn extend_continues_outer_segments() {
    let opts = clamped().extrapolate(Extrapolate::Extend);
    assert_eq!(
        interpolate(20.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(),
        2.0
    );
    assert_eq!(
        interpolate(-10.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(),
        -1.0
    );
}

#[test]
fn identity_returns_frame_outside_range() {
    let opts = clamped().extrapolate(Extrapolate::Identity);
    assert_eq!(
        interpolate(42.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(),
        42.0
    );
}

#[test]
fn four_breakpoint_fade_in_hold_fade_out() {
    let input = [0.0, 10.0, 50.0, 60.0];
    let output = [0.0, 1.0, 1.0, 0.0];
    let at = |f: f64| interpolate(f, &input, &output, clamped()).unwrap();
    assert_eq!(at(-5.0), 0.0);
    assert_eq!(at(5.0), 0.5);
    assert_eq!(at(10.0), 1.0);
    assert_eq!(at(30.0), 1.0);
    assert_eq!(at(55.0), 0.5);
    assert_eq!(at(60.0), 0.0);
    assert_eq!(at(90.0), 0.0);
}

#[test]
fn fractional_frames_are_supported() {
    let v = interpolate(2.5, &[0.0, 10.0], &[0.0, 1.0], clamped()).unwrap();
    assert_eq!(v, 0.25);
}

#[test]
fn easing_applies_to_segment_progress() {
    let opts = InterpolateOptions::eased(Ease::OutCubic);
    let v = interpolate(5.0, &[0.0, 10.0], &[0.0, 8.0], opts).unwrap();
    assert!((v - 7.0).abs() < 1e-12);
}

#[test]
fn out_cubic_progress_is_non_decreasing() {
    let opts = InterpolateOptions::eased(Ease::OutCubic);
    let mut prev = f64::MIN;
    for i in 0..=300 {
        let frame = f64::from(i) / 10.0;
        let v = interpolate(frame, &[0.0, 30.0], &[0.0, 1.0], opts).unwrap();
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn zero_width_segment_steps_to_later_output() {
    let at = |f: f64| interpolate(f, &[0.0, 10.0, 10.0, 20.0], &[0.0, 1.0, 5.0, 6.0], clamped());
    assert_eq!(at(9.0).unwrap(), 0.9);
    assert_eq!(at(10.0).unwrap(), 5.0);
    assert_eq!(at(15.0).unwrap(), 5.5);
}

#[test]
fn malformed_ranges_fail_fast() {
    let mismatched = interpolate(0.0, &[0.0, 1.0], &[0.0], clamped()).unwrap_err();
    assert!(matches!(mismatched, FlowError::InvalidInput(_)));
    assert!(mismatched.to_string().contains("output range"));

    let short = interpolate(0.0, &[0.0], &[0.0], clamped()).unwrap_err();
    assert!(short.to_string().contains("at least 2"));

    let descending = interpolate(0.0, &[0.0, 10.0, 5.0], &[0.0, 1.0, 2.0], clamped()).unwrap_err();
    assert!(descending.to_string().contains("non-decreasing"));

    assert!(interpolate(0.0, &[0.0, f64::NAN], &[0.0, 1.0], clamped()).is_err());
    assert!(interpolate(f64::NAN, &[0.0, 1.0], &[0.0, 1.0], clamped()).is_err());
}

#[test]
fn progress_window_clamps_and_eases() {
    assert_eq!(progress(-5.0, 0.0, 20.0, Ease::Linear).unwrap(), 0.0);
    assert_eq!(progress(10.0, 0.0, 20.0, Ease::Linear).unwrap(), 0.5);
    assert_eq!(progress(25.0, 0.0, 20.0, Ease::OutBack).unwrap(), 1.0);
    assert_eq!(progress(3.0, 3.0, 0.0, Ease::Linear).unwrap(), 1.0);
    assert_eq!(progress(2.0, 3.0, 0.0, Ease::Linear).unwrap(), 0.0);
    assert!(progress(0.0, 0.0, -1.0, Ease::Linear).is_err());
}

#[test]
fn point_lerp_matches_componentwise() {
    let p = <Point as Lerp>::lerp(&Point::new(0.0, 10.0), &Point::new(10.0, 20.0), 0.5);
    assert_eq!(p, Point::new(5.0, 15.0));
}
