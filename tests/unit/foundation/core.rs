use super::*;

#[test]
fn default_rate_is_thirty() {
    assert_eq!(Fps::default(), Fps::new(30, 1).unwrap());
    assert_eq!(frames_to_seconds(45.0), 1.5);
    assert_eq!(seconds_to_frames(2.0), 60.0);
}

#[test]
fn seconds_to_frames_rounds_to_nearest() {
    assert_eq!(seconds_to_frames(0.51), 15.0);
    assert_eq!(seconds_to_frames(0.49), 15.0);
    assert_eq!(seconds_to_frames(0.1), 3.0);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123.0);
    assert_eq!(fps.secs_to_frames_floor(secs + 1e-9), 123);
}
