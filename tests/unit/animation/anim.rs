use super::*;
use crate::foundation::core::Vec2;

#[test]
fn keyframes_hold_is_constant_between_keys() {
    let mut kf = Keyframes::linear([(0.0, 1.0, Ease::Linear), (10.0, 3.0, Ease::Linear)]);
    kf.mode = InterpMode::Hold;
    assert_eq!(kf.sample(5.0).unwrap(), 1.0);
    assert_eq!(kf.sample(10.0).unwrap(), 3.0);
}

#[test]
fn keyframes_linear_interpolates_fractional_frames() {
    let kf = Keyframes::linear([(0.0, 0.0, Ease::Linear), (10.0, 10.0, Ease::Linear)]);
    assert_eq!(kf.sample(5.0).unwrap(), 5.0);
    assert_eq!(kf.sample(2.5).unwrap(), 2.5);
}

#[test]
fn keyframes_clamp_outside_keys() {
    let kf = Keyframes::linear([(5.0, 1.0, Ease::OutCubic), (15.0, 2.0, Ease::Linear)]);
    assert_eq!(kf.sample(-3.0).unwrap(), 1.0);
    assert_eq!(kf.sample(99.0).unwrap(), 2.0);
}

#[test]
fn keyframes_use_previous_key_easing() {
    let kf = Keyframes::linear([
        (0.0, Vec2::new(0.0, 0.0), Ease::OutCubic),
        (10.0, Vec2::new(8.0, 16.0), Ease::Linear),
    ]);
    let v = kf.sample(5.0).unwrap();
    assert!((v.x - 7.0).abs() < 1e-12);
    assert!((v.y - 14.0).abs() < 1e-12);
}

#[test]
fn unsorted_keys_are_rejected() {
    let kf = Keyframes::linear([(10.0, 0.0, Ease::Linear), (0.0, 1.0, Ease::Linear)]);
    assert!(kf.validate().is_err());
    assert!(kf.sample(3.0).is_err());
}

#[test]
fn empty_keys_fall_back_to_default() {
    let kf: Keyframes<f64> = Keyframes {
        keys: vec![],
        mode: InterpMode::Linear,
        default: Some(0.25),
    };
    assert_eq!(kf.sample(100.0).unwrap(), 0.25);

    let missing: Keyframes<f64> = Keyframes {
        keys: vec![],
        mode: InterpMode::Linear,
        default: None,
    };
    assert!(missing.sample(0.0).is_err());
}

#[test]
fn constant_track_never_changes() {
    let kf = Keyframes::constant(4.0);
    for f in [-10.0, 0.0, 7.5, 1000.0] {
        assert_eq!(kf.sample(f).unwrap(), 4.0);
    }
}
