use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn stagger_is_strictly_increasing() {
    let frames: Vec<f64> = (0..6).map(|i| staggered_start_frame(12.0, i, 10.0)).collect();
    assert_eq!(frames[0], 12.0);
    assert_eq!(frames[3], 42.0);
    assert!(frames.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn edges_wait_for_every_node() {
    let cfg = RevealConfig::default();
    // 4 nodes: last starts at 30, finishes at 50.
    assert_eq!(staggered_edge_frame(0.0, 0, 4, &cfg), 50.0);
    assert_eq!(staggered_edge_frame(0.0, 2, 4, &cfg), 80.0);
    assert_eq!(staggered_edge_frame(100.0, 1, 1, &cfg), 135.0);
    assert_eq!(staggered_edge_frame(0.0, 0, 0, &cfg), 20.0);
}

#[test]
fn node_progress_overshoots_then_settles() {
    assert!(close(node_reveal_progress(-5.0, 0.0, 20.0).unwrap(), 0.0));
    assert!(close(node_reveal_progress(0.0, 0.0, 20.0).unwrap(), 0.0));
    assert!(node_reveal_progress(14.0, 0.0, 20.0).unwrap() > 1.0);
    assert!(close(node_reveal_progress(20.0, 0.0, 20.0).unwrap(), 1.0));
    assert!(close(node_reveal_progress(500.0, 0.0, 20.0).unwrap(), 1.0));
}

#[test]
fn edge_progress_is_monotonic_and_bounded() {
    let mut prev = -1.0;
    for f in 0..=40 {
        let p = edge_draw_progress(f as f64, 5.0, 30.0).unwrap();
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev);
        prev = p;
    }
    assert_eq!(edge_draw_progress(20.0, 5.0, 30.0).unwrap(), 0.5);
}

#[test]
fn stroke_dash_hides_the_remainder() {
    let d = stroke_dash(200.0, 0.25);
    assert_eq!(d.dash_array, 200.0);
    assert_eq!(d.dash_offset, 150.0);
    assert_eq!(stroke_dash(200.0, 1.0).dash_offset, 0.0);
}

#[test]
fn flow_position_loops() {
    assert_eq!(flow_position(0.0, 0.0, 60.0).unwrap(), 0.0);
    assert_eq!(flow_position(30.0, 0.0, 60.0).unwrap(), 0.5);
    assert_eq!(flow_position(90.0, 0.0, 60.0).unwrap(), 0.5);
    assert_eq!(flow_position(60.0, 0.0, 60.0).unwrap(), 0.0);
    let before = flow_position(-15.0, 0.0, 60.0).unwrap();
    assert!((0.0..1.0).contains(&before));
    assert_eq!(before, 0.75);
    assert!(flow_position(10.0, 0.0, 0.0).is_err());
}

#[test]
fn pulse_peaks_mid_cycle() {
    assert_eq!(pulse_opacity(0.0, 0.0, 60.0).unwrap(), 0.0);
    assert!(close(pulse_opacity(30.0, 0.0, 60.0).unwrap(), 1.0));
}

#[test]
fn dots_are_evenly_spaced_and_wrapped() {
    let dots = flow_dots(45.0, 0.0, 3, 60.0).unwrap();
    assert_eq!(dots.len(), 3);
    assert!(close(dots[0], 0.75));
    assert!(close(dots[1], 0.75 + 1.0 / 3.0 - 1.0));
    assert!(close(dots[2], 0.75 + 2.0 / 3.0 - 1.0));
    assert!(dots.iter().all(|p| (0.0..=1.0).contains(p)));
    assert!(flow_dots(0.0, 0.0, 0, 60.0).unwrap().is_empty());
}

#[test]
fn gradient_slides_across() {
    assert_eq!(gradient_offset(0.0, 0.0, 60.0).unwrap(), -100.0);
    assert_eq!(gradient_offset(30.0, 0.0, 60.0).unwrap(), 0.0);
    assert_eq!(gradient_offset(45.0, 0.0, 60.0).unwrap(), 50.0);
}

#[test]
fn flow_style_by_kind() {
    assert_eq!(
        FlowStyle::evaluate(FlowKind::None, 10.0, 0.0, 60.0).unwrap(),
        FlowStyle::None
    );
    let particles = FlowStyle::evaluate(FlowKind::Particles, 10.0, 0.0, 60.0).unwrap();
    assert_eq!(particles.positions().len(), PARTICLE_COUNT);
    match particles {
        FlowStyle::Particles { opacity, .. } => assert_eq!(opacity, PARTICLE_OPACITY),
        other => panic!("unexpected {other:?}"),
    }
    let dots = FlowStyle::evaluate(FlowKind::Dots, 10.0, 0.0, 60.0).unwrap();
    assert_eq!(dots.positions().len(), DOT_COUNT);
    let pulse = FlowStyle::evaluate(FlowKind::Pulse, 10.0, 0.0, 60.0).unwrap();
    assert!(pulse.positions().is_empty());
}

#[test]
fn lifecycle_is_a_function_of_frame() {
    assert_eq!(Phase::at(9.0, 10.0, 20.0), Phase::NotStarted);
    assert_eq!(Phase::at(10.0, 10.0, 20.0), Phase::Animating);
    assert_eq!(Phase::at(30.0, 10.0, 20.0), Phase::Animating);
    assert_eq!(Phase::at(30.5, 10.0, 20.0), Phase::Settled);
}
