use super::*;
use crate::{
    layout::engine::compute_layout,
    layout::model::{EdgeSpec, LayoutPolicy, NodeSpec},
    reveal::config::{AnimationPolicy, RevealConfig},
    reveal::frame::evaluate_graph_frame,
};

fn layout() -> LayoutResult {
    let nodes = vec![NodeSpec::new("a"), NodeSpec::new("b"), NodeSpec::new("c")];
    let edges = vec![EdgeSpec::new("ab", "a", "b"), EdgeSpec::new("bc", "b", "c")];
    compute_layout(&nodes, &edges, &LayoutPolicy::default()).unwrap()
}

#[test]
fn layout_fingerprint_is_stable() {
    assert_eq!(layout().fingerprint(), layout().fingerprint());
}

#[test]
fn layout_fingerprint_tracks_geometry() {
    let base = layout();
    let mut moved = base.clone();
    moved.nodes[0].position.x += 1.0;
    assert_ne!(base.fingerprint(), moved.fingerprint());
}

#[test]
fn frame_fingerprints_differ_across_frames() {
    let l = layout();
    let policy = AnimationPolicy::default();
    let reveal = RevealConfig::default();
    let f10 = evaluate_graph_frame(&l, 10.0, 0.0, &policy, &reveal).unwrap();
    let f11 = evaluate_graph_frame(&l, 11.0, 0.0, &policy, &reveal).unwrap();
    let again = evaluate_graph_frame(&l, 10.0, 0.0, &policy, &reveal).unwrap();
    assert_ne!(f10.fingerprint(), f11.fingerprint());
    assert_eq!(f10.fingerprint(), again.fingerprint());
}

#[test]
fn display_is_32_hex_digits() {
    let fp = Fingerprint { hi: 1, lo: 0xff };
    let s = fp.to_string();
    assert_eq!(s.len(), 32);
    assert!(s.ends_with("ff"));
    assert!(s.starts_with("0000000000000001"));
}
