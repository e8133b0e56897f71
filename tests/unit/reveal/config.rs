use super::*;

#[test]
fn defaults_match_house_pacing() {
    let r = RevealConfig::default();
    assert_eq!(r.node_reveal, 20.0);
    assert_eq!(r.edge_reveal, 30.0);
    assert_eq!(r.node_stagger, 10.0);
    assert_eq!(r.edge_stagger, 15.0);
    assert_eq!(r.status_transition, 20.0);
    assert_eq!(r.flow_cycle, 60.0);
    assert_eq!(r.flow_delay, 30.0);
    assert!(r.validate().is_ok());

    let a = AnimationPolicy::default();
    assert_eq!((a.node_delay, a.edge_delay, a.sequence_delay), (10.0, 15.0, 0.0));
    assert!(a.stagger_nodes && a.stagger_edges);
}

#[test]
fn partial_json_keeps_defaults() {
    let r: RevealConfig = serde_json::from_str(r#"{"edge_reveal": 45}"#).unwrap();
    assert_eq!(r.edge_reveal, 45.0);
    assert_eq!(r.node_reveal, 20.0);

    let a: AnimationPolicy = serde_json::from_str(r#"{"stagger_nodes": false}"#).unwrap();
    assert!(!a.stagger_nodes);
    assert_eq!(a.edge_delay, 15.0);
}

#[test]
fn zero_flow_cycle_is_rejected() {
    let r = RevealConfig {
        flow_cycle: 0.0,
        ..RevealConfig::default()
    };
    assert!(r.validate().is_err());

    let a = AnimationPolicy {
        node_delay: -1.0,
        ..AnimationPolicy::default()
    };
    assert!(a.validate().is_err());
}

#[test]
fn effective_pacing_follows_policy() {
    let policy = AnimationPolicy {
        node_delay: 4.0,
        edge_delay: 6.0,
        ..AnimationPolicy::default()
    };
    let eff = policy.effective(&RevealConfig::default());
    assert_eq!(eff.node_stagger, 4.0);
    assert_eq!(eff.edge_stagger, 6.0);
    assert_eq!(eff.node_reveal, 20.0);

    let flat = AnimationPolicy {
        stagger_nodes: false,
        ..AnimationPolicy::default()
    };
    assert_eq!(flat.effective(&RevealConfig::default()).node_stagger, 0.0);
}
