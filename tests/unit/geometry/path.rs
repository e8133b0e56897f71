use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn straight_path_is_a_single_line() {
    let path = edge_path(Point::new(0.0, 0.0), Point::new(100.0, 0.0), EdgeType::Straight);
    assert_eq!(path.elements().len(), 2);
    let svg = edge_path_svg(Point::new(0.0, 0.0), Point::new(100.0, 0.0), EdgeType::Straight);
    assert!(svg.starts_with('M'));
    assert!(svg.contains('L'));
}

#[test]
fn bezier_controls_follow_dominant_axis() {
    let path = edge_path(Point::new(0.0, 0.0), Point::new(200.0, 50.0), EdgeType::Bezier);
    match path.elements()[1] {
        kurbo::PathEl::CurveTo(p1, p2, p3) => {
            assert_eq!(p1, Point::new(100.0, 0.0));
            assert_eq!(p2, Point::new(100.0, 50.0));
            assert_eq!(p3, Point::new(200.0, 50.0));
        }
        other => panic!("expected a cubic segment, got {other:?}"),
    }

    let vertical = edge_path(Point::new(0.0, 0.0), Point::new(20.0, 300.0), EdgeType::Bezier);
    match vertical.elements()[1] {
        kurbo::PathEl::CurveTo(p1, p2, _) => {
            assert_eq!(p1, Point::new(0.0, 150.0));
            assert_eq!(p2, Point::new(20.0, 150.0));
        }
        other => panic!("expected a cubic segment, got {other:?}"),
    }
}

#[test]
fn orthogonal_routes_through_horizontal_midpoint() {
    let path = edge_path(Point::new(0.0, 0.0), Point::new(100.0, 60.0), EdgeType::Orthogonal);
    let points: Vec<Point> = path
        .elements()
        .iter()
        .filter_map(|el| match el {
            kurbo::PathEl::MoveTo(p) | kurbo::PathEl::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(
        points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(50.0, 60.0),
            Point::new(100.0, 60.0),
        ]
    );
}

#[test]
fn step_turns_once_at_target_column() {
    let path = edge_path(Point::new(0.0, 0.0), Point::new(100.0, 60.0), EdgeType::Step);
    assert_eq!(path.elements()[1], kurbo::PathEl::LineTo(Point::new(100.0, 0.0)));
    assert_eq!(path.elements()[2], kurbo::PathEl::LineTo(Point::new(100.0, 60.0)));
}

#[test]
fn position_hits_endpoints_and_clamps() {
    let a = Point::new(10.0, 20.0);
    let b = Point::new(210.0, 120.0);
    for kind in [
        EdgeType::Straight,
        EdgeType::Bezier,
        EdgeType::Orthogonal,
        EdgeType::Step,
    ] {
        assert_eq!(position_along_path(a, b, 0.0, kind), a);
        assert_eq!(position_along_path(a, b, 1.0, kind), b);
        assert_eq!(position_along_path(a, b, -3.0, kind), a);
        assert_eq!(position_along_path(a, b, 7.0, kind), b);
    }
}

#[test]
fn bezier_midpoint_matches_drawn_curve() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(200.0, 100.0);
    let mid = position_along_path(a, b, 0.5, EdgeType::Bezier);
    // Symmetric S-curve: the midpoint is the chord midpoint.
    assert!(close(mid.x, 100.0));
    assert!(close(mid.y, 50.0));
    assert_eq!(label_position(a, b, 0.5, EdgeType::Bezier), mid);
}

#[test]
fn straight_length_is_exact() {
    let len = path_length(Point::new(0.0, 0.0), Point::new(30.0, 40.0), EdgeType::Straight);
    assert_eq!(len, 50.0);
}

#[test]
fn curved_length_is_at_least_the_chord() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(300.0, 120.0);
    let chord = a.distance(b);
    let len = path_length(a, b, EdgeType::Bezier);
    assert!(len >= chord - 1e-9);
    assert!(len < chord * 1.5);
}

#[test]
fn degenerate_endpoints_have_zero_length() {
    let p = Point::new(5.0, 5.0);
    for kind in [
        EdgeType::Straight,
        EdgeType::Bezier,
        EdgeType::Orthogonal,
        EdgeType::Step,
    ] {
        assert_eq!(path_length(p, p, kind), 0.0);
        assert!(!edge_path_svg(p, p, kind).contains("NaN"));
    }
}

#[test]
fn length_follows_the_drawn_route() {
    use kurbo::Shape as _;

    let a = Point::new(0.0, 0.0);
    let b = Point::new(100.0, 100.0);
    assert_eq!(path_length(a, b, EdgeType::Orthogonal), 200.0);
    assert_eq!(path_length(a, b, EdgeType::Step), 200.0);

    let c = Point::new(-40.0, 90.0);
    for kind in [
        EdgeType::Straight,
        EdgeType::Bezier,
        EdgeType::Orthogonal,
        EdgeType::Step,
    ] {
        for (s, t) in [(a, b), (b, a), (a, c), (c, b)] {
            let drawn = edge_path(s, t, kind).perimeter(1e-9);
            let len = path_length(s, t, kind);
            // The sampled Bezier sits just inside the curve.
            let tolerance = if kind == EdgeType::Bezier { drawn * 1e-2 } else { 1e-6 };
            assert!(
                (len - drawn).abs() <= tolerance,
                "{kind:?} {s:?}->{t:?}: {len} vs drawn {drawn}"
            );
        }
    }
}
