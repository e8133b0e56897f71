use kurbo::ParamCurve;

use crate::foundation::core::{BezPath, CubicBez, Point};

/// Polyline resolution used to approximate curved path lengths.
pub const PATH_LENGTH_SAMPLES: usize = 20;

/// Connector style between two endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EdgeType {
    /// Direct line.
    Straight,
    /// Single cubic S-curve favoring the dominant flow axis.
    #[default]
    Bezier,
    /// Three-segment Manhattan route through the horizontal midpoint.
    Orthogonal,
    /// Two-segment staircase.
    Step,
}

// Control points sit on the dominant axis, offset by half its delta, so the curve leaves and
// enters along the flow direction.
fn bezier_curve(source: Point, target: Point) -> CubicBez {
    let dx = target.x - source.x;
    let dy = target.y - source.y;
    let (cp1, cp2) = if dx.abs() > dy.abs() {
        let offset = dx.abs() * 0.5;
        (
            Point::new(source.x + offset, source.y),
            Point::new(target.x - offset, target.y),
        )
    } else {
        let offset = dy.abs() * 0.5;
        (
            Point::new(source.x, source.y + offset),
            Point::new(target.x, target.y - offset),
        )
    };
    CubicBez::new(source, cp1, cp2, target)
}

/// Path geometry of a connector from `source` to `target`.
pub fn edge_path(source: Point, target: Point, kind: EdgeType) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(source);
    match kind {
        EdgeType::Straight => path.line_to(target),
        EdgeType::Bezier => {
            let c = bezier_curve(source, target);
            path.curve_to(c.p1, c.p2, c.p3);
        }
        EdgeType::Orthogonal => {
            let mid_x = source.x + (target.x - source.x) / 2.0;
            path.line_to((mid_x, source.y));
            path.line_to((mid_x, target.y));
            path.line_to(target);
        }
        EdgeType::Step => {
            path.line_to((target.x, source.y));
            path.line_to(target);
        }
    }
    path
}

/// SVG `d` attribute for [`edge_path`].
pub fn edge_path_svg(source: Point, target: Point, kind: EdgeType) -> String {
    edge_path(source, target, kind).to_svg()
}

/// Point at `ratio` (clamped to `[0, 1]`) along the connector.
///
/// Bezier connectors are evaluated exactly on the same curve [`edge_path`] draws. Orthogonal
/// and step connectors use the straight chord between the endpoints.
pub fn position_along_path(source: Point, target: Point, ratio: f64, kind: EdgeType) -> Point {
    let ratio = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    };
    match kind {
        EdgeType::Bezier => bezier_curve(source, target).eval(ratio),
        EdgeType::Straight | EdgeType::Orthogonal | EdgeType::Step => source.lerp(target, ratio),
    }
}

/// Connector length for stroke-dash animations, measured along the route [`edge_path`] draws.
///
/// Straight, orthogonal and step connectors are exact; Bezier connectors sum a
/// [`PATH_LENGTH_SAMPLES`]-segment polyline over the curve. Coincident endpoints are 0.
pub fn path_length(source: Point, target: Point, kind: EdgeType) -> f64 {
    if source == target {
        return 0.0;
    }

    let dx = target.x - source.x;
    let dy = target.y - source.y;
    match kind {
        EdgeType::Straight => source.distance(target),
        // The horizontal legs meet at the midpoint, so they add up to |dx|.
        EdgeType::Orthogonal | EdgeType::Step => dx.abs() + dy.abs(),
        EdgeType::Bezier => {
            let curve = bezier_curve(source, target);
            let mut length = 0.0;
            let mut prev = source;
            for i in 1..=PATH_LENGTH_SAMPLES {
                let point = curve.eval(i as f64 / PATH_LENGTH_SAMPLES as f64);
                length += prev.distance(point);
                prev = point;
            }
            length
        }
    }
}

/// Label anchor at `ratio` along the connector (`0.5` is the midpoint).
pub fn label_position(source: Point, target: Point, ratio: f64, kind: EdgeType) -> Point {
    position_along_path(source, target, ratio, kind)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
