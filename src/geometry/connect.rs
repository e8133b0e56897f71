use crate::foundation::core::{Point, Rect, Size};

/// Visual outline of a node, used to pick where connectors attach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum NodeShape {
    /// Plain box.
    #[default]
    Rectangle,
    /// Box with rounded corners; attaches like [`NodeShape::Rectangle`].
    Rounded,
    /// Circle inscribed in the node box.
    Circle,
    /// Capsule; attaches like [`NodeShape::Circle`].
    Pill,
    /// Rotated square inscribed in the node box.
    Diamond,
}

impl NodeShape {
    /// Size used when a node declares none.
    pub fn default_size(self) -> Size {
        match self {
            Self::Diamond => Size::new(200.0, 200.0),
            Self::Rectangle | Self::Rounded | Self::Circle | Self::Pill => Size::new(160.0, 100.0),
        }
    }
}

/// Visual tuning for connector attachment points.
///
/// These land points slightly inside the rendered outline (borders, rounded corners, padding)
/// rather than on the mathematical boundary.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConnectionTuning {
    /// Inset from the exit edge of rectangular nodes.
    pub rect_inset: f64,
    /// Fraction of the radius used for circles and pills.
    pub circle_scale: f64,
    /// Fraction of the half-extent used for diamonds.
    pub diamond_scale: f64,
}

impl Default for ConnectionTuning {
    fn default() -> Self {
        Self {
            rect_inset: 5.0,
            circle_scale: 0.9,
            diamond_scale: 0.7,
        }
    }
}

/// Point on the node outline where a connector heading toward `toward` should attach.
///
/// `rect` is the node box with its top-left at `rect.origin()`. `is_source` tells which end of
/// the connector is being resolved; both ends currently attach the same way.
pub fn connection_point(
    rect: Rect,
    shape: NodeShape,
    toward: Point,
    is_source: bool,
    tuning: &ConnectionTuning,
) -> Point {
    let center = rect.center();
    let d = toward - center;

    match shape {
        NodeShape::Diamond => {
            let reach = rect.width().min(rect.height()) / 2.0 * tuning.diamond_scale;
            let manhattan = d.x.abs() + d.y.abs();
            if manhattan == 0.0 {
                tracing::trace!(is_source, "diamond connection toward its own center");
                return Point::new(center.x + reach, center.y);
            }
            center + d * (reach / manhattan)
        }
        NodeShape::Circle | NodeShape::Pill => {
            let radius = rect.width().min(rect.height()) / 2.0 * tuning.circle_scale;
            let angle = d.y.atan2(d.x);
            Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        }
        NodeShape::Rectangle | NodeShape::Rounded => {
            rectangle_point(rect, center, toward, is_source, tuning.rect_inset)
        }
    }
}

fn rectangle_point(rect: Rect, center: Point, toward: Point, is_source: bool, inset: f64) -> Point {
    let dx = toward.x - center.x;
    let dy = toward.y - center.y;
    // Boxes smaller than twice the inset collapse the exit toward the center.
    let half_w = (rect.width() / 2.0 - inset).max(0.0);
    let half_h = (rect.height() / 2.0 - inset).max(0.0);

    if dx == 0.0 && dy == 0.0 {
        tracing::trace!(is_source, "rectangle connection toward its own center");
        return Point::new(center.x + half_w, center.y);
    }

    // Left/right edge when the direction is flatter than the box diagonal.
    if dx != 0.0 && (dy / dx).abs() < rect.height() / rect.width() {
        let slope = dy / dx;
        if dx > 0.0 {
            Point::new(center.x + half_w, center.y + slope * half_w)
        } else {
            Point::new(center.x - half_w, center.y - slope * half_w)
        }
    } else {
        let inv = dx / dy;
        if dy > 0.0 {
            Point::new(center.x + inv * half_h, center.y + half_h)
        } else {
            Point::new(center.x - inv * half_h, center.y - half_h)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/connect.rs"]
mod tests;
