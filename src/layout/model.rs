use crate::{
    foundation::core::{Point, Rect, Size},
    foundation::error::{FlowError, FlowResult},
    geometry::connect::{ConnectionTuning, NodeShape},
    geometry::path::EdgeType,
};

/// Workflow state a node is displayed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum NodeStatus {
    /// Not reached yet.
    #[default]
    Pending,
    /// Currently running.
    Active,
    /// Finished successfully.
    Complete,
    /// Finished with a failure.
    Error,
}

/// Looping effect drawn along an edge once it has been fully revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FlowKind {
    /// No flow effect.
    #[default]
    None,
    /// Whole-edge opacity pulse, one hump per cycle.
    Pulse,
    /// Three evenly spaced dots travelling along the edge.
    Dots,
    /// Five evenly spaced translucent particles.
    Particles,
    /// Gradient band sliding across the edge.
    Gradient,
}

/// Declared graph node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeSpec {
    /// Unique id edges refer to.
    pub id: String,
    /// Outline used for rendering and edge attachment.
    #[serde(default)]
    pub shape: NodeShape,
    /// Body text.
    #[serde(default)]
    pub label: Option<String>,
    /// Prominent heading text.
    #[serde(default)]
    pub title: Option<String>,
    /// Top-left corner; only honoured by [`LayoutAlgorithm::Manual`].
    #[serde(default)]
    pub position: Option<Point>,
    /// Box size; defaults by shape.
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub status: NodeStatus,
}

impl NodeSpec {
    /// Rectangle node with only an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shape: NodeShape::default(),
            label: None,
            title: None,
            position: None,
            size: None,
            status: NodeStatus::default(),
        }
    }

    /// Builder-style shape override.
    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = shape;
        self
    }

    /// Builder-style label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder-style fixed position (top-left).
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    /// Builder-style explicit size.
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Declared size, or the shape default.
    pub fn resolved_size(&self) -> Size {
        self.size.unwrap_or_else(|| self.shape.default_size())
    }
}

/// Declared directed connector between two nodes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeSpec {
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    #[serde(default)]
    pub kind: EdgeType,
    #[serde(default)]
    pub label: Option<String>,
    /// Label anchor along the edge in `[0, 1]`; `0.5` when unset.
    #[serde(default)]
    pub label_ratio: Option<f64>,
    /// Fade the stroke in while it draws.
    #[serde(default)]
    pub animated: bool,
    #[serde(default)]
    pub flow: FlowKind,
    /// Stroke color passed through to the renderer.
    #[serde(default)]
    pub color: Option<String>,
}

impl EdgeSpec {
    /// Default bezier edge.
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind: EdgeType::default(),
            label: None,
            label_ratio: None,
            animated: false,
            flow: FlowKind::default(),
            color: None,
        }
    }

    /// Builder-style connector kind.
    pub fn with_kind(mut self, kind: EdgeType) -> Self {
        self.kind = kind;
        self
    }

    /// Builder-style label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder-style flow effect.
    pub fn with_flow(mut self, flow: FlowKind) -> Self {
        self.flow = flow;
        self
    }

    /// Builder-style animated flag.
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }
}

/// Placement strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LayoutAlgorithm {
    /// Use declared positions as-is.
    Manual,
    /// Rank-based layout.
    Tree,
    /// Rank-based layout.
    #[default]
    Dag,
    /// Rank-based layout.
    Force,
}

impl LayoutAlgorithm {
    /// Whether node positions are computed rather than declared.
    pub fn is_automatic(self) -> bool {
        !matches!(self, Self::Manual)
    }
}

/// Axis ranks advance along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LayoutDirection {
    /// Ranks flow left to right.
    #[default]
    Horizontal,
    /// Ranks flow top to bottom.
    Vertical,
}

/// Layout parameters for one graph.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutPolicy {
    pub algorithm: LayoutAlgorithm,
    pub direction: LayoutDirection,
    /// Gap between neighbouring nodes within a rank.
    pub node_spacing: f64,
    /// Gap between consecutive ranks.
    pub level_spacing: f64,
    /// Outer margin, and the top-left target of `center_graph`.
    pub padding: f64,
    /// Translate the result so its bounds start at `(padding, padding)`.
    pub center_graph: bool,
    pub connection: ConnectionTuning,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            algorithm: LayoutAlgorithm::Dag,
            direction: LayoutDirection::Horizontal,
            node_spacing: 80.0,
            level_spacing: 150.0,
            padding: 20.0,
            center_graph: false,
            connection: ConnectionTuning::default(),
        }
    }
}

impl LayoutPolicy {
    /// Manual placement with default spacing.
    pub fn manual() -> Self {
        Self {
            algorithm: LayoutAlgorithm::Manual,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> FlowResult<()> {
        for (name, value) in [
            ("node_spacing", self.node_spacing),
            ("level_spacing", self.level_spacing),
            ("padding", self.padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FlowError::validation(format!(
                    "layout {name} must be finite and >= 0, got {value}"
                )));
            }
        }
        let c = &self.connection;
        for (name, value) in [
            ("rect_inset", c.rect_inset),
            ("circle_scale", c.circle_scale),
            ("diamond_scale", c.diamond_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FlowError::validation(format!(
                    "connection {name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Node with resolved placement.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComputedNode {
    pub id: String,
    pub shape: NodeShape,
    pub label: Option<String>,
    pub title: Option<String>,
    pub status: NodeStatus,
    /// Top-left corner.
    pub position: Point,
    pub size: Size,
}

impl ComputedNode {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }
}

/// Edge with derived geometry.
///
/// An edge whose source or target id is unknown keeps an empty `path`, zero endpoints and no
/// label position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComputedEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeType,
    pub label: Option<String>,
    pub animated: bool,
    pub flow: FlowKind,
    pub color: Option<String>,
    /// SVG path data.
    pub path: String,
    pub source_point: Point,
    pub target_point: Point,
    pub label_position: Option<Point>,
    /// Ratio as declared.
    pub label_ratio: Option<f64>,
    /// Both endpoints resolved to declared nodes.
    pub resolved: bool,
}

/// Axis-aligned extent of all node boxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Bounds over the node boxes; all zero for an empty slice.
    pub fn of_nodes(nodes: &[ComputedNode]) -> Self {
        let mut iter = nodes.iter().map(ComputedNode::rect);
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let r = iter.fold(first, |acc, r| acc.union(r));
        Self {
            min_x: r.x0,
            min_y: r.y0,
            max_x: r.x1,
            max_y: r.y1,
            width: r.x1 - r.x0,
            height: r.y1 - r.y0,
        }
    }
}

/// Output of [`crate::compute_layout`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutResult {
    /// In declaration order.
    pub nodes: Vec<ComputedNode>,
    /// In declaration order.
    pub edges: Vec<ComputedEdge>,
    pub bounds: Bounds,
}

impl LayoutResult {
    pub fn node(&self, id: &str) -> Option<&ComputedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&ComputedEdge> {
        self.edges.iter().find(|e| e.id == id)
    }
}
