use crate::{
    foundation::core::{Point, Size},
    foundation::error::FlowResult,
    foundation::math::lerp,
    geometry::path::{path_length, position_along_path},
    layout::model::{ComputedEdge, ComputedNode, LayoutResult, NodeStatus},
    reveal::config::{AnimationPolicy, RevealConfig},
    reveal::orchestrate::{
        FlowStyle, Phase, StrokeDash, edge_draw_progress, node_reveal_progress,
        staggered_edge_frame, staggered_start_frame, stroke_dash,
    },
};

/// Per-frame state of one node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeFrame {
    pub id: String,
    pub start_frame: f64,
    pub phase: Phase,
    /// Eased reveal progress; overshoots past 1 mid pop-in.
    pub progress: f64,
    pub scale: f64,
    /// Reveal progress clamped to `[0, 1]`.
    pub opacity: f64,
    pub position: Point,
    pub size: Size,
    pub status: NodeStatus,
}

/// Per-frame state of one edge.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeFrame {
    pub id: String,
    pub start_frame: f64,
    pub phase: Phase,
    pub draw_progress: f64,
    pub path_length: f64,
    pub dash: StrokeDash,
    pub stroke_opacity: f64,
    /// Zero until the edge is half drawn.
    pub label_opacity: f64,
    /// Active only once the edge is fully drawn.
    pub flow: FlowStyle,
    /// Marker centers for dot and particle flows.
    pub flow_points: Vec<Point>,
}

/// Everything a renderer needs to draw a laid-out graph at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphFrame {
    pub frame: f64,
    pub nodes: Vec<NodeFrame>,
    pub edges: Vec<EdgeFrame>,
}

/// Evaluate reveal state for every node and edge of `layout` at `frame`.
///
/// Nodes reveal first in declaration order; edges start once the last node has finished.
#[tracing::instrument(skip(layout, policy, reveal), fields(nodes = layout.nodes.len(), edges = layout.edges.len()))]
pub fn evaluate_graph_frame(
    layout: &LayoutResult,
    frame: f64,
    start_frame: f64,
    policy: &AnimationPolicy,
    reveal: &RevealConfig,
) -> FlowResult<GraphFrame> {
    policy.validate()?;
    reveal.validate()?;

    let base = start_frame + policy.sequence_delay;
    let cfg = policy.effective(reveal);
    let node_total = layout.nodes.len();

    let nodes = layout
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let start = staggered_start_frame(base, i, cfg.node_stagger);
            node_frame(node, frame, start, &cfg)
        })
        .collect::<FlowResult<Vec<_>>>()?;

    let edges = layout
        .edges
        .iter()
        .enumerate()
        .map(|(i, edge)| {
            let start = if policy.stagger_edges {
                staggered_edge_frame(base, i, node_total, &cfg)
            } else {
                base
            };
            edge_frame(edge, frame, start, &cfg)
        })
        .collect::<FlowResult<Vec<_>>>()?;

    Ok(GraphFrame {
        frame,
        nodes,
        edges,
    })
}

fn node_frame(node: &ComputedNode, frame: f64, start: f64, cfg: &RevealConfig) -> FlowResult<NodeFrame> {
    let progress = node_reveal_progress(frame, start, cfg.node_reveal)?;
    Ok(NodeFrame {
        id: node.id.clone(),
        start_frame: start,
        phase: Phase::at(frame, start, cfg.node_reveal),
        progress,
        scale: lerp(cfg.node_scale_from, 1.0, progress),
        opacity: progress.clamp(0.0, 1.0),
        position: node.position,
        size: node.size,
        status: node.status,
    })
}

fn edge_frame(edge: &ComputedEdge, frame: f64, start: f64, cfg: &RevealConfig) -> FlowResult<EdgeFrame> {
    let draw = edge_draw_progress(frame, start, cfg.edge_reveal)?;
    let length = if edge.resolved {
        path_length(edge.source_point, edge.target_point, edge.kind)
    } else {
        0.0
    };

    let label_opacity = if edge.label_position.is_some() && draw >= 0.5 {
        ((draw - 0.5) * 2.0).min(1.0)
    } else {
        0.0
    };

    let flow = if edge.resolved && draw >= 1.0 {
        FlowStyle::evaluate(edge.flow, frame, start + cfg.flow_delay, cfg.flow_cycle)?
    } else {
        FlowStyle::None
    };
    let flow_points = flow
        .positions()
        .iter()
        .map(|&ratio| position_along_path(edge.source_point, edge.target_point, ratio, edge.kind))
        .collect();

    Ok(EdgeFrame {
        id: edge.id.clone(),
        start_frame: start,
        phase: Phase::at(frame, start, cfg.edge_reveal),
        draw_progress: draw,
        path_length: length,
        dash: stroke_dash(length, draw),
        stroke_opacity: if edge.animated {
            (draw * 2.0).min(1.0)
        } else {
            1.0
        },
        label_opacity,
        flow,
        flow_points,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/frame.rs"]
mod tests;
