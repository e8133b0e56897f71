use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::core::Point,
    foundation::error::{FlowError, FlowResult},
    geometry::connect::{ConnectionTuning, connection_point},
    geometry::path::{edge_path_svg, label_position},
    layout::model::{
        Bounds, ComputedEdge, ComputedNode, EdgeSpec, LayoutPolicy, LayoutResult, NodeSpec,
    },
    layout::ranked::{LayeredGraph, LayeredLayout, LayeredParams, Sugiyama},
};

/// Label anchor used when an edge declares none.
pub const DEFAULT_LABEL_RATIO: f64 = 0.5;

/// Resolve node positions and edge geometry with the built-in [`Sugiyama`] layout.
pub fn compute_layout(
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
    policy: &LayoutPolicy,
) -> FlowResult<LayoutResult> {
    compute_layout_with(nodes, edges, policy, &Sugiyama::default())
}

/// [`compute_layout`] with a caller-supplied layered layout.
#[tracing::instrument(skip(nodes, edges, policy, layered), fields(nodes = nodes.len(), edges = edges.len()))]
pub fn compute_layout_with(
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
    policy: &LayoutPolicy,
    layered: &dyn LayeredLayout,
) -> FlowResult<LayoutResult> {
    policy.validate()?;
    validate_nodes(nodes)?;

    let mut placed: Vec<ComputedNode> = nodes.iter().map(seed_node).collect();

    if policy.algorithm.is_automatic() {
        let index: BTreeMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.as_str(), i))
            .collect();
        let graph = LayeredGraph {
            sizes: placed.iter().map(|n| n.size).collect(),
            edges: edges
                .iter()
                .filter_map(|e| Some((*index.get(e.source.as_str())?, *index.get(e.target.as_str())?)))
                .collect(),
        };
        let params = LayeredParams {
            direction: policy.direction,
            node_spacing: policy.node_spacing,
            rank_spacing: policy.level_spacing,
            margin: policy.padding,
        };
        let centers = layered.place(&graph, &params)?;
        if centers.len() != placed.len() {
            return Err(FlowError::layout(format!(
                "layered layout returned {} positions for {} nodes",
                centers.len(),
                placed.len()
            )));
        }
        for (node, center) in placed.iter_mut().zip(centers) {
            node.position = Point::new(
                center.x - node.size.width / 2.0,
                center.y - node.size.height / 2.0,
            );
        }
    }

    let mut bounds = Bounds::of_nodes(&placed);
    if policy.center_graph && !placed.is_empty() {
        let dx = policy.padding - bounds.min_x;
        let dy = policy.padding - bounds.min_y;
        for node in &mut placed {
            node.position = Point::new(node.position.x + dx, node.position.y + dy);
        }
        bounds = Bounds::of_nodes(&placed);
    }

    // Edges are derived only from final node positions.
    let routed = route_edges(&placed, edges, &policy.connection);
    let missing = routed.iter().filter(|e| !e.resolved).count();

    tracing::debug!(
        algorithm = ?policy.algorithm,
        direction = ?policy.direction,
        width = bounds.width,
        height = bounds.height,
        missing,
        "layout computed"
    );

    Ok(LayoutResult {
        nodes: placed,
        edges: routed,
        bounds,
    })
}

fn validate_nodes(nodes: &[NodeSpec]) -> FlowResult<()> {
    let mut seen = BTreeSet::new();
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(FlowError::validation(format!(
                "duplicate node id \"{}\"",
                node.id
            )));
        }
        if let Some(size) = node.size
            && (!size.width.is_finite()
                || !size.height.is_finite()
                || size.width <= 0.0
                || size.height <= 0.0)
        {
            return Err(FlowError::validation(format!(
                "node \"{}\" size must be finite and positive, got {}x{}",
                node.id, size.width, size.height
            )));
        }
        if let Some(p) = node.position
            && !(p.x.is_finite() && p.y.is_finite())
        {
            return Err(FlowError::validation(format!(
                "node \"{}\" position must be finite",
                node.id
            )));
        }
    }
    Ok(())
}

fn seed_node(spec: &NodeSpec) -> ComputedNode {
    ComputedNode {
        id: spec.id.clone(),
        shape: spec.shape,
        label: spec.label.clone(),
        title: spec.title.clone(),
        status: spec.status,
        position: spec.position.unwrap_or(Point::ZERO),
        size: spec.resolved_size(),
    }
}

/// Derive every edge's endpoints, path and label anchor from placed nodes.
pub fn route_edges(
    nodes: &[ComputedNode],
    edges: &[EdgeSpec],
    tuning: &ConnectionTuning,
) -> Vec<ComputedEdge> {
    let by_id: BTreeMap<&str, &ComputedNode> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    edges
        .iter()
        .map(|edge| {
            let ends = by_id
                .get(edge.source.as_str())
                .zip(by_id.get(edge.target.as_str()));
            match ends {
                Some((src, dst)) => route_edge(edge, src, dst, tuning),
                None => {
                    tracing::warn!(
                        edge = %edge.id,
                        source = %edge.source,
                        target = %edge.target,
                        "edge references a missing node"
                    );
                    unresolved_edge(edge)
                }
            }
        })
        .collect()
}

fn route_edge(
    edge: &EdgeSpec,
    src: &ComputedNode,
    dst: &ComputedNode,
    tuning: &ConnectionTuning,
) -> ComputedEdge {
    let source_point = connection_point(src.rect(), src.shape, dst.center(), true, tuning);
    let target_point = connection_point(dst.rect(), dst.shape, src.center(), false, tuning);
    let label_position = edge.label.as_ref().map(|_| {
        let ratio = edge.label_ratio.unwrap_or(DEFAULT_LABEL_RATIO);
        label_position(source_point, target_point, ratio, edge.kind)
    });

    ComputedEdge {
        path: edge_path_svg(source_point, target_point, edge.kind),
        source_point,
        target_point,
        label_position,
        resolved: true,
        ..unresolved_edge(edge)
    }
}

fn unresolved_edge(edge: &EdgeSpec) -> ComputedEdge {
    ComputedEdge {
        id: edge.id.clone(),
        source: edge.source.clone(),
        target: edge.target.clone(),
        kind: edge.kind,
        label: edge.label.clone(),
        animated: edge.animated,
        flow: edge.flow,
        color: edge.color.clone(),
        path: String::new(),
        source_point: Point::ZERO,
        target_point: Point::ZERO,
        label_position: None,
        label_ratio: edge.label_ratio,
        resolved: false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
