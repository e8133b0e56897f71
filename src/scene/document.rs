use std::collections::BTreeSet;

use crate::{
    animation::timing::TimingConfig,
    foundation::core::Fps,
    foundation::error::{FlowError, FlowResult},
    layout::engine::compute_layout,
    layout::model::{EdgeSpec, LayoutPolicy, LayoutResult, NodeSpec},
    reveal::config::{AnimationPolicy, RevealConfig},
    reveal::frame::{GraphFrame, evaluate_graph_frame},
    reveal::orchestrate::{staggered_edge_frame, staggered_start_frame},
};

/// A declared diagram: graph, layout policy and reveal pacing.
///
/// Everything except `nodes` is optional in JSON and falls back to its defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagramScene {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fps: Fps,
    /// Frame the reveal sequence is anchored at.
    #[serde(default)]
    pub start_frame: f64,
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub layout: LayoutPolicy,
    #[serde(default)]
    pub animation: AnimationPolicy,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

impl DiagramScene {
    /// Scene with default policies.
    pub fn new(nodes: Vec<NodeSpec>, edges: Vec<EdgeSpec>) -> Self {
        Self {
            name: None,
            fps: Fps::default(),
            start_frame: 0.0,
            nodes,
            edges,
            layout: LayoutPolicy::default(),
            animation: AnimationPolicy::default(),
            reveal: RevealConfig::default(),
            timing: TimingConfig::default(),
        }
    }

    /// Parse and validate a JSON scene.
    pub fn from_json_str(s: &str) -> FlowResult<Self> {
        let scene: Self = serde_json::from_str(s)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json_pretty(&self) -> FlowResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configuration errors. Edges naming unknown nodes are allowed and render empty.
    pub fn validate(&self) -> FlowResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.start_frame.is_finite() {
            return Err(FlowError::validation(format!(
                "start_frame must be finite, got {}",
                self.start_frame
            )));
        }
        self.layout.validate()?;
        self.animation.validate()?;
        self.reveal.validate()?;
        self.timing.validate()?;

        let mut node_ids = BTreeSet::new();
        for node in &self.nodes {
            if node.id.is_empty() {
                return Err(FlowError::validation("node id must be non-empty"));
            }
            if !node_ids.insert(node.id.as_str()) {
                return Err(FlowError::validation(format!(
                    "duplicate node id \"{}\"",
                    node.id
                )));
            }
        }
        let mut edge_ids = BTreeSet::new();
        for edge in &self.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(FlowError::validation(format!(
                    "duplicate edge id \"{}\"",
                    edge.id
                )));
            }
            if let Some(r) = edge.label_ratio
                && !r.is_finite()
            {
                return Err(FlowError::validation(format!(
                    "edge \"{}\" label_ratio must be finite",
                    edge.id
                )));
            }
        }
        Ok(())
    }

    /// Resolve geometry. Depends only on the declared graph, never on a frame.
    pub fn layout(&self) -> FlowResult<LayoutResult> {
        compute_layout(&self.nodes, &self.edges, &self.layout)
    }

    /// Reveal state at `frame` for a layout produced by [`DiagramScene::layout`].
    pub fn frame(&self, layout: &LayoutResult, frame: f64) -> FlowResult<GraphFrame> {
        evaluate_graph_frame(
            layout,
            frame,
            self.start_frame,
            &self.animation,
            &self.reveal,
        )
    }

    /// First frame at which every node and edge has finished revealing.
    pub fn settled_frame(&self) -> f64 {
        let base = self.start_frame + self.animation.sequence_delay;
        let cfg = self.animation.effective(&self.reveal);
        let mut end = base;
        if let Some(last) = self.nodes.len().checked_sub(1) {
            end = end.max(staggered_start_frame(base, last, cfg.node_stagger) + cfg.node_reveal);
        }
        if let Some(last) = self.edges.len().checked_sub(1) {
            let start = if self.animation.stagger_edges {
                staggered_edge_frame(base, last, self.nodes.len(), &cfg)
            } else {
                base
            };
            end = end.max(start + cfg.edge_reveal);
        }
        end
    }

    /// Length of the reveal sequence in seconds at the scene's frame rate.
    pub fn reveal_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.settled_frame() - self.start_frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
