use crate::{
    animation::presets::check_period, animation::timing::check_frames,
    foundation::error::FlowResult,
};

/// Graph reveal pacing, in frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Pop-in length of one node.
    pub node_reveal: f64,
    /// Draw length of one edge.
    pub edge_reveal: f64,
    /// Gap between consecutive node starts.
    pub node_stagger: f64,
    /// Gap between consecutive edge starts.
    pub edge_stagger: f64,
    /// Cross-fade length between node statuses.
    pub status_transition: f64,
    /// Length of one flow loop.
    pub flow_cycle: f64,
    /// Delay from an edge's start to its flow effect.
    pub flow_delay: f64,
    /// Node scale at the start of its pop-in.
    pub node_scale_from: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            node_reveal: 20.0,
            edge_reveal: 30.0,
            node_stagger: 10.0,
            edge_stagger: 15.0,
            status_transition: 20.0,
            flow_cycle: 60.0,
            flow_delay: 30.0,
            node_scale_from: 0.9,
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> FlowResult<()> {
        for (name, value) in [
            ("node_reveal", self.node_reveal),
            ("edge_reveal", self.edge_reveal),
            ("node_stagger", self.node_stagger),
            ("edge_stagger", self.edge_stagger),
            ("status_transition", self.status_transition),
            ("flow_delay", self.flow_delay),
            ("node_scale_from", self.node_scale_from),
        ] {
            check_frames(name, value)?;
        }
        check_period("flow_cycle", self.flow_cycle)
    }
}

/// Per-graph reveal policy.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationPolicy {
    /// Frames between node starts when staggering.
    pub node_delay: f64,
    /// Frames between edge starts when staggering.
    pub edge_delay: f64,
    /// Offset applied to the whole sequence.
    pub sequence_delay: f64,
    pub stagger_nodes: bool,
    /// When false every edge starts with the sequence instead of after the nodes.
    pub stagger_edges: bool,
}

impl Default for AnimationPolicy {
    fn default() -> Self {
        Self {
            node_delay: 10.0,
            edge_delay: 15.0,
            sequence_delay: 0.0,
            stagger_nodes: true,
            stagger_edges: true,
        }
    }
}

impl AnimationPolicy {
    pub fn validate(&self) -> FlowResult<()> {
        check_frames("node_delay", self.node_delay)?;
        check_frames("edge_delay", self.edge_delay)?;
        check_frames("sequence_delay", self.sequence_delay)
    }

    /// Pacing with this policy's delays substituted for the stagger defaults.
    pub fn effective(&self, reveal: &RevealConfig) -> RevealConfig {
        RevealConfig {
            node_stagger: if self.stagger_nodes { self.node_delay } else { 0.0 },
            edge_stagger: self.edge_delay,
            ..*reveal
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/config.rs"]
mod tests;
