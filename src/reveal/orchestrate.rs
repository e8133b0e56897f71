//! Frame-indexed reveal timing for graph elements.
//!
//! Nothing here keeps state between frames: each value is a pure function of the frame number
//! and the declared timing, so frames can be evaluated in any order.

use std::f64::consts::PI;

use crate::{
    animation::ease::Ease,
    animation::interp::progress,
    animation::presets::check_period,
    foundation::error::{FlowError, FlowResult},
    layout::model::FlowKind,
    reveal::config::RevealConfig,
};

/// Dots drawn by [`FlowKind::Dots`].
pub const DOT_COUNT: usize = 3;
/// Particles drawn by [`FlowKind::Particles`].
pub const PARTICLE_COUNT: usize = 5;
/// Fixed particle opacity.
pub const PARTICLE_OPACITY: f64 = 0.8;

/// `base + index * delay`.
pub fn staggered_start_frame(base: f64, index: usize, delay: f64) -> f64 {
    base + index as f64 * delay
}

/// Start frame of edge `index`, after all `node_count` nodes have finished revealing.
///
/// An empty graph is treated as a single node so edges never start before `base`.
pub fn staggered_edge_frame(base: f64, index: usize, node_count: usize, cfg: &RevealConfig) -> f64 {
    let last_node = node_count.max(1) - 1;
    let nodes_complete = staggered_start_frame(base, last_node, cfg.node_stagger) + cfg.node_reveal;
    staggered_start_frame(nodes_complete, index, cfg.edge_stagger)
}

/// Node pop-in progress. Overshoots past 1 mid-animation.
pub fn node_reveal_progress(frame: f64, start: f64, duration: f64) -> FlowResult<f64> {
    progress(frame, start, duration, Ease::OutBack)
}

/// Edge drawing progress in `[0, 1]`.
pub fn edge_draw_progress(frame: f64, start: f64, duration: f64) -> FlowResult<f64> {
    progress(frame, start, duration, Ease::InOutCubic)
}

/// Stroke dash parameters that reveal a path progressively.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeDash {
    /// Dash length: the whole path.
    pub dash_array: f64,
    /// Hidden remainder of the path.
    pub dash_offset: f64,
}

pub fn stroke_dash(path_length: f64, progress: f64) -> StrokeDash {
    StrokeDash {
        dash_array: path_length,
        dash_offset: path_length * (1.0 - progress),
    }
}

/// Position in `[0, 1)` of a flow loop of `cycle` frames that began at `start`.
pub fn flow_position(frame: f64, start: f64, cycle: f64) -> FlowResult<f64> {
    check_period("flow cycle", cycle)?;
    if !frame.is_finite() || !start.is_finite() {
        return Err(FlowError::invalid_input(format!(
            "flow frames must be finite, got frame {frame} start {start}"
        )));
    }
    Ok((frame - start).rem_euclid(cycle) / cycle)
}

/// One `sin` hump per cycle.
pub fn pulse_opacity(frame: f64, start: f64, cycle: f64) -> FlowResult<f64> {
    Ok((flow_position(frame, start, cycle)? * PI).sin())
}

/// `count` evenly spaced positions along the loop, each wrapped back below 1.
pub fn flow_dots(frame: f64, start: f64, count: usize, cycle: f64) -> FlowResult<Vec<f64>> {
    let base = flow_position(frame, start, cycle)?;
    let spacing = 1.0 / count.max(1) as f64;
    Ok((0..count)
        .map(|i| {
            let p = base + i as f64 * spacing;
            if p > 1.0 { p - 1.0 } else { p }
        })
        .collect())
}

/// Gradient offset in percent, sliding from -100 to +100 over one cycle.
pub fn gradient_offset(frame: f64, start: f64, cycle: f64) -> FlowResult<f64> {
    Ok(flow_position(frame, start, cycle)? * 200.0 - 100.0)
}

/// Resolved flow effect for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FlowStyle {
    #[default]
    None,
    Pulse {
        opacity: f64,
    },
    Dots {
        /// Ratios along the edge.
        positions: Vec<f64>,
    },
    Particles {
        positions: Vec<f64>,
        opacity: f64,
    },
    Gradient {
        /// Percent.
        offset: f64,
    },
}

impl FlowStyle {
    /// Evaluate `kind` for a loop that began at `start`.
    pub fn evaluate(kind: FlowKind, frame: f64, start: f64, cycle: f64) -> FlowResult<Self> {
        Ok(match kind {
            FlowKind::None => Self::None,
            FlowKind::Pulse => Self::Pulse {
                opacity: pulse_opacity(frame, start, cycle)?,
            },
            FlowKind::Dots => Self::Dots {
                positions: flow_dots(frame, start, DOT_COUNT, cycle)?,
            },
            FlowKind::Particles => Self::Particles {
                positions: flow_dots(frame, start, PARTICLE_COUNT, cycle)?,
                opacity: PARTICLE_OPACITY,
            },
            FlowKind::Gradient => Self::Gradient {
                offset: gradient_offset(frame, start, cycle)?,
            },
        })
    }

    /// Ratios along the edge where markers are drawn.
    pub fn positions(&self) -> &[f64] {
        match self {
            Self::Dots { positions } | Self::Particles { positions, .. } => positions,
            Self::None | Self::Pulse { .. } | Self::Gradient { .. } => &[],
        }
    }
}

/// Lifecycle of a single animated element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Before its start frame.
    NotStarted,
    /// Within `[start, start + duration]`.
    Animating,
    /// Past its window; values hold their final state.
    Settled,
}

impl Phase {
    pub fn at(frame: f64, start: f64, duration: f64) -> Self {
        if frame < start {
            Self::NotStarted
        } else if frame <= start + duration {
            Self::Animating
        } else {
            Self::Settled
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/orchestrate.rs"]
mod tests;
