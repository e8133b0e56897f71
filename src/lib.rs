//! flowframe computes deterministic, frame-indexed geometry and timing for programmatic
//! explainer videos: directed-graph diagrams that lay themselves out and reveal over time.
//!
//! # Pipeline overview
//!
//! 1. **Declare**: nodes, edges and policies, usually as a [`DiagramScene`] loaded from JSON.
//! 2. **Layout**: [`compute_layout`] resolves node boxes (manual or layered) and derives every
//!    edge's shape-aware endpoints, path and label anchor.
//! 3. **Evaluate**: [`evaluate_graph_frame`] turns a [`LayoutResult`] plus a frame number into
//!    per-element progress, opacity, stroke dash and flow effects.
//!
//! The timing primitives ([`interpolate`], [`Ease`], [`Keyframes`], [`presets`], [`text`]) are
//! shared with non-graph components and follow the same contract.
//!
//! Every output is a pure function of its declared inputs and the frame number. There is no
//! cross-frame state, so frames can be evaluated out of order or in parallel with identical
//! results; [`Fingerprint`]s make that checkable.
#![forbid(unsafe_code)]

mod animation;
mod fingerprint;
mod foundation;
mod geometry;
mod layout;
mod reveal;
mod scene;

pub use animation::anim::{InterpMode, Keyframe, Keyframes};
pub use animation::ease::Ease;
pub use animation::interp::{Extrapolate, InterpolateOptions, Lerp, interpolate, progress};
pub use animation::timing::TimingConfig;
pub use animation::{presets, text};
pub use fingerprint::{Fingerprint, fingerprint_frame, fingerprint_layout};
pub use foundation::core::{
    BezPath, FPS, Fps, Point, Rect, Size, Vec2, frames_to_seconds, seconds_to_frames,
};
pub use foundation::error::{FlowError, FlowResult};
pub use geometry::connect::{ConnectionTuning, NodeShape, connection_point};
pub use geometry::path::{
    EdgeType, PATH_LENGTH_SAMPLES, edge_path, edge_path_svg, label_position, path_length,
    position_along_path,
};
pub use layout::engine::{DEFAULT_LABEL_RATIO, compute_layout, compute_layout_with, route_edges};
pub use layout::model::{
    Bounds, ComputedEdge, ComputedNode, EdgeSpec, FlowKind, LayoutAlgorithm, LayoutDirection,
    LayoutPolicy, LayoutResult, NodeSpec, NodeStatus,
};
pub use layout::ranked::{LayeredGraph, LayeredLayout, LayeredParams, Sugiyama};
pub use reveal::config::{AnimationPolicy, RevealConfig};
pub use reveal::frame::{EdgeFrame, GraphFrame, NodeFrame, evaluate_graph_frame};
pub use reveal::orchestrate::{
    DOT_COUNT, FlowStyle, PARTICLE_COUNT, PARTICLE_OPACITY, Phase, StrokeDash, edge_draw_progress,
    flow_dots, flow_position, gradient_offset, node_reveal_progress, pulse_opacity,
    staggered_edge_frame, staggered_start_frame, stroke_dash,
};
pub use scene::document::DiagramScene;
