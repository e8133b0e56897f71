use crate::{
    foundation::core::{Point, Size},
    foundation::math::Fnv1a64,
    layout::model::{ComputedEdge, ComputedNode, LayoutResult},
    reveal::frame::{EdgeFrame, GraphFrame, NodeFrame},
    reveal::orchestrate::{FlowStyle, Phase},
};

/// 128-bit digest built from two independently seeded FNV-1a streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Fingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

struct Digest {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl Digest {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn len(&mut self, n: usize) {
        self.u64(n as u64);
    }

    fn f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn str(&mut self, s: &str) {
        self.a.write_str(s);
        self.b.write_str(s);
    }

    fn opt_str(&mut self, s: Option<&str>) {
        match s {
            Some(s) => {
                self.u8(1);
                self.str(s);
            }
            None => self.u8(0),
        }
    }

    fn point(&mut self, p: Point) {
        self.f64(p.x);
        self.f64(p.y);
    }

    fn opt_point(&mut self, p: Option<Point>) {
        match p {
            Some(p) => {
                self.u8(1);
                self.point(p);
            }
            None => self.u8(0),
        }
    }

    fn size(&mut self, s: Size) {
        self.f64(s.width);
        self.f64(s.height);
    }

    fn finish(self) -> Fingerprint {
        Fingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

/// Digest of node placement and edge geometry.
pub fn fingerprint_layout(layout: &LayoutResult) -> Fingerprint {
    let mut d = Digest::new();
    d.len(layout.nodes.len());
    for node in &layout.nodes {
        write_node(&mut d, node);
    }
    d.len(layout.edges.len());
    for edge in &layout.edges {
        write_edge(&mut d, edge);
    }
    let b = &layout.bounds;
    for v in [b.min_x, b.min_y, b.max_x, b.max_y, b.width, b.height] {
        d.f64(v);
    }
    d.finish()
}

fn write_node(d: &mut Digest, node: &ComputedNode) {
    d.str(&node.id);
    d.u8(node.shape as u8);
    d.u8(node.status as u8);
    d.point(node.position);
    d.size(node.size);
}

fn write_edge(d: &mut Digest, edge: &ComputedEdge) {
    d.str(&edge.id);
    d.str(&edge.source);
    d.str(&edge.target);
    d.u8(edge.kind as u8);
    d.opt_str(edge.label.as_deref());
    d.str(&edge.path);
    d.point(edge.source_point);
    d.point(edge.target_point);
    d.opt_point(edge.label_position);
    d.u8(u8::from(edge.resolved));
}

/// Digest of the evaluated reveal state at one frame.
pub fn fingerprint_frame(frame: &GraphFrame) -> Fingerprint {
    let mut d = Digest::new();
    d.f64(frame.frame);
    d.len(frame.nodes.len());
    for node in &frame.nodes {
        write_node_frame(&mut d, node);
    }
    d.len(frame.edges.len());
    for edge in &frame.edges {
        write_edge_frame(&mut d, edge);
    }
    d.finish()
}

fn write_phase(d: &mut Digest, phase: Phase) {
    d.u8(match phase {
        Phase::NotStarted => 0,
        Phase::Animating => 1,
        Phase::Settled => 2,
    });
}

fn write_node_frame(d: &mut Digest, node: &NodeFrame) {
    d.str(&node.id);
    d.f64(node.start_frame);
    write_phase(d, node.phase);
    d.f64(node.progress);
    d.f64(node.scale);
    d.f64(node.opacity);
    d.point(node.position);
    d.size(node.size);
    d.u8(node.status as u8);
}

fn write_edge_frame(d: &mut Digest, edge: &EdgeFrame) {
    d.str(&edge.id);
    d.f64(edge.start_frame);
    write_phase(d, edge.phase);
    d.f64(edge.draw_progress);
    d.f64(edge.path_length);
    d.f64(edge.dash.dash_array);
    d.f64(edge.dash.dash_offset);
    d.f64(edge.stroke_opacity);
    d.f64(edge.label_opacity);
    match &edge.flow {
        FlowStyle::None => d.u8(0),
        FlowStyle::Pulse { opacity } => {
            d.u8(1);
            d.f64(*opacity);
        }
        FlowStyle::Dots { positions } => {
            d.u8(2);
            d.len(positions.len());
            positions.iter().for_each(|&p| d.f64(p));
        }
        FlowStyle::Particles { positions, opacity } => {
            d.u8(3);
            d.len(positions.len());
            positions.iter().for_each(|&p| d.f64(p));
            d.f64(*opacity);
        }
        FlowStyle::Gradient { offset } => {
            d.u8(4);
            d.f64(*offset);
        }
    }
    d.len(edge.flow_points.len());
    for &p in &edge.flow_points {
        d.point(p);
    }
}

impl LayoutResult {
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint_layout(self)
    }
}

impl GraphFrame {
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint_frame(self)
    }
}

#[cfg(test)]
#[path = "../tests/unit/fingerprint.rs"]
mod tests;
