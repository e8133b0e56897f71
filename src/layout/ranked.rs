//! Layered (Sugiyama-style) placement for directed graphs.
//!
//! Pipeline: break cycles by reversing DFS back edges, assign longest-path ranks, split long
//! edges with zero-size dummy vertices, order each rank by alternating barycenter sweeps while
//! tracking the ordering with the fewest crossings, then pack every rank along the cross axis
//! and center it against the widest rank.

use std::collections::BTreeSet;

use petgraph::{
    Direction,
    algo::toposort,
    graph::{DiGraph, NodeIndex},
    visit::{DfsEvent, depth_first_search},
};

use crate::{
    foundation::core::{Point, Size},
    foundation::error::{FlowError, FlowResult},
    layout::model::LayoutDirection,
};

/// Input to a [`LayeredLayout`]: node boxes and directed edges between their indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayeredGraph {
    pub sizes: Vec<Size>,
    /// `(source, target)` indices into `sizes`. Self-loops and duplicates are allowed.
    pub edges: Vec<(usize, usize)>,
}

/// Spacing for a [`LayeredLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayeredParams {
    pub direction: LayoutDirection,
    /// Gap between neighbours inside a rank.
    pub node_spacing: f64,
    /// Gap between consecutive ranks.
    pub rank_spacing: f64,
    /// Offset of the whole drawing from the origin.
    pub margin: f64,
}

/// Rank-based placement returning one center point per node, in input order.
pub trait LayeredLayout {
    fn place(&self, graph: &LayeredGraph, params: &LayeredParams) -> FlowResult<Vec<Point>>;
}

/// Default [`LayeredLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sugiyama {
    /// Barycenter sweeps, alternating downward and upward.
    pub sweeps: usize,
    /// Gap contributed by a long-edge dummy vertex inside a rank.
    pub edge_separation: f64,
}

impl Default for Sugiyama {
    fn default() -> Self {
        Self {
            sweeps: 8,
            edge_separation: 10.0,
        }
    }
}

impl LayeredLayout for Sugiyama {
    fn place(&self, graph: &LayeredGraph, params: &LayeredParams) -> FlowResult<Vec<Point>> {
        let n = graph.sizes.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        for &(s, t) in &graph.edges {
            if s >= n || t >= n {
                return Err(FlowError::layout(format!(
                    "edge ({s}, {t}) references a node outside 0..{n}"
                )));
            }
        }

        let dag = acyclic_edges(n, &graph.edges);
        let ranks = assign_ranks(n, &dag)?;
        let mut layering = Layering::build(&graph.sizes, &ranks, &dag, params.direction);
        self.order(&mut layering);
        Ok(self.coordinates(&layering, n, params))
    }
}

fn index_graph(n: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
    let mut g = DiGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        g.add_node(());
    }
    for &(s, t) in edges {
        g.add_edge(NodeIndex::new(s), NodeIndex::new(t), ());
    }
    g
}

/// Deduplicated edge set with self-loops dropped and DFS back edges reversed.
fn acyclic_edges(n: usize, edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let unique: BTreeSet<(usize, usize)> = edges.iter().copied().filter(|(s, t)| s != t).collect();
    let unique: Vec<(usize, usize)> = unique.into_iter().collect();
    let g = index_graph(n, &unique);

    let mut back = BTreeSet::new();
    depth_first_search(&g, g.node_indices(), |event| {
        if let DfsEvent::BackEdge(u, v) = event {
            back.insert((u.index(), v.index()));
        }
    });

    unique
        .into_iter()
        .map(|(s, t)| if back.contains(&(s, t)) { (t, s) } else { (s, t) })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Longest-path ranks, with pure sources pulled next to their nearest successor.
fn assign_ranks(n: usize, dag: &[(usize, usize)]) -> FlowResult<Vec<usize>> {
    let g = index_graph(n, dag);
    let order = toposort(&g, None).map_err(|cycle| {
        FlowError::layout(format!(
            "cycle through node {} survived cycle breaking",
            cycle.node_id().index()
        ))
    })?;

    let mut rank = vec![0usize; n];
    for &v in &order {
        for u in g.neighbors_directed(v, Direction::Incoming) {
            rank[v.index()] = rank[v.index()].max(rank[u.index()] + 1);
        }
    }

    for &v in order.iter().rev() {
        let has_preds = g
            .neighbors_directed(v, Direction::Incoming)
            .next()
            .is_some();
        if has_preds {
            continue;
        }
        if let Some(nearest) = g
            .neighbors_directed(v, Direction::Outgoing)
            .map(|w| rank[w.index()])
            .min()
        {
            rank[v.index()] = nearest.saturating_sub(1);
        }
    }

    Ok(rank)
}

/// Proper layered graph: every edge spans exactly one rank.
struct Layering {
    /// Extent along the rank axis.
    depth: Vec<f64>,
    /// Extent along the cross axis.
    breadth: Vec<f64>,
    dummy: Vec<bool>,
    rank: Vec<usize>,
    preds: Vec<Vec<usize>>,
    succs: Vec<Vec<usize>>,
    layers: Vec<Vec<usize>>,
}

impl Layering {
    fn build(sizes: &[Size], ranks: &[usize], dag: &[(usize, usize)], dir: LayoutDirection) -> Self {
        let n = sizes.len();
        let (depth, breadth): (Vec<f64>, Vec<f64>) = sizes
            .iter()
            .map(|s| match dir {
                LayoutDirection::Horizontal => (s.width, s.height),
                LayoutDirection::Vertical => (s.height, s.width),
            })
            .unzip();
        let max_rank = ranks.iter().copied().max().unwrap_or(0);

        let mut out = Self {
            depth,
            breadth,
            dummy: vec![false; n],
            rank: ranks.to_vec(),
            preds: vec![Vec::new(); n],
            succs: vec![Vec::new(); n],
            layers: vec![Vec::new(); max_rank + 1],
        };
        for v in 0..n {
            out.layers[ranks[v]].push(v);
        }

        for &(s, t) in dag {
            let mut prev = s;
            for r in ranks[s] + 1..ranks[t] {
                let d = out.push_dummy(r);
                out.link(prev, d);
                prev = d;
            }
            out.link(prev, t);
        }
        out
    }

    fn push_dummy(&mut self, rank: usize) -> usize {
        let id = self.rank.len();
        self.depth.push(0.0);
        self.breadth.push(0.0);
        self.dummy.push(true);
        self.rank.push(rank);
        self.preds.push(Vec::new());
        self.succs.push(Vec::new());
        self.layers[rank].push(id);
        id
    }

    fn link(&mut self, from: usize, to: usize) {
        self.succs[from].push(to);
        self.preds[to].push(from);
    }

    fn slots(&self, layers: &[Vec<usize>]) -> Vec<usize> {
        let mut slot = vec![0usize; self.rank.len()];
        for layer in layers {
            for (i, &v) in layer.iter().enumerate() {
                slot[v] = i;
            }
        }
        slot
    }

    fn crossings(&self, layers: &[Vec<usize>]) -> usize {
        let slot = self.slots(layers);
        let mut total = 0;
        for layer in layers {
            let segs: Vec<(usize, usize)> = layer
                .iter()
                .flat_map(|&u| self.succs[u].iter().map(move |&v| (u, v)))
                .map(|(u, v)| (slot[u], slot[v]))
                .collect();
            for (i, a) in segs.iter().enumerate() {
                for b in &segs[i + 1..] {
                    if (a.0 < b.0 && a.1 > b.1) || (a.0 > b.0 && a.1 < b.1) {
                        total += 1;
                    }
                }
            }
        }
        total
    }
}

impl Sugiyama {
    fn order(&self, lay: &mut Layering) {
        let count = lay.layers.len();
        if count < 2 {
            return;
        }

        let mut best = lay.layers.clone();
        let mut best_crossings = lay.crossings(&best);

        for sweep in 0..self.sweeps {
            if best_crossings == 0 {
                break;
            }
            let downward = sweep % 2 == 0;
            let ranks: Vec<usize> = if downward {
                (1..count).collect()
            } else {
                (0..count - 1).rev().collect()
            };

            for r in ranks {
                let slot = lay.slots(&lay.layers);
                let neighbours = if downward { &lay.preds } else { &lay.succs };
                let mut keyed: Vec<(usize, f64)> = lay.layers[r]
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| {
                        let adj = &neighbours[v];
                        let key = if adj.is_empty() {
                            i as f64
                        } else {
                            adj.iter().map(|&u| slot[u] as f64).sum::<f64>() / adj.len() as f64
                        };
                        (v, key)
                    })
                    .collect();
                keyed.sort_by(|a, b| a.1.total_cmp(&b.1));
                lay.layers[r] = keyed.into_iter().map(|(v, _)| v).collect();
            }

            let crossings = lay.crossings(&lay.layers);
            if crossings < best_crossings {
                best_crossings = crossings;
                best.clone_from(&lay.layers);
            }
        }

        lay.layers = best;
    }

    fn gap(&self, lay: &Layering, v: usize, params: &LayeredParams) -> f64 {
        if lay.dummy[v] {
            self.edge_separation / 2.0
        } else {
            params.node_spacing / 2.0
        }
    }

    fn coordinates(&self, lay: &Layering, n: usize, params: &LayeredParams) -> Vec<Point> {
        // Packed cross-axis centers per rank, starting at zero.
        let mut cross = vec![0.0; lay.rank.len()];
        let mut widths = Vec::with_capacity(lay.layers.len());
        for layer in &lay.layers {
            let mut cursor = 0.0;
            let mut prev: Option<usize> = None;
            for &v in layer {
                let half = lay.breadth[v] / 2.0;
                cursor = match prev {
                    Some(p) => {
                        cursor
                            + lay.breadth[p] / 2.0
                            + self.gap(lay, p, params)
                            + self.gap(lay, v, params)
                            + half
                    }
                    None => half,
                };
                cross[v] = cursor;
                prev = Some(v);
            }
            widths.push(prev.map_or(0.0, |p| cursor + lay.breadth[p] / 2.0));
        }
        let widest = widths.iter().copied().fold(0.0, f64::max);

        let mut rank_center = Vec::with_capacity(lay.layers.len());
        let mut start = params.margin;
        for layer in &lay.layers {
            let depth = layer.iter().map(|&v| lay.depth[v]).fold(0.0, f64::max);
            rank_center.push(start + depth / 2.0);
            start += depth + params.rank_spacing;
        }

        (0..n)
            .map(|v| {
                let r = lay.rank[v];
                let c = params.margin + (widest - widths[r]) / 2.0 + cross[v];
                match params.direction {
                    LayoutDirection::Horizontal => Point::new(rank_center[r], c),
                    LayoutDirection::Vertical => Point::new(c, rank_center[r]),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/ranked.rs"]
mod tests;
