use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::FlowError;
use crate::residual::ResidualNetwork;

const C_MAX: i64 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NetworkCase {
    SparseRandom,
    DenseRandom,
    Layered,
    Grid,
    UnitBipartite,
    CrossingGadgets,
}

impl NetworkCase {
    pub const ALL: [NetworkCase; 6] = [
        Self::SparseRandom,
        Self::DenseRandom,
        Self::Layered,
        Self::Grid,
        Self::UnitBipartite,
        Self::CrossingGadgets,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::Layered => "layered",
            Self::Grid => "grid",
            Self::UnitBipartite => "unit_bipartite",
            Self::CrossingGadgets => "crossing_gadgets",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedNetwork {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, i64)>,
    pub source: usize,
    pub sink: usize,
}

impl GeneratedNetwork {
    pub fn build<G: ResidualNetwork>(&self) -> Result<G, FlowError> {
        G::from_edges(self.vertex_count, &self.edges)
    }
}

/// Generates a network with roughly `size` vertices (dense cases use about `sqrt(size)`).
pub fn generate_case(case: NetworkCase, size: usize, seed: u64) -> GeneratedNetwork {
    match case {
        NetworkCase::SparseRandom => sparse_random_case(size.max(16), seed, 4),
        NetworkCase::DenseRandom => dense_random_case(size.max(64), seed),
        NetworkCase::Layered => layered_case(size.max(64), seed),
        NetworkCase::Grid => grid_case(size.max(64), seed),
        NetworkCase::UnitBipartite => unit_bipartite_case(size.max(16), seed),
        NetworkCase::CrossingGadgets => crossing_gadgets_case(size.max(16), seed),
    }
}

fn sparse_random_case(size: usize, seed: u64, edge_factor: usize) -> GeneratedNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(2);
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
    }

    let (source, sink) = distinct_endpoints(&mut rng, n);
    GeneratedNetwork {
        vertex_count: n,
        edges,
        source,
        sink,
    }
}

fn dense_random_case(size: usize, seed: u64) -> GeneratedNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in 0..n {
            if u != v {
                edges.push((u, v, rng.random_range(0..=C_MAX)));
            }
        }
    }

    let (source, sink) = distinct_endpoints(&mut rng, n);
    GeneratedNetwork {
        vertex_count: n,
        edges,
        source,
        sink,
    }
}

/// Source, `width x depth` layers with random forward arcs between neighbouring layers, sink.
fn layered_case(size: usize, seed: u64) -> GeneratedNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let width = floor_sqrt(size).max(4);
    let depth = (size / width).max(2);
    let n = width * depth + 2;
    let source = 0;
    let sink = n - 1;
    let index = |layer: usize, i: usize| -> usize { 1 + layer * width + i };

    let mut edges = Vec::with_capacity(width * depth * 3 + 2 * width);
    let mut used = HashSet::new();
    for i in 0..width {
        let c = rng.random_range(1..=C_MAX);
        push_unique_edge(&mut edges, &mut used, source, index(0, i), c);
        let c = rng.random_range(1..=C_MAX);
        push_unique_edge(&mut edges, &mut used, index(depth - 1, i), sink, c);
    }
    for layer in 0..(depth - 1) {
        for i in 0..width {
            for _ in 0..3 {
                let j = rng.random_range(0..width);
                let c = rng.random_range(1..=C_MAX);
                push_unique_edge(&mut edges, &mut used, index(layer, i), index(layer + 1, j), c);
            }
        }
    }
    edges.shuffle(&mut rng);

    GeneratedNetwork {
        vertex_count: n,
        edges,
        source,
        sink,
    }
}

fn grid_case(size: usize, seed: u64) -> GeneratedNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let index = |i: usize, j: usize| -> usize { i * len + j };

    let mut edges = Vec::with_capacity(n * 4);
    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((index(i, j), index(i, j + 1), rng.random_range(0..=C_MAX)));
                edges.push((index(i, j + 1), index(i, j), rng.random_range(0..=C_MAX)));
            }
            if i + 1 < len {
                edges.push((index(i, j), index(i + 1, j), rng.random_range(0..=C_MAX)));
                edges.push((index(i + 1, j), index(i, j), rng.random_range(0..=C_MAX)));
            }
        }
    }
    edges.shuffle(&mut rng);

    GeneratedNetwork {
        vertex_count: n,
        edges,
        source: index(0, 0),
        sink: index(len - 1, len - 1),
    }
}

/// Bipartite matching instance: every arc has capacity 1.
fn unit_bipartite_case(size: usize, seed: u64) -> GeneratedNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = (size / 2).max(2);
    let n = 2 * half + 2;
    let source = 0;
    let sink = n - 1;
    let left = |i: usize| -> usize { 1 + i };
    let right = |i: usize| -> usize { 1 + half + i };

    let mut edges = Vec::with_capacity(half * 5);
    let mut used = HashSet::new();
    for i in 0..half {
        push_unique_edge(&mut edges, &mut used, source, left(i), 1);
        push_unique_edge(&mut edges, &mut used, right(i), sink, 1);
        for _ in 0..3 {
            let j = rng.random_range(0..half);
            push_unique_edge(&mut edges, &mut used, left(i), right(j), 1);
        }
    }
    edges.shuffle(&mut rng);

    GeneratedNetwork {
        vertex_count: n,
        edges,
        source,
        sink,
    }
}

/// Disjoint copies of the four-vertex gadget with a unit crossing arc, which drives
/// depth-first augmentation to its capacity-dependent worst case.
fn crossing_gadgets_case(size: usize, seed: u64) -> GeneratedNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let gadgets = (size / 2).max(1);
    let n = 2 * gadgets + 2;
    let source = 0;
    let sink = n - 1;

    let mut edges = Vec::with_capacity(gadgets * 5);
    for g in 0..gadgets {
        let a = 1 + 2 * g;
        let b = a + 1;
        let c = rng.random_range(C_MAX / 2..=C_MAX);
        edges.push((source, a, c));
        edges.push((source, b, c));
        edges.push((a, b, 1));
        edges.push((a, sink, c));
        edges.push((b, sink, c));
    }
    edges.shuffle(&mut rng);

    GeneratedNetwork {
        vertex_count: n,
        edges,
        source,
        sink,
    }
}

fn distinct_endpoints(rng: &mut StdRng, n: usize) -> (usize, usize) {
    let source = rng.random_range(0..n);
    let mut sink = rng.random_range(0..n);
    if source == sink {
        sink = (sink + 1) % n;
    }
    (source, sink)
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut Vec<(usize, usize, i64)>,
    used: &mut HashSet<(usize, usize)>,
    u: usize,
    v: usize,
    capacity: i64,
) -> bool {
    if u == v {
        return false;
    }
    if used.insert((u, v)) {
        edges.push((u, v, capacity));
        true
    } else {
        false
    }
}
