use std::collections::VecDeque;

use crate::residual::ResidualNetwork;

const UNVISITED: usize = usize::MAX;

/// Predecessor mapping of one breadth-first search, rooted at `source`.
///
/// Only vertices discovered before the search stopped have a predecessor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Predecessors {
    parent: Vec<usize>,
    source: usize,
    sink: usize,
}

impl Predecessors {
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.sink
    }

    /// The vertex `v` was reached from. `None` for the source and undiscovered vertices.
    pub fn parent(&self, v: usize) -> Option<usize> {
        match self.parent.get(v) {
            Some(&p) if p != UNVISITED && v != self.source => Some(p),
            _ => None,
        }
    }

    /// Arcs of the path, walked from the sink back to the source.
    pub fn arcs(&self) -> PathArcs<'_> {
        PathArcs {
            parent: &self.parent,
            source: self.source,
            current: self.sink,
        }
    }

    /// Vertices of the path in source-to-sink order.
    pub fn path(&self) -> Vec<usize> {
        let mut path = vec![self.sink];
        path.extend(self.arcs().map(|(u, _)| u));
        path.reverse();
        path
    }
}

pub struct PathArcs<'a> {
    parent: &'a [usize],
    source: usize,
    current: usize,
}

impl Iterator for PathArcs<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.source {
            return None;
        }
        let v = self.current;
        let u = self.parent[v];
        self.current = u;
        Some((u, v))
    }
}

/// Shortest (fewest arcs) path from `source` to `sink` over arcs with positive residual capacity.
///
/// Neighbours are explored in ascending index order and the search stops as soon as the sink
/// is discovered, so the returned path is fully determined by the graph state.
/// Returns `None` when `source == sink`, when either vertex is out of range, or when the sink
/// is unreachable.
pub fn find_augmenting_path<G: ResidualNetwork>(
    graph: &G,
    source: usize,
    sink: usize,
) -> Option<Predecessors> {
    let n = graph.vertex_count();
    if source == sink || source >= n || sink >= n {
        return None;
    }

    let (parent, found) = breadth_first(graph, source, Some(sink));
    found.then_some(Predecessors {
        parent,
        source,
        sink,
    })
}

/// Vertices reachable from `source` over arcs with positive residual capacity.
pub(crate) fn residual_reachable<G: ResidualNetwork>(graph: &G, source: usize) -> Vec<bool> {
    let (parent, _) = breadth_first(graph, source, None);
    parent.into_iter().map(|p| p != UNVISITED).collect()
}

fn breadth_first<G: ResidualNetwork>(
    graph: &G,
    source: usize,
    stop_at: Option<usize>,
) -> (Vec<usize>, bool) {
    let mut parent = vec![UNVISITED; graph.vertex_count()];
    let mut queue = VecDeque::new();
    parent[source] = source;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for v in graph.residual_out(u) {
            if parent[v] != UNVISITED {
                continue;
            }
            parent[v] = u;
            if stop_at == Some(v) {
                return (parent, true);
            }
            queue.push_back(v);
        }
    }

    (parent, false)
}
