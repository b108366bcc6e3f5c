use std::iter::FusedIterator;

use log::debug;
use log::trace;

use crate::augmenting_path::find_augmenting_path;
use crate::error::FlowError;
use crate::residual::Capacity;
use crate::residual::Flow;
use crate::residual::ResidualNetwork;

/// One completed augmentation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Augmentation {
    /// Vertices from source to sink.
    pub path: Vec<usize>,
    pub bottleneck: Capacity,
    /// Accumulated flow after this augmentation.
    pub total: Flow,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Searching,
    Done,
}

/// Edmonds-Karp solver over a borrowed residual graph.
///
/// Each call to `next` performs one augmentation along a shortest residual path.
/// The iterator ends once no augmenting path remains, at which point `total` is the
/// maximum flow and the graph holds the final residual capacities.
pub struct EdmondsKarp<'g, G: ResidualNetwork> {
    graph: &'g mut G,
    source: usize,
    sink: usize,
    state: State,
    total: Flow,
    augmentations: usize,
}

impl<'g, G: ResidualNetwork> EdmondsKarp<'g, G> {
    pub fn new(graph: &'g mut G, source: usize, sink: usize) -> Result<Self, FlowError> {
        graph.check_vertex(source)?;
        graph.check_vertex(sink)?;
        debug!(
            "max flow start: vertices={} source={source} sink={sink}",
            graph.vertex_count()
        );
        Ok(Self {
            graph,
            source,
            sink,
            state: State::Searching,
            total: 0,
            augmentations: 0,
        })
    }

    #[inline]
    pub fn total(&self) -> Flow {
        self.total
    }

    #[inline]
    pub fn augmentation_count(&self) -> usize {
        self.augmentations
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Augments until no path remains and returns the maximum flow.
    pub fn run(mut self) -> Flow {
        for _ in self.by_ref() {}
        self.total
    }

    fn augment(&mut self) -> Option<Augmentation> {
        let pred = find_augmenting_path(&*self.graph, self.source, self.sink)?;

        let mut bottleneck = self.graph.outflow_bound(self.source);
        for (u, v) in pred.arcs() {
            bottleneck = bottleneck.min(Flow::from(self.graph.capacity_of(u, v)));
        }
        // The path has at least one arc, so the minimum is some arc's residual.
        let bottleneck = bottleneck as Capacity;
        debug_assert!(bottleneck > 0);

        for (u, v) in pred.arcs() {
            self.graph.push_flow(u, v, bottleneck);
        }
        self.total += Flow::from(bottleneck);
        self.augmentations += 1;

        let path = pred.path();
        trace!(
            "augmentation {}: {} arcs, bottleneck={bottleneck}, total={}",
            self.augmentations,
            path.len() - 1,
            self.total
        );
        Some(Augmentation {
            path,
            bottleneck,
            total: self.total,
        })
    }
}

impl<G: ResidualNetwork> Iterator for EdmondsKarp<'_, G> {
    type Item = Augmentation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Done {
            return None;
        }
        let step = self.augment();
        if step.is_none() {
            self.state = State::Done;
            debug!(
                "max flow done: source={} sink={} total={} augmentations={}",
                self.source, self.sink, self.total, self.augmentations
            );
        }
        step
    }
}

impl<G: ResidualNetwork> FusedIterator for EdmondsKarp<'_, G> {}

/// Maximum flow from `source` to `sink`, leaving the final residual capacities in `graph`.
pub fn compute_max_flow<G: ResidualNetwork>(
    graph: &mut G,
    source: usize,
    sink: usize,
) -> Result<Flow, FlowError> {
    Ok(EdmondsKarp::new(graph, source, sink)?.run())
}
