use crate::augmenting_path::residual_reachable;
use crate::error::FlowError;
use crate::residual::Capacity;
use crate::residual::Flow;
use crate::residual::ResidualNetwork;

/// Source side of a minimum cut, read off a graph that has been solved to completion.
///
/// `side[v]` is true when `v` is still reachable from `source` in the residual graph.
pub fn source_side<G: ResidualNetwork>(
    residual: &G,
    source: usize,
) -> Result<Vec<bool>, FlowError> {
    residual.check_vertex(source)?;
    Ok(residual_reachable(residual, source))
}

/// Declared arcs leaving the source side, measured on the graph as it was before solving.
pub fn cut_arcs<G: ResidualNetwork>(
    original: &G,
    side: &[bool],
) -> Vec<(usize, usize, Capacity)> {
    assert_eq!(side.len(), original.vertex_count(), "side length mismatch");
    let mut arcs = Vec::new();
    for u in (0..side.len()).filter(|&u| side[u]) {
        for v in original.residual_out(u) {
            if !side[v] {
                arcs.push((u, v, original.capacity_of(u, v)));
            }
        }
    }
    arcs
}

pub fn cut_capacity<G: ResidualNetwork>(original: &G, side: &[bool]) -> Flow {
    cut_arcs(original, side)
        .into_iter()
        .map(|(_, _, c)| Flow::from(c))
        .sum()
}
