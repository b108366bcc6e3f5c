use crate::error::FlowError;

/// Residual capacity of a single ordered vertex pair.
pub type Capacity = u64;

/// Accumulated flow value. Wide enough to sum any number of pair totals.
pub type Flow = u128;

/// Residual capacity state over ordered vertex pairs.
///
/// - Vertices are indices in `[0, vertex_count())`, fixed at construction.
/// - `set_capacity` overwrites: declaring the same pair twice keeps the last value.
/// - `push_flow(u, v, a)` moves `a` units of residual capacity from `(u, v)` to `(v, u)`,
///   so `capacity_of(u, v) + capacity_of(v, u)` never changes once declaration is over.
pub trait ResidualNetwork {
    type ResidualOut<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    fn new(vertex_count: usize) -> Self
    where
        Self: Sized;

    fn vertex_count(&self) -> usize;

    fn set_capacity(&mut self, u: usize, v: usize, capacity: i64) -> Result<(), FlowError>;

    /// Returns 0 for pairs that were never declared or are saturated.
    fn capacity_of(&self, u: usize, v: usize) -> Capacity;

    /// Panics if `amount` exceeds `capacity_of(u, v)`.
    fn push_flow(&mut self, u: usize, v: usize, amount: Capacity);

    /// Vertices `v` with `capacity_of(u, v) > 0`, in ascending index order.
    fn residual_out(&self, u: usize) -> Self::ResidualOut<'_>;

    fn from_edges(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Result<Self, FlowError>
    where
        Self: Sized,
    {
        let mut graph = Self::new(vertex_count);
        for &(u, v, capacity) in edges {
            graph.set_capacity(u, v, capacity)?;
        }
        Ok(graph)
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), FlowError> {
        let vertex_count = self.vertex_count();
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(FlowError::InvalidVertex {
                vertex,
                vertex_count,
            })
        }
    }

    /// Strict upper bound on the residual capacity of any arc leaving `u`:
    /// the sum of those capacities plus one.
    fn outflow_bound(&self, u: usize) -> Flow {
        self.residual_out(u)
            .map(|v| Flow::from(self.capacity_of(u, v)))
            .sum::<Flow>()
            + 1
    }
}

#[inline]
pub(crate) fn validate_capacity(capacity: i64) -> Result<Capacity, FlowError> {
    Capacity::try_from(capacity).map_err(|_| FlowError::InvalidCapacity { capacity })
}
