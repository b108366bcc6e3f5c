use crate::error::FlowError;
use crate::residual::Capacity;
use crate::residual::ResidualNetwork;
use crate::residual::validate_capacity;

/// Row-major `V x V` residual capacity matrix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseResidualGraph {
    vertex_count: usize,
    cap: Vec<Capacity>,
}

impl DenseResidualGraph {
    #[inline]
    fn row(&self, u: usize) -> &[Capacity] {
        let n = self.vertex_count;
        &self.cap[u * n..(u + 1) * n]
    }

    #[inline]
    fn cell(&self, u: usize, v: usize) -> usize {
        assert!(u < self.vertex_count, "from vertex out of range");
        assert!(v < self.vertex_count, "to vertex out of range");
        u * self.vertex_count + v
    }
}

impl ResidualNetwork for DenseResidualGraph {
    type ResidualOut<'a> = PositiveRow<'a>;

    fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cap: vec![0; vertex_count * vertex_count],
        }
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn set_capacity(&mut self, u: usize, v: usize, capacity: i64) -> Result<(), FlowError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let capacity = validate_capacity(capacity)?;
        let cell = self.cell(u, v);
        self.cap[cell] = capacity;
        Ok(())
    }

    #[inline]
    fn capacity_of(&self, u: usize, v: usize) -> Capacity {
        self.cap[self.cell(u, v)]
    }

    fn push_flow(&mut self, u: usize, v: usize, amount: Capacity) {
        let forward = self.cell(u, v);
        let backward = self.cell(v, u);
        let residual = self.cap[forward];
        assert!(
            amount <= residual,
            "push of {amount} exceeds residual capacity {residual} on ({u}, {v})"
        );
        self.cap[forward] -= amount;
        self.cap[backward] += amount;
    }

    #[inline]
    fn residual_out(&self, u: usize) -> PositiveRow<'_> {
        PositiveRow {
            row: self.row(u),
            idx: 0,
        }
    }
}

pub struct PositiveRow<'a> {
    row: &'a [Capacity],
    idx: usize,
}

impl Iterator for PositiveRow<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.row.len() {
            let v = self.idx;
            self.idx += 1;
            if self.row[v] > 0 {
                return Some(v);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.row.len() - self.idx))
    }
}
