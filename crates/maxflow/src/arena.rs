use crate::error::FlowError;
use crate::residual::Capacity;
use crate::residual::ResidualNetwork;
use crate::residual::validate_capacity;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ResidualArc {
    to: usize,
    residual: Capacity,
    rev: usize,
}

/// Adjacency-list residual graph backed by a flat arc arena.
///
/// Every declared ordered pair `(u, v)` owns one arc, paired with the arc of `(v, u)`
/// through an index into the arena. A self-loop is its own pair. Each vertex keeps its
/// arc ids sorted by destination, so `residual_out` is ascending without a per-call sort.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArenaResidualGraph {
    arcs: Vec<ResidualArc>,
    out: Vec<Vec<usize>>,
}

impl ArenaResidualGraph {
    #[inline]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn out_degree(&self, u: usize) -> usize {
        self.out[u].len()
    }

    /// `Ok(position)` of the `(u, v)` arc in `out[u]`, or `Err(insertion point)`.
    fn find_arc(&self, u: usize, v: usize) -> Result<usize, usize> {
        let arcs = &self.arcs;
        self.out[u].binary_search_by_key(&v, |&id| arcs[id].to)
    }

    fn arc_or_insert(&mut self, u: usize, v: usize) -> usize {
        let pos = match self.find_arc(u, v) {
            Ok(pos) => return self.out[u][pos],
            Err(pos) => pos,
        };

        let id = self.arcs.len();
        if u == v {
            self.arcs.push(ResidualArc {
                to: v,
                residual: 0,
                rev: id,
            });
            self.out[u].insert(pos, id);
            return id;
        }

        // Pairs are created together, so (v, u) is absent as well.
        let rev = id + 1;
        self.arcs.push(ResidualArc {
            to: v,
            residual: 0,
            rev,
        });
        self.arcs.push(ResidualArc {
            to: u,
            residual: 0,
            rev: id,
        });
        self.out[u].insert(pos, id);
        let rev_pos = self.find_arc(v, u).unwrap_or_else(|p| p);
        self.out[v].insert(rev_pos, rev);
        id
    }
}

impl ResidualNetwork for ArenaResidualGraph {
    type ResidualOut<'a> = ResidualArcs<'a>;

    fn new(vertex_count: usize) -> Self {
        Self {
            arcs: Vec::new(),
            out: vec![Vec::new(); vertex_count],
        }
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.out.len()
    }

    fn set_capacity(&mut self, u: usize, v: usize, capacity: i64) -> Result<(), FlowError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let capacity = validate_capacity(capacity)?;
        let id = self.arc_or_insert(u, v);
        self.arcs[id].residual = capacity;
        Ok(())
    }

    fn capacity_of(&self, u: usize, v: usize) -> Capacity {
        assert!(v < self.vertex_count(), "to vertex out of range");
        match self.find_arc(u, v) {
            Ok(pos) => self.arcs[self.out[u][pos]].residual,
            Err(_) => 0,
        }
    }

    fn push_flow(&mut self, u: usize, v: usize, amount: Capacity) {
        assert!(v < self.vertex_count(), "to vertex out of range");
        let Ok(pos) = self.find_arc(u, v) else {
            assert!(
                amount == 0,
                "push of {amount} exceeds residual capacity 0 on ({u}, {v})"
            );
            return;
        };

        let id = self.out[u][pos];
        let ResidualArc { residual, rev, .. } = self.arcs[id];
        assert!(
            amount <= residual,
            "push of {amount} exceeds residual capacity {residual} on ({u}, {v})"
        );
        self.arcs[id].residual -= amount;
        self.arcs[rev].residual += amount;
    }

    #[inline]
    fn residual_out(&self, u: usize) -> ResidualArcs<'_> {
        ResidualArcs {
            arcs: &self.arcs,
            ids: self.out[u].iter(),
        }
    }
}

pub struct ResidualArcs<'a> {
    arcs: &'a [ResidualArc],
    ids: std::slice::Iter<'a, usize>,
}

impl Iterator for ResidualArcs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        for &id in self.ids.by_ref() {
            let arc = &self.arcs[id];
            if arc.residual > 0 {
                return Some(arc.to);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ids.len()))
    }
}
