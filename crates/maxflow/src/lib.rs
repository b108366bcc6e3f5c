mod arena;
mod augmenting_path;
mod dense;
mod edmonds_karp;
mod error;
pub mod generator;
mod min_cut;
pub mod residual;

pub use arena::ArenaResidualGraph;
pub use augmenting_path::Predecessors;
pub use augmenting_path::find_augmenting_path;
pub use dense::DenseResidualGraph;
pub use edmonds_karp::Augmentation;
pub use edmonds_karp::EdmondsKarp;
pub use edmonds_karp::compute_max_flow;
pub use error::FlowError;
pub use min_cut::cut_arcs;
pub use min_cut::cut_capacity;
pub use min_cut::source_side;
pub use residual::Capacity;
pub use residual::Flow;
pub use residual::ResidualNetwork;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::ArenaResidualGraph;
    use crate::Augmentation;
    use crate::DenseResidualGraph;
    use crate::EdmondsKarp;
    use crate::Flow;
    use crate::FlowError;
    use crate::ResidualNetwork;
    use crate::compute_max_flow;
    use crate::cut_capacity;
    use crate::generator::NetworkCase;
    use crate::generator::generate_case;
    use crate::source_side;

    const CLRS_EDGES: [(usize, usize, i64); 10] = [
        (0, 1, 16),
        (0, 2, 13),
        (1, 2, 10),
        (1, 3, 12),
        (2, 1, 4),
        (2, 4, 14),
        (3, 2, 9),
        (3, 5, 20),
        (4, 3, 7),
        (4, 5, 4),
    ];

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn random_edges(n: usize, m: usize, max_cap: i64, seed: u64) -> Vec<(usize, usize, i64)> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut used = HashSet::new();
        let mut edges = Vec::with_capacity(m);
        while edges.len() < m {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            if u != v && used.insert((u, v)) {
                edges.push((u, v, rng.random_range(0..=max_cap)));
            }
        }
        edges
    }

    fn brute_force_min_cut<G: ResidualNetwork>(g: &G, source: usize, sink: usize) -> Flow {
        let n = g.vertex_count();
        let mut best = Flow::MAX;
        for mask in 0_u32..(1 << n) {
            let side: Vec<bool> = (0..n).map(|v| (mask >> v) & 1 == 1).collect();
            if !side[source] || side[sink] {
                continue;
            }
            best = best.min(cut_capacity(g, &side));
        }
        best
    }

    fn solve_both(n: usize, edges: &[(usize, usize, i64)], s: usize, t: usize) -> Flow {
        let mut dense = DenseResidualGraph::from_edges(n, edges).unwrap();
        let mut arena = ArenaResidualGraph::from_edges(n, edges).unwrap();
        let a = compute_max_flow(&mut dense, s, t).unwrap();
        let b = compute_max_flow(&mut arena, s, t).unwrap();
        assert_eq!(a, b, "dense and arena disagree");
        a
    }

    #[test]
    fn classic_six_vertex_network() {
        init_logger();
        assert_eq!(solve_both(6, &CLRS_EDGES, 0, 5), 23);
    }

    #[test]
    fn single_edge() {
        assert_eq!(solve_both(2, &[(0, 1, 5)], 0, 1), 5);
    }

    #[test]
    fn source_equal_to_sink_is_zero() {
        assert_eq!(solve_both(6, &CLRS_EDGES, 0, 0), 0);
        assert_eq!(solve_both(6, &CLRS_EDGES, 3, 3), 0);
    }

    #[test]
    fn isolated_sink_is_zero() {
        let mut edges = CLRS_EDGES.to_vec();
        edges.push((5, 0, 3));
        assert_eq!(solve_both(7, &edges, 0, 6), 0);
    }

    #[test]
    fn duplicate_declaration_keeps_last_capacity() {
        let mut dense = DenseResidualGraph::new(2);
        let mut arena = ArenaResidualGraph::new(2);
        for capacity in [5, 8] {
            dense.set_capacity(0, 1, capacity).unwrap();
            arena.set_capacity(0, 1, capacity).unwrap();
        }
        assert_eq!(dense.capacity_of(0, 1), 8);
        assert_eq!(arena.capacity_of(0, 1), 8);
        assert_eq!(compute_max_flow(&mut dense, 0, 1), Ok(8));
        assert_eq!(compute_max_flow(&mut arena, 0, 1), Ok(8));
    }

    #[test]
    fn declaration_errors_surface_through_from_edges() {
        assert_eq!(
            DenseResidualGraph::from_edges(3, &[(0, 1, 2), (1, 3, 2)]),
            Err(FlowError::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            })
        );
        assert_eq!(
            ArenaResidualGraph::from_edges(3, &[(0, 1, 2), (1, 2, -4)]),
            Err(FlowError::InvalidCapacity { capacity: -4 })
        );
    }

    #[test]
    fn max_flow_equals_brute_force_min_cut() {
        for seed in 0..40_u64 {
            let n = 3 + (seed as usize) % 6;
            let m = (n * (n - 1)).min(3 * n);
            let edges = random_edges(n, m, 20, 0x00C0_7000 + seed);
            let original = DenseResidualGraph::from_edges(n, &edges).unwrap();
            let (s, t) = (0, n - 1);

            let mut g = original.clone();
            let flow = compute_max_flow(&mut g, s, t).unwrap();
            assert_eq!(flow, brute_force_min_cut(&original, s, t), "seed={seed}");

            let side = source_side(&g, s).unwrap();
            assert!(!side[t], "seed={seed}");
            assert_eq!(cut_capacity(&original, &side), flow, "seed={seed}");
        }
    }

    #[test]
    fn residual_capacities_conserve_pairs_and_vertex_flow() {
        for seed in 0..20_u64 {
            let n = 12;
            let edges = random_edges(n, 50, 1_000, 0xF10E_0000 + seed);
            let original = ArenaResidualGraph::from_edges(n, &edges).unwrap();
            let (s, t) = ((seed as usize) % n, (seed as usize + 5) % n);

            let mut g = original.clone();
            let flow = compute_max_flow(&mut g, s, t).unwrap();

            let net = |u: usize, v: usize| -> i128 {
                original.capacity_of(u, v) as i128 - g.capacity_of(u, v) as i128
            };
            for u in 0..n {
                for v in 0..n {
                    assert_eq!(
                        g.capacity_of(u, v) + g.capacity_of(v, u),
                        original.capacity_of(u, v) + original.capacity_of(v, u),
                        "seed={seed} pair=({u}, {v})"
                    );
                }
                let out: i128 = (0..n).map(|v| net(u, v)).sum();
                let expected = if u == s {
                    flow as i128
                } else if u == t {
                    -(flow as i128)
                } else {
                    0
                };
                assert_eq!(out, expected, "seed={seed} vertex={u}");
            }
        }
    }

    #[test]
    fn augmentations_are_deterministic_and_monotone() {
        for seed in 0..10_u64 {
            let edges = random_edges(16, 70, 50, 0xDE7E_0000 + seed);
            let dense = DenseResidualGraph::from_edges(16, &edges).unwrap();
            let arena = ArenaResidualGraph::from_edges(16, &edges).unwrap();

            let mut first = dense.clone();
            let mut second = dense.clone();
            let mut third = arena.clone();
            let a: Vec<Augmentation> = EdmondsKarp::new(&mut first, 0, 15).unwrap().collect();
            let b: Vec<Augmentation> = EdmondsKarp::new(&mut second, 0, 15).unwrap().collect();
            let c: Vec<Augmentation> = EdmondsKarp::new(&mut third, 0, 15).unwrap().collect();
            assert_eq!(a, b, "seed={seed}");
            assert_eq!(a, c, "seed={seed}");
            assert_eq!(first, second, "seed={seed}");

            let mut prev_total = 0;
            let mut prev_len = 0;
            for step in &a {
                assert!(step.bottleneck > 0, "seed={seed}");
                assert_eq!(step.total, prev_total + Flow::from(step.bottleneck));
                assert!(step.path.len() >= prev_len, "seed={seed}");
                assert_eq!(step.path.first(), Some(&0));
                assert_eq!(step.path.last(), Some(&15));
                prev_total = step.total;
                prev_len = step.path.len();
            }
        }
    }

    #[test]
    fn graph_can_be_redeclared_and_solved_again() {
        let mut g = DenseResidualGraph::from_edges(6, &CLRS_EDGES).unwrap();
        assert_eq!(compute_max_flow(&mut g, 0, 5), Ok(23));
        assert_eq!(compute_max_flow(&mut g, 0, 5), Ok(0));

        for u in 0..6 {
            for v in 0..6 {
                g.set_capacity(u, v, 0).unwrap();
            }
        }
        for &(u, v, c) in &CLRS_EDGES {
            g.set_capacity(u, v, c).unwrap();
        }
        assert_eq!(g, DenseResidualGraph::from_edges(6, &CLRS_EDGES).unwrap());
        assert_eq!(compute_max_flow(&mut g, 0, 5), Ok(23));
    }

    #[test]
    fn generated_cases_agree_across_representations() {
        init_logger();
        for (i, case) in NetworkCase::ALL.into_iter().enumerate() {
            let net = generate_case(case, 200, 0x5EED_0000 + i as u64);
            let mut dense: DenseResidualGraph = net.build().unwrap();
            let mut arena: ArenaResidualGraph = net.build().unwrap();
            let a = compute_max_flow(&mut dense, net.source, net.sink).unwrap();
            let b = compute_max_flow(&mut arena, net.source, net.sink).unwrap();
            assert_eq!(a, b, "case={case:?}");

            let original: ArenaResidualGraph = net.build().unwrap();
            let side = source_side(&arena, net.source).unwrap();
            assert_eq!(cut_capacity(&original, &side), a, "case={case:?}");
        }
    }
}
