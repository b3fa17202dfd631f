//! Unit tests for tc-graph.

#[cfg(test)]
mod helpers {
    use tc_core::VertexId;

    use crate::{DirectedWeightedGraph, Edge};

    pub fn v(i: u32) -> VertexId {
        VertexId(i)
    }

    pub fn edge(from: u32, to: u32, weight: f64) -> Edge<f64> {
        Edge { from: v(from), to: v(to), weight }
    }

    /// Five vertices.
    ///
    /// ```text
    ///   0 ─1.0→ 1 ─1.0→ 2 ─1.0→ 4
    ///   └──5.0→ 3 ─1.0──────────↗
    /// ```
    ///
    /// Shortest 0→4 is 0→1→2→4 with weight 3.0.
    pub fn diamond() -> DirectedWeightedGraph<f64> {
        let mut g = DirectedWeightedGraph::new(5);
        g.add_edge(edge(0, 1, 1.0)).unwrap();
        g.add_edge(edge(1, 2, 1.0)).unwrap();
        g.add_edge(edge(2, 4, 1.0)).unwrap();
        g.add_edge(edge(0, 3, 5.0)).unwrap();
        g.add_edge(edge(3, 4, 1.0)).unwrap();
        g
    }
}

// ── Graph structure ───────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use tc_core::EdgeId;

    use super::helpers::*;
    use crate::{DirectedWeightedGraph, Edge, GraphError};

    #[test]
    fn empty_graph() {
        let g = DirectedWeightedGraph::<f64>::new(0);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn edge_ids_are_positions() {
        let mut g = DirectedWeightedGraph::new(3);
        assert_eq!(g.add_edge(edge(0, 1, 2.0)).unwrap(), EdgeId(0));
        assert_eq!(g.add_edge(edge(1, 2, 3.0)).unwrap(), EdgeId(1));
        assert_eq!(g.edge(EdgeId(1)), &edge(1, 2, 3.0));
    }

    #[test]
    fn out_edges_in_insertion_order() {
        let mut g = DirectedWeightedGraph::new(3);
        let a = g.add_edge(edge(0, 2, 1.0)).unwrap();
        g.add_edge(edge(1, 2, 1.0)).unwrap();
        let b = g.add_edge(edge(0, 1, 1.0)).unwrap();
        assert_eq!(g.out_edges(v(0)).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(g.out_degree(v(2)), 0);
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let mut g = DirectedWeightedGraph::new(2);
        let err = g.add_edge(edge(0, 2, 1.0)).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { vertex_count: 2, .. }));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn rejects_negative_and_nan_weights() {
        let mut g = DirectedWeightedGraph::new(2);
        assert!(matches!(g.add_edge(edge(0, 1, -1.0)), Err(GraphError::InvalidWeight { .. })));
        assert!(matches!(g.add_edge(edge(0, 1, f64::NAN)), Err(GraphError::InvalidWeight { .. })));
        assert_eq!(g.out_degree(v(0)), 0);
    }

    #[test]
    fn integer_weights() {
        let mut g = DirectedWeightedGraph::<u32>::new(2);
        g.add_edge(Edge { from: v(0), to: v(1), weight: 7 }).unwrap();
        assert_eq!(g.edge(EdgeId(0)).weight, 7);
    }
}

// ── Dijkstra routing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use tc_core::{EdgeId, VertexId};

    use super::helpers::*;
    use crate::{DijkstraRouter, DirectedWeightedGraph, Edge, GraphError, PathRouter};

    #[test]
    fn trivial_same_vertex() {
        let g = diamond();
        let p = DijkstraRouter::new().route(&g, v(3), v(3)).unwrap();
        assert!(p.is_trivial());
        assert_eq!(p.weight, 0.0);
    }

    #[test]
    fn shortest_path_correct() {
        let g = diamond();
        let p = DijkstraRouter::new().route(&g, v(0), v(4)).unwrap();
        assert_eq!(p.weight, 3.0);
        assert_eq!(p.edges, vec![EdgeId(0), EdgeId(1), EdgeId(2)]);
        assert_eq!(g.edge(p.edges[0]).from, v(0));
        assert_eq!(g.edge(p.edges[2]).to, v(4));
    }

    #[test]
    fn unreachable() {
        let g = diamond();
        let err = DijkstraRouter::new().route(&g, v(4), v(0)).unwrap_err();
        assert!(matches!(err, GraphError::NoRoute { .. }));
    }

    #[test]
    fn out_of_range_query() {
        let g = diamond();
        let err = DijkstraRouter::new().route(&g, v(0), VertexId(99)).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { .. }));
    }

    #[test]
    fn ties_prefer_earlier_edge() {
        let mut g = DirectedWeightedGraph::new(2);
        let first = g.add_edge(edge(0, 1, 2.0)).unwrap();
        g.add_edge(edge(0, 1, 2.0)).unwrap();
        let p = DijkstraRouter::new().route(&g, v(0), v(1)).unwrap();
        assert_eq!(p.edges, vec![first]);
    }

    #[test]
    fn ties_prefer_earlier_path_over_lower_vertex() {
        // Two equal-cost paths 0→2→3 and 0→1→3; the first was inserted first.
        let mut g = DirectedWeightedGraph::new(4);
        let e0 = g.add_edge(edge(0, 2, 1.0)).unwrap();
        g.add_edge(edge(0, 1, 1.0)).unwrap();
        let e2 = g.add_edge(edge(2, 3, 1.0)).unwrap();
        g.add_edge(edge(1, 3, 1.0)).unwrap();

        let plain = DijkstraRouter::new().route(&g, v(0), v(3)).unwrap();
        assert_eq!(plain.edges, vec![e0, e2]);
        assert_eq!(plain.weight, 2.0);

        let cached = DijkstraRouter::cached(&g).route(&g, v(0), v(3)).unwrap();
        assert_eq!(cached.edges, vec![e0, e2]);
    }

    #[test]
    fn zero_weight_cycle_terminates() {
        let mut g = DirectedWeightedGraph::new(3);
        g.add_edge(edge(0, 1, 0.0)).unwrap();
        g.add_edge(edge(1, 0, 0.0)).unwrap();
        g.add_edge(edge(1, 2, 4.0)).unwrap();
        let p = DijkstraRouter::new().route(&g, v(0), v(2)).unwrap();
        assert_eq!(p.weight, 4.0);
        assert_eq!(p.edges.len(), 2);
    }

    #[test]
    fn integer_weights_saturate() {
        let mut g = DirectedWeightedGraph::<u32>::new(3);
        g.add_edge(Edge { from: v(0), to: v(1), weight: u32::MAX }).unwrap();
        g.add_edge(Edge { from: v(1), to: v(2), weight: 10 }).unwrap();
        let p = DijkstraRouter::new().route(&g, v(0), v(2)).unwrap();
        assert_eq!(p.weight, u32::MAX);
    }

    #[test]
    fn cache_fills_lazily_per_source() {
        let g = diamond();
        let router = DijkstraRouter::cached(&g);
        assert_eq!(router.cached_tree_count(), 0);

        router.route(&g, v(0), v(4)).unwrap();
        router.route(&g, v(0), v(2)).unwrap();
        assert_eq!(router.cached_tree_count(), 1);

        router.route(&g, v(3), v(4)).unwrap();
        assert_eq!(router.cached_tree_count(), 2);
    }

    #[test]
    fn cached_router_is_shareable() {
        let g = diamond();
        let router = DijkstraRouter::cached(&g);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let p = router.route(&g, v(0), v(4)).unwrap();
                    assert_eq!(p.weight, 3.0);
                });
            }
        });
        assert_eq!(router.cached_tree_count(), 1);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use tc_core::VertexId;

    use crate::{DijkstraRouter, DirectedWeightedGraph, Edge, PathRouter};

    fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(u32, u32, u32)>)> {
        (2usize..12).prop_flat_map(|n| {
            let v = 0..n as u32;
            (Just(n), prop::collection::vec((v.clone(), v, 0u32..100), 0..40))
        })
    }

    fn build(n: usize, edges: &[(u32, u32, u32)]) -> DirectedWeightedGraph<u32> {
        let mut g = DirectedWeightedGraph::new(n);
        for &(from, to, weight) in edges {
            g.add_edge(Edge { from: VertexId(from), to: VertexId(to), weight }).unwrap();
        }
        g
    }

    proptest! {
        #[test]
        fn cached_and_uncached_agree((n, edges) in graph_strategy()) {
            let g = build(n, &edges);
            let plain = DijkstraRouter::new();
            let cached = DijkstraRouter::cached(&g);
            for from in 0..n as u32 {
                for to in 0..n as u32 {
                    let a = plain.route(&g, VertexId(from), VertexId(to)).ok();
                    let b = cached.route(&g, VertexId(from), VertexId(to)).ok();
                    prop_assert_eq!(a, b);
                }
            }
        }

        #[test]
        fn path_weight_is_sum_of_edges((n, edges) in graph_strategy()) {
            let g = build(n, &edges);
            let router = DijkstraRouter::new();
            for to in 0..n as u32 {
                if let Ok(path) = router.route(&g, VertexId(0), VertexId(to)) {
                    let sum: u32 = path.edges.iter().map(|&e| g.edge(e).weight).sum();
                    prop_assert_eq!(sum, path.weight);
                    let mut at = VertexId(0);
                    for &e in &path.edges {
                        prop_assert_eq!(g.edge(e).from, at);
                        at = g.edge(e).to;
                    }
                    prop_assert_eq!(at, VertexId(to));
                }
            }
        }
    }
}
