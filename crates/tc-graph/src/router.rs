//! Shortest-path routing over a [`DirectedWeightedGraph`].
//!
//! # Pluggability
//!
//! Callers go through the [`PathRouter`] trait, so a different search (A*,
//! contraction hierarchies) can replace [`DijkstraRouter`] without touching
//! the transit layer.  Routers never mutate the graph; they take it by
//! shared reference on every call.
//!
//! # Caching
//!
//! [`DijkstraRouter::cached`] keeps one full shortest-path tree per source
//! vertex, computed on first use and stored in a `OnceLock`.  Readers on
//! several threads share it without locking.  An uncached router runs an
//! early-exit search per query.  Both return identical paths.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::OnceLock;

use tc_core::{EdgeId, VertexId};

use crate::{DirectedWeightedGraph, GraphError, GraphResult, Weight};

// ── PathInfo ──────────────────────────────────────────────────────────────────

/// A minimum-weight path: the edges to traverse in order and their total.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo<W> {
    pub edges:  Vec<EdgeId>,
    pub weight: W,
}

impl<W> PathInfo<W> {
    /// `true` if source and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── PathRouter trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so one router can serve concurrent
/// read-only queries.
pub trait PathRouter<W: Weight>: Send + Sync {
    /// Minimum-weight path from `from` to `to`.
    ///
    /// `from == to` yields an empty path of weight zero.  Returns
    /// [`GraphError::NoRoute`] when `to` is unreachable.
    fn route(
        &self,
        graph: &DirectedWeightedGraph<W>,
        from: VertexId,
        to: VertexId,
    ) -> GraphResult<PathInfo<W>>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm for non-negative weights.
///
/// Ties are broken by edge insertion order: only a strictly better cost
/// replaces a label, and among equal-cost heap entries the one reached
/// through the earlier-inserted edge is settled first.  Of several
/// equal-cost paths, the one whose edges were inserted earlier wins.
pub struct DijkstraRouter<W: Weight> {
    trees: Option<Vec<OnceLock<ShortestPathTree<W>>>>,
}

impl<W: Weight> DijkstraRouter<W> {
    /// A router that searches from scratch on every query.
    pub fn new() -> Self {
        Self { trees: None }
    }

    /// A router that caches one shortest-path tree per source of `graph`.
    ///
    /// The cache is bound to `graph`'s vertex count and must only be used
    /// with that graph; sources outside the cached range are searched
    /// uncached.
    pub fn cached(graph: &DirectedWeightedGraph<W>) -> Self {
        let trees = (0..graph.vertex_count()).map(|_| OnceLock::new()).collect();
        Self { trees: Some(trees) }
    }

    /// Number of source vertices whose tree has been computed so far.
    pub fn cached_tree_count(&self) -> usize {
        self.trees
            .as_ref()
            .map_or(0, |t| t.iter().filter(|c| c.get().is_some()).count())
    }
}

impl<W: Weight> Default for DijkstraRouter<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> PathRouter<W> for DijkstraRouter<W> {
    fn route(
        &self,
        graph: &DirectedWeightedGraph<W>,
        from: VertexId,
        to: VertexId,
    ) -> GraphResult<PathInfo<W>> {
        graph.check_vertex(from)?;
        graph.check_vertex(to)?;

        if from == to {
            return Ok(PathInfo { edges: Vec::new(), weight: W::ZERO });
        }

        match self.trees.as_ref().and_then(|t| t.get(from.index())) {
            Some(slot) => {
                let tree = slot.get_or_init(|| search(graph, from, None));
                tree.path(graph, from, to)
            }
            None => search(graph, from, Some(to)).path(graph, from, to),
        }
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Labels produced by one single-source search.
struct ShortestPathTree<W> {
    /// Best known cost to reach each vertex; `None` for unreached vertices.
    dist:      Vec<Option<W>>,
    /// Edge that reached each vertex; `EdgeId::INVALID` for the source and
    /// unreached vertices.
    prev_edge: Vec<EdgeId>,
}

impl<W: Weight> ShortestPathTree<W> {
    fn path(&self, graph: &DirectedWeightedGraph<W>, from: VertexId, to: VertexId) -> GraphResult<PathInfo<W>> {
        let weight = self.dist[to.index()].ok_or(GraphError::NoRoute { from, to })?;

        let mut edges = Vec::new();
        let mut cur = to;
        while cur != from {
            let e = self.prev_edge[cur.index()];
            if !e.is_valid() {
                return Err(GraphError::NoRoute { from, to });
            }
            edges.push(e);
            cur = graph.edge(e).from;
        }
        edges.reverse();
        Ok(PathInfo { edges, weight })
    }
}

/// Min-heap entry.  Among equal costs the entry reached through the
/// earlier-inserted edge pops first; the source carries `EdgeId::INVALID`.
struct HeapEntry<W> {
    cost:   W,
    via:    EdgeId,
    vertex: VertexId,
}

impl<W: Weight> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for HeapEntry<W> {}

impl<W: Weight> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp_weight(&other.cost)
            .then_with(|| self.via.cmp(&other.via))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Single-source Dijkstra.  With `target` set the search stops as soon as
/// the target is settled; otherwise every reachable vertex is labelled.
fn search<W: Weight>(
    graph: &DirectedWeightedGraph<W>,
    from: VertexId,
    target: Option<VertexId>,
) -> ShortestPathTree<W> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = Some(W::ZERO);

    // Reverse makes BinaryHeap (max) behave as a min-heap.
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry { cost: W::ZERO, via: EdgeId::INVALID, vertex: from }));

    while let Some(Reverse(HeapEntry { cost, vertex, .. })) = heap.pop() {
        if target == Some(vertex) {
            break;
        }

        // Skip stale heap entries.
        if dist[vertex.index()].is_some_and(|best| best.less_than(&cost)) {
            continue;
        }

        for edge_id in graph.out_edges(vertex) {
            let edge = graph.edge(edge_id);
            let new_cost = cost.accumulate(edge.weight);
            let improves = match dist[edge.to.index()] {
                None => true,
                Some(best) => new_cost.less_than(&best),
            };

            if improves {
                dist[edge.to.index()] = Some(new_cost);
                prev_edge[edge.to.index()] = edge_id;
                heap.push(Reverse(HeapEntry { cost: new_cost, via: edge_id, vertex: edge.to }));
            }
        }
    }

    ShortestPathTree { dist, prev_edge }
}
