//! Append-only directed weighted graph.
//!
//! # Data layout
//!
//! Edges are stored in one `Vec` in insertion order; an [`EdgeId`] is the
//! position of the edge in that list and is never reused.  Each vertex keeps
//! an incidence list of its outgoing `EdgeId`s, also in insertion order:
//!
//! ```text
//! edges:     [e0, e1, e2, …]
//! incidence: v → [EdgeId, …]
//! ```
//!
//! Unlike a CSR layout the incidence lists can grow one edge at a time, which
//! is what incremental transit-graph construction needs.

use tc_core::{EdgeId, VertexId};

use crate::{GraphError, GraphResult, Weight};

/// A directed, weighted edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<W> {
    pub from:   VertexId,
    pub to:     VertexId,
    pub weight: W,
}

/// Directed graph over a fixed vertex set `0..vertex_count`.
#[derive(Clone, Debug)]
pub struct DirectedWeightedGraph<W> {
    edges:     Vec<Edge<W>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<W: Weight> DirectedWeightedGraph<W> {
    /// A graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges:     Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Pre-allocate the edge list as well.
    pub fn with_capacity(vertex_count: usize, edges: usize) -> Self {
        Self {
            edges:     Vec::with_capacity(edges),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Append `edge` and return its id.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] if either endpoint is not a vertex of
    /// this graph, [`GraphError::InvalidWeight`] for negative or non-finite
    /// weights, [`GraphError::TooManyEdges`] once ids are exhausted.
    pub fn add_edge(&mut self, edge: Edge<W>) -> GraphResult<EdgeId> {
        self.check_vertex(edge.from)?;
        self.check_vertex(edge.to)?;
        if !edge.weight.is_valid() {
            return Err(GraphError::InvalidWeight {
                from:   edge.from,
                to:     edge.to,
                weight: format!("{:?}", edge.weight),
            });
        }

        let id = EdgeId::try_from(self.edges.len())
            .ok()
            .filter(|id| id.is_valid())
            .ok_or(GraphError::TooManyEdges { count: self.edges.len() })?;
        self.incidence[edge.from.index()].push(id);
        self.edges.push(edge);
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// # Panics
    /// Panics if `id` was not returned by [`add_edge`](Self::add_edge).
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge<W> {
        &self.edges[id.index()]
    }

    /// Outgoing edges of `vertex`, in insertion order.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence[vertex.index()].iter().copied()
    }

    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.incidence[vertex.index()].len()
    }

    #[inline]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.incidence.len()
    }

    pub(crate) fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
