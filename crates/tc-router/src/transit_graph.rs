//! Transit graph: the weighted digraph specialised to stops and routes.
//!
//! # Vertex layout
//!
//! Active stops are numbered by *slot* in name order.  Slot `s` owns
//!
//! ```text
//! board(s) = VertexId(2·s)       waiting at the stop
//! ride(s)  = VertexId(2·s + 1)   on a bus leaving the stop
//! ```
//!
//! # Edge provenance
//!
//! Every edge has an [`EdgeKind`] stored at the same index as the edge, so
//! `kinds[edge_id]` is always defined.  Wait edges have span count 0; ride
//! edges count the stop-to-stop hops they cover.

use rustc_hash::FxHashMap;
use tracing::info;

use tc_catalogue::{Catalogue, Route};
use tc_core::{EdgeId, Meters, Minutes, RouteId, RoutingSettings, StopId, VertexId};
use tc_graph::{DirectedWeightedGraph, Edge};

use crate::{RouterError, RouterResult};

// ── Edge provenance ───────────────────────────────────────────────────────────

/// What an edge of the transit graph stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeKind {
    /// Waiting at `stop` for the next bus.
    Wait { stop: StopId },
    /// Riding `route` for `span_count` hops without getting off.
    Ride { route: RouteId, span_count: u32 },
}

impl EdgeKind {
    /// 0 for wait edges.
    #[inline]
    pub fn span_count(self) -> u32 {
        match self {
            EdgeKind::Wait { .. } => 0,
            EdgeKind::Ride { span_count, .. } => span_count,
        }
    }
}

// ── TransitGraph ──────────────────────────────────────────────────────────────

/// The built transit graph plus everything needed to describe its edges
/// without going back to the catalogue.
#[derive(Debug)]
pub struct TransitGraph {
    graph:        DirectedWeightedGraph<Minutes>,
    kinds:        Vec<EdgeKind>,
    slot_by_name: FxHashMap<String, u32>,
    stop_names:   FxHashMap<StopId, String>,
    route_names:  FxHashMap<RouteId, String>,
}

impl TransitGraph {
    /// `slot` must be below the built graph's slot count, which
    /// `TransitGraphBuilder::build` caps at `u32::MAX / 2`.
    #[inline]
    pub fn board_vertex(slot: u32) -> VertexId {
        VertexId(slot * 2)
    }

    #[inline]
    pub fn ride_vertex(slot: u32) -> VertexId {
        VertexId(slot * 2 + 1)
    }

    pub fn graph(&self) -> &DirectedWeightedGraph<Minutes> {
        &self.graph
    }

    /// Board vertex of the named stop; `None` for unknown or inactive stops.
    pub fn board_vertex_of(&self, stop_name: &str) -> Option<VertexId> {
        self.slot_by_name.get(stop_name).map(|&s| Self::board_vertex(s))
    }

    /// # Panics
    /// Panics if `edge` is not an edge of this graph.
    #[inline]
    pub fn edge_kind(&self, edge: EdgeId) -> EdgeKind {
        self.kinds[edge.index()]
    }

    pub fn stop_name(&self, stop: StopId) -> Option<&str> {
        self.stop_names.get(&stop).map(String::as_str)
    }

    pub fn route_name(&self, route: RouteId) -> Option<&str> {
        self.route_names.get(&route).map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builds a [`TransitGraph`] from a fully loaded catalogue.
///
/// For every active route each *bus run* is expanded: the stop sequence
/// forward, and for linear routes the same sequence reversed.  Within a
/// run, every stop gets a wait edge and a direct ride edge to each later
/// stop of that run.
pub struct TransitGraphBuilder<'a> {
    catalogue: &'a Catalogue,
    settings:  RoutingSettings,
}

impl<'a> TransitGraphBuilder<'a> {
    pub fn new(catalogue: &'a Catalogue, settings: RoutingSettings) -> Self {
        Self { catalogue, settings }
    }

    /// # Errors
    ///
    /// [`RouterError::Config`] for invalid settings; catalogue errors for
    /// missing distances; [`RouterError::NumericOverflow`] if a run's
    /// cumulative length does not fit in [`Meters`];
    /// [`RouterError::TooManyStops`] if the vertex ids would not fit.
    pub fn build(self) -> RouterResult<TransitGraph> {
        self.settings.validate()?;

        let active_stops = self.catalogue.active_stops();
        let active_routes = self.catalogue.active_routes();

        let mut slot_of_stop: FxHashMap<StopId, u32> = FxHashMap::default();
        let mut slot_by_name = FxHashMap::default();
        let mut stop_names = FxHashMap::default();
        for (slot, &stop) in (0..slot_count(active_stops.len())?).zip(&active_stops) {
            let name = &self.catalogue.stop(stop).name;
            slot_of_stop.insert(stop, slot);
            slot_by_name.insert(name.clone(), slot);
            stop_names.insert(stop, name.clone());
        }

        let expected_edges: usize = active_routes
            .iter()
            .map(|&r| {
                let route = self.catalogue.route(r);
                let n = route.stops.len();
                let per_run = n * (n + 1) / 2;
                if route.is_roundtrip { per_run } else { per_run * 2 }
            })
            .sum();

        let mut assembly = Assembly {
            catalogue: self.catalogue,
            settings:  &self.settings,
            slot_of_stop,
            graph:     DirectedWeightedGraph::with_capacity(active_stops.len() * 2, expected_edges),
            kinds:     Vec::with_capacity(expected_edges),
        };

        let mut route_names = FxHashMap::default();
        for &route_id in &active_routes {
            let route = self.catalogue.route(route_id);
            route_names.insert(route_id, route.name.clone());

            assembly.add_run(route_id, route, &route.stops)?;
            if !route.is_roundtrip {
                let back: Vec<StopId> = route.stops.iter().rev().copied().collect();
                assembly.add_run(route_id, route, &back)?;
            }
        }

        info!(
            stops    = active_stops.len(),
            routes   = active_routes.len(),
            vertices = assembly.graph.vertex_count(),
            edges    = assembly.graph.edge_count(),
            "transit graph built"
        );

        Ok(TransitGraph {
            graph: assembly.graph,
            kinds: assembly.kinds,
            slot_by_name,
            stop_names,
            route_names,
        })
    }
}

/// Number of slots for `stops` active stops.  Both vertices of the last
/// slot must stay below `VertexId::INVALID`.
pub(crate) fn slot_count(stops: usize) -> RouterResult<u32> {
    u32::try_from(stops)
        .ok()
        .filter(|&n| n <= u32::MAX / 2)
        .ok_or(RouterError::TooManyStops { count: stops })
}

/// Mutable state while edges are being appended.
struct Assembly<'a> {
    catalogue:    &'a Catalogue,
    settings:     &'a RoutingSettings,
    slot_of_stop: FxHashMap<StopId, u32>,
    graph:        DirectedWeightedGraph<Minutes>,
    kinds:        Vec<EdgeKind>,
}

impl Assembly<'_> {
    fn push(&mut self, from: VertexId, to: VertexId, weight: Minutes, kind: EdgeKind) -> RouterResult<()> {
        let id = self.graph.add_edge(Edge { from, to, weight })?;
        debug_assert_eq!(id.index(), self.kinds.len());
        self.kinds.push(kind);
        Ok(())
    }

    fn slot(&self, stop: StopId) -> u32 {
        // Every stop of an active route is active.
        self.slot_of_stop[&stop]
    }

    fn add_run(&mut self, route_id: RouteId, route: &Route, stops: &[StopId]) -> RouterResult<()> {
        for (i, &origin) in stops.iter().enumerate() {
            let origin_slot = self.slot(origin);
            self.push(
                TransitGraph::board_vertex(origin_slot),
                TransitGraph::ride_vertex(origin_slot),
                self.settings.wait_minutes(),
                EdgeKind::Wait { stop: origin },
            )?;

            let mut leg = OpenLeg::depart(origin);
            for &next in &stops[i + 1..] {
                leg.extend(self.catalogue, route, next)?;
                self.push(
                    TransitGraph::ride_vertex(origin_slot),
                    TransitGraph::board_vertex(self.slot(next)),
                    self.settings.ride_minutes(u64::from(leg.meters)),
                    EdgeKind::Ride { route: route_id, span_count: leg.span_count },
                )?;
            }
        }
        Ok(())
    }
}

/// A passenger still on the bus that left `origin`: where the bus is now,
/// how many hops it has made, and how far it has driven.
struct OpenLeg {
    at:         StopId,
    span_count: u32,
    meters:     Meters,
}

impl OpenLeg {
    fn depart(origin: StopId) -> Self {
        Self { at: origin, span_count: 0, meters: 0 }
    }

    fn extend(&mut self, catalogue: &Catalogue, route: &Route, next: StopId) -> RouterResult<()> {
        let hop = catalogue.distance_between(self.at, next)?;
        self.meters = self
            .meters
            .checked_add(hop)
            .ok_or_else(|| RouterError::NumericOverflow { route: route.name.clone() })?;
        self.span_count += 1;
        self.at = next;
        Ok(())
    }
}
