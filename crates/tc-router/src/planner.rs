//! The transit router facade: stop names in, itineraries out.

use tracing::debug;

use tc_catalogue::Catalogue;
use tc_core::{Minutes, RoutingSettings};
use tc_graph::{DijkstraRouter, DirectedWeightedGraph, GraphError, PathInfo, PathRouter};

use crate::transit_graph::{EdgeKind, TransitGraph, TransitGraphBuilder};
use crate::RouterResult;

// ── RoutePlan ─────────────────────────────────────────────────────────────────

/// One step of an itinerary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteItem {
    /// Wait at `stop_name` for `time` minutes.
    Wait { stop_name: String, time: Minutes },
    /// Ride bus `bus` for `span_count` stops, taking `time` minutes.
    Ride { bus: String, span_count: u32, time: Minutes },
}

impl RouteItem {
    pub fn time(&self) -> Minutes {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Ride { time, .. } => *time,
        }
    }

    pub fn is_ride(&self) -> bool {
        matches!(self, RouteItem::Ride { .. })
    }
}

/// A fastest itinerary between two stops.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    pub total_time: Minutes,
    pub items:      Vec<RouteItem>,
}

impl RoutePlan {
    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_ride()).count()
    }
}

// ── TransitRouter ─────────────────────────────────────────────────────────────

/// Owns one transit graph and one shortest-path router over it.
///
/// Built once from a loaded catalogue; afterwards every method takes
/// `&self`, so a router can be shared freely between threads.
pub struct TransitRouter<R = DijkstraRouter<Minutes>> {
    graph:    TransitGraph,
    router:   R,
    settings: RoutingSettings,
}

impl TransitRouter {
    /// Build the transit graph and a Dijkstra router that caches one
    /// shortest-path tree per source stop.
    pub fn build(catalogue: &Catalogue, settings: RoutingSettings) -> RouterResult<Self> {
        Self::build_with(catalogue, settings, DijkstraRouter::cached)
    }
}

impl<R: PathRouter<Minutes>> TransitRouter<R> {
    /// Build with a caller-chosen path router, constructed from the finished
    /// graph.
    pub fn build_with<F>(catalogue: &Catalogue, settings: RoutingSettings, make_router: F) -> RouterResult<Self>
    where
        F: FnOnce(&DirectedWeightedGraph<Minutes>) -> R,
    {
        let graph = TransitGraphBuilder::new(catalogue, settings).build()?;
        let router = make_router(graph.graph());
        Ok(Self { graph, router, settings })
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Fastest itinerary from `from` to `to`.
    ///
    /// Unknown stops, stops served by no route, and disconnected pairs all
    /// yield `None`.  `from == to` on a served stop yields an empty plan.
    pub fn build_route(&self, from: &str, to: &str) -> Option<RoutePlan> {
        let source = self.graph.board_vertex_of(from)?;
        let target = self.graph.board_vertex_of(to)?;

        match self.router.route(self.graph.graph(), source, target) {
            Ok(path) => Some(self.describe(&path)),
            Err(GraphError::NoRoute { .. }) => None,
            Err(err) => {
                debug!(from, to, error = %err, "route query failed");
                None
            }
        }
    }

    fn describe(&self, path: &PathInfo<Minutes>) -> RoutePlan {
        let items = path
            .edges
            .iter()
            .map(|&edge_id| {
                let time = self.graph.graph().edge(edge_id).weight;
                match self.graph.edge_kind(edge_id) {
                    EdgeKind::Wait { stop } => RouteItem::Wait {
                        stop_name: self.graph.stop_name(stop).unwrap_or_default().to_owned(),
                        time,
                    },
                    EdgeKind::Ride { route, span_count } => RouteItem::Ride {
                        bus: self.graph.route_name(route).unwrap_or_default().to_owned(),
                        span_count,
                        time,
                    },
                }
            })
            .collect();

        RoutePlan { total_time: path.weight, items }
    }
}
