//! The query facade.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use tc_catalogue::{Catalogue, RouteStats, StopStats};
use tc_core::RoutingSettings;
use tc_router::{RoutePlan, TransitRouter};

use crate::QueryResult;

// ── Map snapshot ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StopView {
    pub name:      String,
    pub latitude:  f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteView {
    pub name:         String,
    pub stops:        Vec<String>,
    pub is_roundtrip: bool,
}

/// Active stops and routes, each sorted by name.  Consumed by map rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub stops:  Vec<StopView>,
    pub routes: Vec<RouteView>,
}

// ── QueryFacade ───────────────────────────────────────────────────────────────

/// Read-only view over a loaded catalogue and its transit router.
///
/// Both halves sit behind `Arc`, so cloning the facade is cheap and every
/// clone answers queries against the same immutable snapshot.
#[derive(Clone)]
pub struct QueryFacade {
    catalogue: Arc<Catalogue>,
    router:    Arc<TransitRouter>,
}

impl QueryFacade {
    /// Validate `catalogue`, build the transit router, and freeze both.
    ///
    /// # Errors
    ///
    /// Any missing distance, overflow, or invalid setting ends the load
    /// phase here rather than surfacing on a later query.
    pub fn build(catalogue: Catalogue, settings: RoutingSettings) -> QueryResult<Self> {
        catalogue.validate()?;
        let router = TransitRouter::build(&catalogue, settings)?;
        info!(
            stops  = catalogue.stop_count(),
            routes = catalogue.route_count(),
            "query facade ready"
        );
        Ok(Self {
            catalogue: Arc::new(catalogue),
            router:    Arc::new(router),
        })
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn router(&self) -> &TransitRouter {
        &self.router
    }

    /// `Ok(None)` when no such route exists.
    pub fn route_stats(&self, name: &str) -> QueryResult<Option<RouteStats>> {
        Ok(self.catalogue.route_stats(name)?)
    }

    /// `None` when no such stop exists.
    pub fn stop_stats(&self, name: &str) -> Option<StopStats<'_>> {
        self.catalogue.stop_stats(name)
    }

    /// `None` when either stop is unknown or unreachable.
    pub fn route_plan(&self, from: &str, to: &str) -> Option<RoutePlan> {
        self.router.build_route(from, to)
    }

    pub fn map_snapshot(&self) -> MapSnapshot {
        let c = &*self.catalogue;
        let stops = c
            .active_stops()
            .into_iter()
            .map(|id| {
                let stop = c.stop(id);
                StopView {
                    name:      stop.name.clone(),
                    latitude:  stop.coordinates.lat,
                    longitude: stop.coordinates.lon,
                }
            })
            .collect();
        let routes = c
            .active_routes()
            .into_iter()
            .map(|id| {
                let route = c.route(id);
                RouteView {
                    name:         route.name.clone(),
                    stops:        route.stops.iter().map(|&s| c.stop(s).name.clone()).collect(),
                    is_roundtrip: route.is_roundtrip,
                }
            })
            .collect();
        MapSnapshot { stops, routes }
    }
}
