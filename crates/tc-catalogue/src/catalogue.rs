//! The transit catalogue store.
//!
//! # Data layout
//!
//! Stops and routes live in two `Vec` arenas addressed by [`StopId`] and
//! [`RouteId`].  All other indexes are plain maps over those ids:
//!
//! ```text
//! stop_index:  name → StopId
//! route_index: name → RouteId
//! stop_routes: StopId → [RouteId]          (deduplicated, insertion order)
//! distances:   (StopId, StopId) → metres   (directed)
//! ```
//!
//! Nothing is ever removed, so ids stay valid for the lifetime of the store.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use tc_core::{GeoPoint, Meters, RouteId, StopId};

use crate::model::{Route, RouteStats, Stop, StopStats};
use crate::stats::compute_route_stats;
use crate::{CatalogueError, CatalogueResult};

/// Largest road distance accepted by [`Catalogue::set_distance`].
pub const MAX_DISTANCE_M: Meters = 1_000_000;

/// Owns all stops, routes, and inter-stop road distances.
///
/// Duplicate stop or route names are rejected; the store is left unchanged
/// by any failed operation.
#[derive(Debug, Default)]
pub struct Catalogue {
    stops:       Vec<Stop>,
    routes:      Vec<Route>,
    stop_index:  FxHashMap<String, StopId>,
    route_index: FxHashMap<String, RouteId>,
    stop_routes: Vec<Vec<RouteId>>,
    distances:   FxHashMap<(StopId, StopId), Meters>,
}

fn rejected(err: CatalogueError) -> CatalogueError {
    warn!(error = %err, "rejected catalogue load operation");
    err
}

/// Id for the next entry of an arena currently holding `len` entries.
/// `u32::MAX` is the `INVALID` sentinel and is never handed out.
pub(crate) fn next_id<I>(len: usize, arena: &'static str, make: fn(u32) -> I) -> CatalogueResult<I> {
    u32::try_from(len)
        .ok()
        .filter(|&n| n != u32::MAX)
        .map(make)
        .ok_or_else(|| rejected(CatalogueError::CapacityExceeded { arena, count: len }))
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Load operations ───────────────────────────────────────────────────

    /// Add a stop and return its id (sequential from 0).
    ///
    /// Coordinates must be finite and inside the WGS-84 ranges.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: GeoPoint) -> CatalogueResult<StopId> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(rejected(CatalogueError::DuplicateStop(name)));
        }
        if !coordinates.is_valid() {
            return Err(rejected(CatalogueError::InvalidCoordinates { stop: name, coordinates }));
        }

        let id = next_id(self.stops.len(), "stop", StopId)?;
        debug!(stop = %name, %coordinates, %id, "stop added");
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop { name, coordinates });
        self.stop_routes.push(Vec::new());
        Ok(id)
    }

    /// Add a route over already-added stops.
    ///
    /// `stop_names` is the full cycle for round-trip routes and the one-way
    /// leg for linear ones.  An empty sequence is accepted; such a route is
    /// simply never active.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> CatalogueResult<RouteId> {
        let name = name.into();
        if self.route_index.contains_key(&name) {
            return Err(rejected(CatalogueError::DuplicateRoute(name)));
        }

        let stops = stop_names
            .iter()
            .map(|s| self.resolve(s.as_ref()))
            .collect::<CatalogueResult<Vec<StopId>>>()
            .map_err(rejected)?;

        let id = next_id(self.routes.len(), "route", RouteId)?;
        for &stop in &stops {
            let serving = &mut self.stop_routes[stop.index()];
            // A stop repeated within one route is recorded once.
            if serving.last() != Some(&id) {
                serving.push(id);
            }
        }

        debug!(route = %name, stops = stops.len(), is_roundtrip, %id, "route added");
        self.route_index.insert(name.clone(), id);
        self.routes.push(Route { name, stops, is_roundtrip });
        Ok(id)
    }

    /// Record the road distance from `from` to `to`, replacing any earlier
    /// value for the same ordered pair.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: Meters) -> CatalogueResult<()> {
        if meters == 0 || meters > MAX_DISTANCE_M {
            return Err(rejected(CatalogueError::DistanceOutOfRange {
                from: from.to_owned(),
                to: to.to_owned(),
                meters,
                max: MAX_DISTANCE_M,
            }));
        }
        let a = self.resolve(from).map_err(rejected)?;
        let b = self.resolve(to).map_err(rejected)?;

        debug!(from, to, meters, "distance set");
        self.distances.insert((a, b), meters);
        Ok(())
    }

    // ── Identity lookups ──────────────────────────────────────────────────

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn route_id(&self, name: &str) -> Option<RouteId> {
        self.route_index.get(name).copied()
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| self.stop(id))
    }

    pub fn find_route(&self, name: &str) -> Option<&Route> {
        self.route_id(name).map(|id| self.route(id))
    }

    /// # Panics
    /// Panics if `id` did not come from this catalogue.
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// # Panics
    /// Panics if `id` did not come from this catalogue.
    #[inline]
    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.index()]
    }

    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i as u32), s))
    }

    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes.iter().enumerate().map(|(i, r)| (RouteId(i as u32), r))
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Number of directed distance entries actually recorded.
    pub fn distance_count(&self) -> usize {
        self.distances.len()
    }

    fn resolve(&self, name: &str) -> CatalogueResult<StopId> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))
    }

    // ── Distances ─────────────────────────────────────────────────────────

    /// Road distance from `from` to `to`.
    ///
    /// Falls back to the `to → from` entry when the requested direction was
    /// never set.  The result is therefore only symmetric when one direction
    /// is missing.
    pub fn distance(&self, from: &str, to: &str) -> CatalogueResult<Meters> {
        self.distance_between(self.resolve(from)?, self.resolve(to)?)
    }

    /// Id-based form of [`distance`](Self::distance).
    pub fn distance_between(&self, from: StopId, to: StopId) -> CatalogueResult<Meters> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .ok_or_else(|| CatalogueError::NoSuchDistance {
                from: self.stop(from).name.clone(),
                to:   self.stop(to).name.clone(),
            })
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Statistics for the named route, or `None` if no such route exists.
    pub fn route_stats(&self, name: &str) -> CatalogueResult<Option<RouteStats>> {
        self.find_route(name)
            .map(|route| compute_route_stats(self, route))
            .transpose()
    }

    /// Routes serving the named stop, or `None` if no such stop exists.
    pub fn stop_stats(&self, name: &str) -> Option<StopStats<'_>> {
        let id = self.stop_id(name)?;
        let mut routes: Vec<&str> = self.stop_routes[id.index()]
            .iter()
            .map(|&r| self.route(r).name.as_str())
            .collect();
        routes.sort_unstable();
        routes.dedup();
        Some(StopStats { routes })
    }

    /// Compute every route's statistics once so that missing distances and
    /// overflows surface at load time rather than on first query.
    pub fn validate(&self) -> CatalogueResult<()> {
        for route in &self.routes {
            compute_route_stats(self, route)?;
        }
        debug!(routes = self.routes.len(), "catalogue validated");
        Ok(())
    }

    // ── Active subsets ────────────────────────────────────────────────────

    /// Stops served by at least one route, sorted by name.
    pub fn active_stops(&self) -> Vec<StopId> {
        let mut ids: Vec<StopId> = self
            .stops()
            .filter(|(id, _)| !self.stop_routes[id.index()].is_empty())
            .map(|(id, _)| id)
            .collect();
        ids.sort_unstable_by(|a, b| self.stop(*a).name.cmp(&self.stop(*b).name));
        ids
    }

    /// Routes with at least one stop, sorted by name.
    pub fn active_routes(&self) -> Vec<RouteId> {
        let mut ids: Vec<RouteId> = self
            .routes()
            .filter(|(_, r)| r.is_active())
            .map(|(id, _)| id)
            .collect();
        ids.sort_unstable_by(|a, b| self.route(*a).name.cmp(&self.route(*b).name));
        ids
    }
}
