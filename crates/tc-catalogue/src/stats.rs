//! Route length and curvature accumulation.
//!
//! Both sums are checked: road metres with `checked_add` on [`Meters`],
//! great-circle metres by rejecting non-finite partial sums.  Either
//! failure surfaces as [`CatalogueError::NumericOverflow`].

use rustc_hash::FxHashSet;

use tc_core::{Meters, StopId};

use crate::model::{Route, RouteStats};
use crate::{Catalogue, CatalogueError, CatalogueResult};

/// Running totals for a route traversal.
#[derive(Default)]
struct LengthAccumulator {
    road_m: Meters,
    geo_m:  f64,
}

impl LengthAccumulator {
    fn add_road(&mut self, meters: Meters, route: &str) -> CatalogueResult<()> {
        self.road_m = self
            .road_m
            .checked_add(meters)
            .ok_or_else(|| overflow(route))?;
        Ok(())
    }

    fn add_geo(&mut self, meters: f64, route: &str) -> CatalogueResult<()> {
        let next = self.geo_m + meters;
        if !next.is_finite() {
            return Err(overflow(route));
        }
        self.geo_m = next;
        Ok(())
    }

    /// Road length over great-circle length.
    ///
    /// With zero great-circle length the ratio is 1.0 when the road length
    /// is zero too (empty or single-stop routes) and infinite otherwise,
    /// which only happens when distinct stops share coordinates.
    fn curvature(&self) -> f64 {
        if self.geo_m > 0.0 {
            f64::from(self.road_m) / self.geo_m
        } else if self.road_m == 0 {
            1.0
        } else {
            f64::INFINITY
        }
    }
}

fn overflow(route: &str) -> CatalogueError {
    CatalogueError::NumericOverflow { route: route.to_owned() }
}

/// Compute [`RouteStats`] for `route`, which must belong to `catalogue`.
///
/// # Errors
///
/// [`CatalogueError::NoSuchDistance`] if two consecutive stops have no
/// recorded distance in either direction, [`CatalogueError::NumericOverflow`]
/// if a sum leaves the representable range.
pub fn compute_route_stats(catalogue: &Catalogue, route: &Route) -> CatalogueResult<RouteStats> {
    let unique_stops = route.stops.iter().collect::<FxHashSet<&StopId>>().len();

    let mut acc = LengthAccumulator::default();
    let mut prev: Option<StopId> = None;

    for stop in route.traversal() {
        if let Some(from) = prev {
            acc.add_road(catalogue.distance_between(from, stop)?, &route.name)?;

            let a = catalogue.stop(from).coordinates;
            let b = catalogue.stop(stop).coordinates;
            acc.add_geo(a.distance_m(b), &route.name)?;
        }
        prev = Some(stop);
    }

    Ok(RouteStats {
        total_stops: route.total_stop_count(),
        unique_stops,
        length_m: acc.road_m,
        curvature: acc.curvature(),
    })
}
