//! Stat-request answering and response types.

use serde::Serialize;
use tracing::debug;

use tc_core::{Meters, Minutes};
use tc_router::{RouteItem, RoutePlan};

use crate::{MapSnapshot, QueryFacade, QueryResult, StatRequest};

const NOT_FOUND: &str = "not found";

/// Answer to one [`StatRequest`], tagged with its id.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatResponse {
    pub request_id: i64,
    #[serde(flatten)]
    pub body:       ResponseBody,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Bus {
        curvature:         f64,
        route_length:      Meters,
        stop_count:        usize,
        unique_stop_count: usize,
    },
    Stop {
        buses: Vec<String>,
    },
    Map {
        map: MapSnapshot,
    },
    Route {
        total_time: Minutes,
        items:      Vec<ItineraryItem>,
    },
    NotFound {
        error_message: String,
    },
}

impl ResponseBody {
    fn not_found() -> Self {
        ResponseBody::NotFound { error_message: NOT_FOUND.to_owned() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResponseBody::NotFound { .. })
    }
}

/// Itinerary step as presented to the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ItineraryItem {
    Wait { stop_name: String, time: Minutes },
    Bus { bus: String, span_count: u32, time: Minutes },
}

impl From<RouteItem> for ItineraryItem {
    fn from(item: RouteItem) -> Self {
        match item {
            RouteItem::Wait { stop_name, time } => ItineraryItem::Wait { stop_name, time },
            RouteItem::Ride { bus, span_count, time } => ItineraryItem::Bus { bus, span_count, time },
        }
    }
}

impl From<RoutePlan> for ResponseBody {
    fn from(plan: RoutePlan) -> Self {
        ResponseBody::Route {
            total_time: plan.total_time,
            items:      plan.items.into_iter().map(ItineraryItem::from).collect(),
        }
    }
}

impl QueryFacade {
    /// Answer one request.  Names that do not resolve produce a
    /// `"not found"` body, never an error.
    pub fn answer(&self, request: &StatRequest) -> QueryResult<StatResponse> {
        let body = match request {
            StatRequest::Bus { name, .. } => match self.route_stats(name)? {
                Some(stats) => ResponseBody::Bus {
                    curvature:         stats.curvature,
                    route_length:      stats.length_m,
                    stop_count:        stats.total_stops,
                    unique_stop_count: stats.unique_stops,
                },
                None => ResponseBody::not_found(),
            },
            StatRequest::Stop { name, .. } => match self.stop_stats(name) {
                Some(stats) => ResponseBody::Stop {
                    buses: stats.routes.into_iter().map(str::to_owned).collect(),
                },
                None => ResponseBody::not_found(),
            },
            StatRequest::Map { .. } => ResponseBody::Map { map: self.map_snapshot() },
            StatRequest::Route { from, to, .. } => self
                .route_plan(from, to)
                .map_or_else(ResponseBody::not_found, ResponseBody::from),
        };

        debug!(id = request.id(), found = !body.is_not_found(), "stat request answered");
        Ok(StatResponse { request_id: request.id(), body })
    }

    /// Answer every request, preserving order.
    #[cfg(not(feature = "parallel"))]
    pub fn answer_all(&self, requests: &[StatRequest]) -> QueryResult<Vec<StatResponse>> {
        requests.iter().map(|r| self.answer(r)).collect()
    }

    /// Answer every request on Rayon's pool, preserving order.
    #[cfg(feature = "parallel")]
    pub fn answer_all(&self, requests: &[StatRequest]) -> QueryResult<Vec<StatResponse>> {
        use rayon::prelude::*;
        requests.par_iter().map(|r| self.answer(r)).collect()
    }
}
