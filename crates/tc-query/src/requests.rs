//! Typed request boundary.
//!
//! These types mirror the structure of a transit request document; parsing
//! the concrete text format is left to whatever `serde` backend the
//! embedding application picks.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "base_requests": [
//!     { "type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2,
//!       "road_distances": { "B": 3900 } },
//!     { "type": "Bus", "name": "14", "stops": ["A", "B"], "is_roundtrip": false }
//!   ],
//!   "routing_settings": { "bus_wait_time": 6, "bus_velocity": 40 },
//!   "stat_requests": [
//!     { "id": 1, "type": "Bus", "name": "14" },
//!     { "id": 2, "type": "Stop", "name": "A" },
//!     { "id": 3, "type": "Map" },
//!     { "id": 4, "type": "Route", "from": "A", "to": "B" }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tc_catalogue::{Catalogue, CatalogueResult};
use tc_core::{GeoPoint, Meters, RoutingSettings};

use crate::{QueryFacade, QueryResult, StatResponse};

/// One network definition entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name:      String,
        latitude:  f64,
        longitude: f64,
        /// Road distances from this stop to its neighbours, in metres.
        #[serde(default)]
        road_distances: BTreeMap<String, Meters>,
    },
    Bus {
        name:         String,
        stops:        Vec<String>,
        is_roundtrip: bool,
    },
}

/// One query against the loaded network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Map { id }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

/// A complete request document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitDocument {
    #[serde(default)]
    pub base_requests:    Vec<BaseRequest>,
    pub routing_settings: RoutingSettings,
    #[serde(default)]
    pub stat_requests:    Vec<StatRequest>,
}

/// Load `requests` into `catalogue`: all stops first, then all routes, then
/// all road distances, so that entries may reference stops defined later in
/// the list.
pub fn apply_base_requests(catalogue: &mut Catalogue, requests: &[BaseRequest]) -> CatalogueResult<()> {
    for request in requests {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = request {
            catalogue.add_stop(name.as_str(), GeoPoint::new(*latitude, *longitude))?;
        }
    }
    for request in requests {
        if let BaseRequest::Bus { name, stops, is_roundtrip } = request {
            catalogue.add_route(name.as_str(), stops.as_slice(), *is_roundtrip)?;
        }
    }
    for request in requests {
        if let BaseRequest::Stop { name, road_distances, .. } = request {
            for (to, &meters) in road_distances {
                catalogue.set_distance(name, to, meters)?;
            }
        }
    }
    Ok(())
}

/// Load the document's network, build the facade, and answer every stat
/// request in order.
pub fn process_document(document: &TransitDocument) -> QueryResult<Vec<StatResponse>> {
    let mut catalogue = Catalogue::new();
    apply_base_requests(&mut catalogue, &document.base_requests)?;
    let facade = QueryFacade::build(catalogue, document.routing_settings)?;
    facade.answer_all(&document.stat_requests)
}
