//! Catalogue error type.
//!
//! Every variant is a hard error: raised during load it means the network
//! is malformed and loading must stop.  Queries that merely miss a name
//! return `None` instead.

use thiserror::Error;

use tc_core::{GeoPoint, Meters};

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("no road distance recorded between {from:?} and {to:?} in either direction")]
    NoSuchDistance { from: String, to: String },

    #[error("numeric overflow while accumulating the length of route {route:?}")]
    NumericOverflow { route: String },

    #[error("distance {meters} m from {from:?} to {to:?} is outside 1..={max}")]
    DistanceOutOfRange {
        from:   String,
        to:     String,
        meters: Meters,
        max:    Meters,
    },

    #[error("stop {stop:?} has invalid coordinates {coordinates}")]
    InvalidCoordinates { stop: String, coordinates: GeoPoint },

    #[error("{arena} arena is full at {count} entries")]
    CapacityExceeded { arena: &'static str, count: usize },

    #[error("stop {0:?} is already defined")]
    DuplicateStop(String),

    #[error("route {0:?} is already defined")]
    DuplicateRoute(String),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
