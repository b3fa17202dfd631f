//! `tc-core` — foundational types for the transit catalogue.
//!
//! This crate is a dependency of every other `tc-*` crate.  It has no `tc-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `StopId`, `RouteId`, `VertexId`, `EdgeId`              |
//! | [`geo`]      | `GeoPoint`, great-circle distance                      |
//! | [`settings`] | `RoutingSettings` (bus wait time, bus velocity)        |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod settings;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, RouteId, StopId, VertexId};
pub use settings::RoutingSettings;

/// Road distance between two stops, in whole metres.
pub type Meters = u32;

/// Travel or waiting time, in minutes.
pub type Minutes = f64;
