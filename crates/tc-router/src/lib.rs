//! `tc-router` — fastest itineraries over the transit network.
//!
//! # Two vertices per stop
//!
//! Every active stop owns a *board* vertex (`2·slot`) and a *ride* vertex
//! (`2·slot + 1`).  A wait edge `board → ride` costs the bus wait time; ride
//! edges go from the ride vertex of a stop to the board vertex of every
//! later stop of the same bus run, weighted by cumulative road distance
//! over bus velocity.  A shortest path therefore alternates wait and ride
//! edges, one ride edge per bus boarded.
//!
//! # Crate layout
//!
//! | Module            | Contents                                           |
//! |-------------------|----------------------------------------------------|
//! | [`transit_graph`] | `TransitGraph`, `EdgeKind`, `TransitGraphBuilder`  |
//! | [`planner`]       | `TransitRouter`, `RoutePlan`, `RouteItem`          |
//! | [`error`]         | `RouterError`, `RouterResult<T>`                   |

pub mod error;
pub mod planner;
pub mod transit_graph;


pub use error::{RouterError, RouterResult};
pub use planner::{RouteItem, RoutePlan, TransitRouter};
pub use transit_graph::{EdgeKind, TransitGraph, TransitGraphBuilder};
