//! `tc-catalogue` — the transit catalogue store.
//!
//! Owns every stop, route, and directed road distance of the network and
//! answers identity lookups and aggregate statistics.  The store is filled
//! once during network load and treated as read-only afterwards.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`catalogue`] | `Catalogue`: arenas, name indexes, distance table     |
//! | [`model`]     | `Stop`, `Route`, `RouteStats`, `StopStats`            |
//! | [`stats`]     | Overflow-checked length and curvature accumulation    |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod catalogue;
pub mod error;
pub mod model;
pub mod stats;


pub use catalogue::{Catalogue, MAX_DISTANCE_M};
pub use error::{CatalogueError, CatalogueResult};
pub use model::{Route, RouteStats, Stop, StopStats};
