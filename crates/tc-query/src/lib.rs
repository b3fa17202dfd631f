//! `tc-query` — the single read-only entry point of the transit catalogue.
//!
//! # Lifecycle
//!
//! ```text
//! base requests ──apply_base_requests──▶ Catalogue
//!                                           │  validate + build graph
//!                                           ▼
//! stat requests ──QueryFacade::answer_all──▶ StatResponse*
//! ```
//!
//! Loading is sequential; once a [`QueryFacade`] exists nothing is mutated
//! and the facade can be cloned into as many reader threads as needed.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`facade`]   | `QueryFacade`, `MapSnapshot`                             |
//! | [`requests`] | `BaseRequest`, `StatRequest`, `TransitDocument`, loading |
//! | [`response`] | `StatResponse`, `ResponseBody`, `ItineraryItem`          |
//! | [`error`]    | `QueryError`, `QueryResult<T>`                           |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `answer_all` runs on Rayon's thread pool.              |

pub mod error;
pub mod facade;
pub mod requests;
pub mod response;

#[cfg(test)]
mod tests;

pub use error::{QueryError, QueryResult};
pub use facade::{MapSnapshot, QueryFacade, RouteView, StopView};
pub use requests::{apply_base_requests, process_document, BaseRequest, StatRequest, TransitDocument};
pub use response::{ItineraryItem, ResponseBody, StatResponse};
