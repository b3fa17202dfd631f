//! `tc-graph` — generic weighted digraph and shortest-path routing.
//!
//! Nothing in this crate knows about stops or routes; `tc-router` layers the
//! transit semantics on top.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`weight`] | `Weight` trait (`u32`, `u64`, `f64`)                        |
//! | [`graph`]  | `DirectedWeightedGraph<W>`, `Edge<W>`                       |
//! | [`router`] | `PathRouter` trait, `PathInfo`, `DijkstraRouter`            |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                              |

pub mod error;
pub mod graph;
pub mod router;
pub mod weight;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{DirectedWeightedGraph, Edge};
pub use router::{DijkstraRouter, PathInfo, PathRouter};
pub use weight::Weight;
