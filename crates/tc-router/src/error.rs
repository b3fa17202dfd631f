//! Router error type.

use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_core::CoreError;
use tc_graph::GraphError;

/// Errors raised while building the transit graph.  Queries never fail;
/// an unreachable destination is `None`.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("{count} active stops exceed the transit graph's vertex id range")]
    TooManyStops { count: usize },

    #[error("numeric overflow while accumulating a run of route {route:?}")]
    NumericOverflow { route: String },
}

pub type RouterResult<T> = Result<T, RouterError>;
