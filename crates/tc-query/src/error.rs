use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_router::RouterError;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("router error: {0}")]
    Router(#[from] RouterError),
}

pub type QueryResult<T> = Result<T, QueryError>;
