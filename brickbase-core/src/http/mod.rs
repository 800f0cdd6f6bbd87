//! Read-only JSON HTTP surface for the public site
//!
//! Three endpoints: the flattened property listing, the search proxy
//! against the hosted index, and the in-process substring fallback.
//! Every failure is scoped to the request that caused it; handler
//! errors map to JSON error bodies, and a search-index outage degrades
//! to an empty hit list rather than a broken page.

pub mod routes;
pub mod server;

pub use server::serve;

use std::sync::Arc;

use crate::repo::{PropertyRepo, RepoError};
use crate::search::SearchIndex;
use crate::store::DocumentStore;

/// Shared state handed to every request handler
pub struct AppState {
    pub properties: PropertyRepo,
    pub index: Arc<dyn SearchIndex>,
}

impl AppState {
    pub fn new(store: Arc<DocumentStore>, index: Arc<dyn SearchIndex>) -> Self {
        Self { properties: PropertyRepo::new(store), index }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        ApiError::Internal(err.into())
    }
}

impl ApiError {
    pub fn status(&self) -> http::StatusCode {
        match self {
            ApiError::NotFound => http::StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => http::StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
