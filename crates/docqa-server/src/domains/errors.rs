use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

use docqa_core::LookupError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("bad_request: {0}")]
    BadRequest(&'static str),
    #[error("store_unavailable")]
    StoreUnavailable,
    #[error("db_error")]
    DbError,
}

impl From<LookupError> for ServiceError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::StoreUnavailable(_) => Self::StoreUnavailable,
            LookupError::QuerySyntax(_) | LookupError::Store(_) => Self::DbError,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: &'static str,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            Self::BadRequest(code) => (StatusCode::BAD_REQUEST, code),
            Self::StoreUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
            Self::DbError => (StatusCode::INTERNAL_SERVER_ERROR, "db_error"),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
