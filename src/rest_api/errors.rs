//! # REST API Errors
//!
//! Uniform failure contract: every translation or store error surfaces as
//! HTTP 500 with `{"status":"error","error":<message>}`. Not-found is not an
//! error; handlers map it to a bare 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::graph::GraphError;
use crate::observability::Logger;

/// Result type for REST handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request body lacks the nested entity field (`movie`/`genre`)
    #[error("request body is missing the '{0}' field")]
    MissingPayload(&'static str),

    /// Error raised by the graph store
    #[error(transparent)]
    Store(#[from] GraphError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub error: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            status: "error",
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody::from(&self);
        Logger::error("REQUEST_FAILED", &[("error", &body.error)]);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
