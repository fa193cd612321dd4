//! Error types.
//!
//! [`GenerationError`] covers everything that can go wrong talking to the
//! upstream model; [`ApiError`] is what HTTP handlers return and renders as
//! a `{"detail": ...}` body.

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single call to the generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation service timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to reach generation service: {0}")]
    Transport(String),

    #[error("generation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response from generation service: {0}")]
    MalformedResponse(String),

    #[error("generation service returned no text")]
    EmptyResponse,
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Handler-level error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body did not decode into the expected shape.
    #[error("{detail}")]
    BadRequest { status: StatusCode, detail: String },

    /// The upstream call failed.
    #[error(transparent)]
    Upstream(#[from] GenerationError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { status, .. } => *status,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
