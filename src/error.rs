//! Error taxonomy and HTTP status mapping.
//!
//! Every handler failure funnels into [`ApiError`]. The mapping mirrors what
//! the frontend expects: upstream 401s surface as 401 "Unauthorized", any
//! other upstream or transport failure becomes a generic 500, and missing
//! query parameters are rejected with a 400 before anything is sent upstream.
//! The original error detail is only ever logged server-side.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::warning;

/// Errors produced while serving a proxied request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter was absent from the request.
    #[error("missing query parameter: {0}")]
    MissingParameter(&'static str),

    /// The upstream API answered with a non-success status.
    #[error("upstream error {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    /// The request needs a user token but none is stored.
    #[error("no access token available, login first")]
    NotAuthenticated,

    /// Transport-level failure talking to the upstream API.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                format!("Missing query parameter: {name}"),
            )
                .into_response(),
            ApiError::NotAuthenticated => {
                (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
            }
            ApiError::Upstream { status, ref body } if status == StatusCode::UNAUTHORIZED => {
                warning!("Something went wrong! [{} {}]", status, body);
                (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
            }
            other => {
                warning!("Something went wrong! [{}]", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
