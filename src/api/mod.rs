//! HTTP handlers for the proxy endpoints.
//!
//! Each submodule covers one endpoint group and every handler follows the
//! same shape: extract and validate query parameters, call the
//! [`SpotifyClient`](crate::spotify::SpotifyClient) from the shared state,
//! and relay the upstream response. Failures are returned as
//! [`ApiError`](crate::error::ApiError), which maps itself onto the HTTP
//! status the frontend expects.
//!
//! # Endpoints
//!
//! - [`ping`] / [`health`] - liveness probes
//! - [`login`], [`logout`], [`get_access_token`], [`refresh`] - OAuth
//!   lifecycle
//! - [`whoami`] - current-user profile plus the stored token pair
//! - [`get_album`], [`add_album`], [`remove_album`] - album search and
//!   library mutation

mod albums;
mod auth;
mod health;
mod user;

pub use albums::{add_album, get_album, remove_album};
pub use auth::{get_access_token, login, logout, refresh};
pub use health::{health, ping};
pub use user::whoami;

use std::collections::HashMap;

use crate::error::ApiError;

/// Looks up a required query parameter, rejecting the request with a 400
/// when it is absent.
fn require_param<'a>(
    params: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, ApiError> {
    params
        .get(name)
        .map(|value| value.as_str())
        .ok_or(ApiError::MissingParameter(name))
}
