//! Spotify Web API client.
//!
//! [`SpotifyClient`] is the single integration point with the upstream API.
//! It owns the application credentials, the three upstream endpoint URLs and
//! a shared HTTP client, and exposes one method per operation the proxy
//! forwards:
//!
//! - `auth` - authorize-URL construction, code exchange, token refresh
//! - `user` - current-user profile lookup
//! - `search` - album search
//! - `library` - saved-album add/remove
//!
//! Responses are relayed as the upstream produced them; any non-success
//! status is turned into [`ApiError::Upstream`] carrying the original status
//! and body. There are no retries and no caching.

mod auth;
mod library;
mod search;
mod user;

pub use auth::DEFAULT_SCOPES;

use reqwest::Client;

use crate::{config, config::Credentials, error::ApiError};

#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    credentials: Credentials,
    auth_url: String,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    /// Creates a client against the configured (or default) Spotify
    /// endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoints(
            credentials,
            config::spotify_apiauth_url(),
            config::spotify_apitoken_url(),
            config::spotify_apiurl(),
        )
    }

    /// Creates a client against explicit endpoint URLs. Used by tests to
    /// point the client at a stub upstream.
    pub fn with_endpoints(
        credentials: Credentials,
        auth_url: String,
        token_url: String,
        api_url: String,
    ) -> Self {
        SpotifyClient {
            http: Client::new(),
            credentials,
            auth_url,
            token_url,
            api_url,
        }
    }

    /// Reads a response body and maps non-success statuses to
    /// [`ApiError::Upstream`]. Successful empty bodies (the upstream acks
    /// library mutations with nothing) become an empty JSON object so the
    /// proxy always answers with JSON.
    async fn relay_body(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Upstream { status, body });
        }
        if body.trim().is_empty() {
            Ok("{}".to_string())
        } else {
            Ok(body)
        }
    }
}
