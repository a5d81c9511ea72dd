//! Configuration management for the proxy server.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. Spotify application credentials
//! are required and checked once at startup; endpoint URLs and the listen
//! address fall back to sensible defaults when unset.

use std::env;

/// Default Spotify authorization endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
/// Default Spotify token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Default Spotify Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
/// Default listen address when `SERVER_ADDRESS` is unset.
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8888";

/// Spotify application credentials, loaded once at process start.
///
/// Immutable for the lifetime of the process. The redirect URI must match
/// the one registered in the Spotify application settings.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Credentials {
    /// Builds credentials from the environment.
    ///
    /// Returns a descriptive error naming the first missing variable. The
    /// caller is expected to treat that as fatal; the server cannot do
    /// anything useful without a complete set of credentials.
    pub fn from_env() -> Result<Self, String> {
        Ok(Credentials {
            client_id: env::var("SPOTIFY_API_AUTH_CLIENT_ID")
                .map_err(|_| "SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string())?,
            client_secret: env::var("SPOTIFY_API_AUTH_CLIENT_SECRET")
                .map_err(|_| "SPOTIFY_API_AUTH_CLIENT_SECRET must be set".to_string())?,
            redirect_uri: env::var("SPOTIFY_API_REDIRECT_URI")
                .map_err(|_| "SPOTIFY_API_REDIRECT_URI must be set".to_string())?,
        })
    }
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// Best-effort: a missing file is fine, the environment itself may already
/// carry everything needed.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the address the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, e.g. `127.0.0.1:8888`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Reads `SPOTIFY_API_AUTH_URL`, defaulting to the real Spotify accounts
/// endpoint. Overridable so tests can point the client at a stub server.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, defaulting to the real Spotify token
/// endpoint.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, defaulting to the real Web API base.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
