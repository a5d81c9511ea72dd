use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use serde_json::Value;

use crate::{error::ApiError, types::Token};

use super::SpotifyClient;

/// Scopes requested during login. The frontend manages the user's album
/// library and playlists, so the list is fixed rather than caller-supplied.
pub const DEFAULT_SCOPES: &[&str] = &[
    "user-read-private",
    "user-read-email",
    "playlist-modify-private",
    "playlist-modify-public",
    "user-library-modify",
    "user-library-read",
    "user-follow-modify",
];

impl SpotifyClient {
    /// Constructs the authorization redirect URL for the given scopes.
    ///
    /// Pure string construction: scopes are joined with a single space and
    /// percent-encoded exactly once, as is the redirect URI. Given the same
    /// credentials and scope list the result is always identical.
    pub fn authorize_url(&self, scopes: &[&str]) -> String {
        let scope = scopes.join(" ");
        format!(
            "{auth_url}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}",
            auth_url = self.auth_url,
            client_id = self.credentials.client_id,
            scope = urlencoding::encode(&scope),
            redirect_uri = urlencoding::encode(&self.credentials.redirect_uri),
        )
    }

    /// Exchanges an authorization code for a token pair.
    ///
    /// POSTs an authorization-code grant to the token endpoint. Returns the
    /// parsed token together with the raw response body, which the handler
    /// relays to the caller unchanged.
    ///
    /// # Errors
    ///
    /// Non-2xx upstream responses become [`ApiError::Upstream`]; transport
    /// failures are propagated as [`ApiError::Http`].
    pub async fn exchange_code(&self, code: &str) -> Result<(Token, String), ApiError> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", &self.credentials.redirect_uri),
                ("client_id", &self.credentials.client_id),
                ("client_secret", &self.credentials.client_secret),
            ])
            .send()
            .await?;

        let body = Self::relay_body(response).await?;
        let json: Value = serde_json::from_str(&body).unwrap_or_default();

        let token = Token {
            access_token: json["access_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            refresh_token: json["refresh_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            scope: json["scope"].as_str().unwrap_or_default().to_string(),
            expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
            obtained_at: Utc::now().timestamp() as u64,
        };

        Ok((token, body))
    }

    /// Obtains a fresh access token from a refresh token.
    ///
    /// Uses the refresh-token grant with HTTP Basic client authentication.
    /// The upstream may omit a rotated refresh token from the response; in
    /// that case the supplied one stays valid and is carried over, so the
    /// returned pair is always complete.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Token, ApiError> {
        let basic = STANDARD.encode(format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.client_secret
        ));

        let response = self
            .http
            .post(&self.token_url)
            .header("Authorization", format!("Basic {basic}"))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;

        let body = Self::relay_body(response).await?;
        let json: Value = serde_json::from_str(&body).unwrap_or_default();

        Ok(Token {
            access_token: json["access_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            refresh_token: json["refresh_token"]
                .as_str()
                .unwrap_or(refresh_token)
                .to_string(),
            scope: json["scope"].as_str().unwrap_or_default().to_string(),
            expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}
