use serde_json::Value;

use crate::error::ApiError;

use super::SpotifyClient;

impl SpotifyClient {
    /// Fetches the profile of the user the access token belongs to.
    ///
    /// Returns the parsed profile object so the handler can augment it with
    /// the current token pair before answering.
    pub async fn current_user(&self, access_token: &str) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(format!("{}/me", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        let body = Self::relay_body(response).await?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}
