use crate::{error::ApiError, types::SavedAlbumsRequest};

use super::SpotifyClient;

impl SpotifyClient {
    /// Adds albums to the user's library.
    ///
    /// The upstream endpoint takes a JSON list of ids even for a single
    /// album; callers wrap the one id accordingly.
    pub async fn save_albums(
        &self,
        access_token: &str,
        ids: Vec<String>,
    ) -> Result<String, ApiError> {
        let response = self
            .http
            .put(format!("{}/me/albums", self.api_url))
            .bearer_auth(access_token)
            .json(&SavedAlbumsRequest { ids })
            .send()
            .await?;

        Self::relay_body(response).await
    }

    /// Removes albums from the user's library.
    pub async fn remove_albums(
        &self,
        access_token: &str,
        ids: Vec<String>,
    ) -> Result<String, ApiError> {
        let response = self
            .http
            .delete(format!("{}/me/albums", self.api_url))
            .bearer_auth(access_token)
            .json(&SavedAlbumsRequest { ids })
            .send()
            .await?;

        Self::relay_body(response).await
    }
}
