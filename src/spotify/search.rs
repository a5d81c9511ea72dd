use crate::error::ApiError;

use super::SpotifyClient;

impl SpotifyClient {
    /// Searches the catalog for a single album by artist and album name.
    ///
    /// Issues a typed album search (`q=album:{album} artist:{artist}`) with
    /// limit 1 and offset 0, and returns the raw response body for the
    /// handler to relay unchanged.
    pub async fn search_album(
        &self,
        access_token: &str,
        artist: &str,
        album: &str,
    ) -> Result<String, ApiError> {
        let query = format!("album:{album} artist:{artist}");
        let url = format!(
            "{api_url}/search?q={query}&type=album&limit=1&offset=0",
            api_url = self.api_url,
            query = urlencoding::encode(&query),
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::relay_body(response).await
    }
}
