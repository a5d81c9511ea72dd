use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Body for the saved-albums endpoints. The upstream API requires a list
/// even when a single album is added or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbumsRequest {
    pub ids: Vec<String>,
}

/// Reply of the `/refresh` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}
