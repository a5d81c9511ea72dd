use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};

use crate::{error::ApiError, server::AppState};

use super::require_param;

/// Searches the catalog for a single album and relays the upstream search
/// result unchanged.
pub async fn get_album(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let artist = require_param(&params, "artist")?;
    let album = require_param(&params, "album")?;

    let access_token = state
        .tokens
        .access_token()
        .await
        .ok_or(ApiError::NotAuthenticated)?;
    let body = state.spotify.search_album(&access_token, artist, album).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// Saves the album with the given id to the user's library.
pub async fn add_album(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let id = require_param(&params, "id")?;

    let access_token = state
        .tokens
        .access_token()
        .await
        .ok_or(ApiError::NotAuthenticated)?;
    let body = state
        .spotify
        .save_albums(&access_token, vec![id.to_string()])
        .await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// Removes the album with the given id from the user's library.
pub async fn remove_album(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let id = require_param(&params, "id")?;

    let access_token = state
        .tokens
        .access_token()
        .await
        .ok_or(ApiError::NotAuthenticated)?;
    let body = state
        .spotify
        .remove_albums(&access_token, vec![id.to_string()])
        .await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
