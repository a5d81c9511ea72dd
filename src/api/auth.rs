use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};

use crate::{
    error::ApiError,
    info,
    server::AppState,
    spotify::DEFAULT_SCOPES,
    success,
    types::TokenPairResponse,
};

use super::require_param;

/// Returns the authorization URL the frontend redirects the user to.
pub async fn login(State(state): State<AppState>) -> String {
    state.spotify.authorize_url(DEFAULT_SCOPES)
}

/// Forgets the stored token pair.
///
/// Local-only: Spotify's Accounts service has no revocation endpoint, so the
/// upstream token stays valid until it expires. Calling this without being
/// logged in is fine.
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.tokens.clear().await;
    info!("User logout");
    StatusCode::NO_CONTENT
}

/// Exchanges the authorization code from the OAuth callback for a token
/// pair, stores it, and relays the raw token endpoint response.
pub async fn get_access_token(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let code = require_param(&params, "code")?;

    let (token, body) = state.spotify.exchange_code(code).await?;
    state.tokens.set(token).await;
    success!("Access token obtained");

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// Refreshes the access token using a caller-supplied refresh token and
/// stores the resulting pair.
pub async fn refresh(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<TokenPairResponse>, ApiError> {
    let refresh_token = require_param(&params, "refresh_token")?;

    let token = state.spotify.refresh(refresh_token).await?;
    state.tokens.set(token.clone()).await;
    info!("The access token has been refreshed!");

    Ok(Json(TokenPairResponse {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
    }))
}
