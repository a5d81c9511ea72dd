use axum::{
    extract::State,
    response::Json,
};
use serde_json::Value;

use crate::{error::ApiError, server::AppState};

/// Returns the profile of the logged-in user, augmented with the stored
/// `access_token` and `refresh_token` so the frontend can observe both
/// alongside the profile data.
pub async fn whoami(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let token = state
        .tokens
        .current()
        .await
        .ok_or(ApiError::NotAuthenticated)?;

    let mut profile = state.spotify.current_user(&token.access_token).await?;
    if let Value::Object(ref mut fields) = profile {
        fields.insert("access_token".to_string(), Value::String(token.access_token));
        fields.insert(
            "refresh_token".to_string(),
            Value::String(token.refresh_token),
        );
    }

    Ok(Json(profile))
}
