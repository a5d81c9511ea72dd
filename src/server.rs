use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, error, info, management::TokenManager, spotify::SpotifyClient, warning};

/// State shared by every handler: the upstream client and the token store.
#[derive(Clone)]
pub struct AppState {
    pub spotify: Arc<SpotifyClient>,
    pub tokens: TokenManager,
}

/// Builds the full application router, including the best-effort token
/// refresh layer that runs before every route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::ping))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/logout", get(api::logout))
        .route("/get-access-token", get(api::get_access_token))
        .route("/refresh", get(api::refresh))
        .route("/whoami", get(api::whoami))
        .route("/get-album", get(api::get_album))
        .route("/add-album", get(api::add_album))
        .route("/remove-album", get(api::remove_album))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            refresh_access_token,
        ))
        .with_state(state)
}

/// Keeps the stored access token alive.
///
/// When a refresh token is stored and the access token is stale, the refresh
/// is performed and awaited before the route handler runs, so the handler
/// observes the new pair. A failed refresh is logged and swallowed; the
/// request proceeds with whatever token is stored.
async fn refresh_access_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(refresh_token) = state.tokens.stale_refresh_token().await {
        match state.spotify.refresh(&refresh_token).await {
            Ok(token) => {
                state.tokens.set(token).await;
                info!("The access token has been refreshed!");
            }
            Err(e) => {
                warning!("Could not refresh access token [{}]", e);
            }
        }
    }

    next.run(request).await
}

pub async fn start_api_server(addr: &str, state: AppState) {
    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, router(state)).await {
        error!("Server error: {}", e);
    }
}
