use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe used by the frontend to check the backend is up.
pub async fn ping() -> &'static str {
    "pong"
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
