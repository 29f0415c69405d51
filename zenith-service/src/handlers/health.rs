use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn ping() -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "message": "pong"
    }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "zenith-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
