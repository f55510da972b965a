use axum::{routing, Json, Router};
use serde::Serialize;

pub fn router() -> Router<()> {
    Router::new().route("/health", routing::get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
}

// The delivery API offers no ping, so this only attests the HTTP layer.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { http: true })
}
