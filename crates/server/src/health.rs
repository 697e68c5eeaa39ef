use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

/// Liveness probe. There is no backing store to check; a reachable
/// process is a healthy process.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
