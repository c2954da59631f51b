//! Service metadata and liveness.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};

use crate::http::dtos::{HealthResponse, RootResponse};
use crate::http::state::AppState;

pub const FRAMEWORK: &str = "axum 0.7";

/// `GET /`
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the Users API",
        version: env!("CARGO_PKG_VERSION"),
        framework: FRAMEWORK,
    })
}

/// `GET /health`
///
/// ```json
/// { "status": "healthy", "timestamp": "2024-01-01T00:00:00.000Z", "uptime": 12.5 }
/// ```
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.uptime(),
    })
}
