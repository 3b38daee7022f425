//! HTTP API — axum router serving the matches endpoints for the browser UI.
//!
//! Any aggregation failure maps to a single 502 shape with a readable
//! message; the layer does not distinguish failure causes and never
//! retries.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::error::FetchError;
use crate::service::aggregator::MatchService;

/// Shared state accessible by all route handlers.
#[derive(Clone)]
pub struct AppState {
    service: Arc<MatchService>,
}

impl AppState {
    pub fn new(service: MatchService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn router(state: AppState, cors_origin: &str) -> Router {
    let mut cors = CorsLayer::new();
    match cors_origin.parse::<HeaderValue>() {
        Ok(origin) => {
            cors = cors.allow_origin(origin).allow_credentials(true);
        }
        Err(e) => {
            warn!(cors_origin, error = %e, "Invalid CORS origin — browser requests will be blocked");
        }
    }

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/matches", get(matches_handler))
        .route("/api/matches/{match_id}", get(match_detail_handler))
        .layer(cors)
        .with_state(state)
}

// -- Route Handlers --

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now(),
    }))
}

async fn matches_handler(State(state): State<AppState>) -> Response {
    match state.service.get_matches().await {
        Ok(body) => Json(body).into_response(),
        Err(e) => upstream_failure("Failed to fetch matches", e),
    }
}

/// `match_id` is forwarded verbatim; a positive-integer check is the UI's
/// concern and a nonsense id simply 404s upstream.
async fn match_detail_handler(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Response {
    match state.service.get_match_detail(&match_id).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => upstream_failure("Failed to fetch match detail", e),
    }
}

fn upstream_failure(message: &str, err: FetchError) -> Response {
    warn!(error = %err, message, "Request failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({
            "error": message,
            "details": err.to_string(),
        })),
    )
        .into_response()
}
