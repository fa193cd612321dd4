//! Triage HTTP API.
//!
//! - POST /get_response
//! - GET /health
//! - GET /metrics

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::DEFAULT_BANK_NAME;
use crate::error::ApiError;
use crate::generation::adapter::GenerationAdapter;
use crate::generation::TextGenerator;
use crate::server::metrics::{Metrics, Outcome};

/// Application state shared across handlers.
pub struct AppState {
    pub adapter: GenerationAdapter,
    pub metrics: Metrics,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> prometheus::Result<Self> {
        Ok(Self {
            adapter: GenerationAdapter::new(generator),
            metrics: Metrics::new()?,
            start_time: Instant::now(),
        })
    }
}

/// Build the axum router with all API routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/get_response", post(get_response))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─── Request/Response Types ────────────────────────────────────────────────

/// Triage request.
#[derive(Debug, Serialize, Deserialize)]
pub struct TriageRequest {
    pub tweet: String,
    #[serde(default = "default_bank_name")]
    pub bank_name: String,
}

fn default_bank_name() -> String {
    DEFAULT_BANK_NAME.to_string()
}

/// Triage response: the model's reply, untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct TriageResponse {
    pub response: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub uptime_secs: u64,
}

// ─── Route Handlers ────────────────────────────────────────────────────────

async fn get_response(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TriageRequest>, JsonRejection>,
) -> Result<Json<TriageResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected triage request");
        state.metrics.record_request(Outcome::Rejected);
        ApiError::from(rejection)
    })?;

    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        bank_name = req.bank_name,
        tweet_len = req.tweet.len(),
        "Triage request"
    );

    let started = Instant::now();
    let result = state.adapter.assess(&req.tweet, &req.bank_name).await;
    state.metrics.observe_upstream(started.elapsed().as_secs_f64());

    match result {
        Ok(text) => {
            state.metrics.record_request(Outcome::Ok);
            info!(
                request_id = %request_id,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Triage complete"
            );
            Ok(Json(TriageResponse { response: text }))
        }
        Err(e) => {
            state.metrics.record_request(Outcome::UpstreamError);
            error!(request_id = %request_id, error = %e, "Generation failed");
            Err(e.into())
        }
    }
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.adapter.model().to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.render() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_name_defaults_to_zenith() {
        let req: TriageRequest = serde_json::from_str(r#"{"tweet":"hi"}"#).unwrap();
        assert_eq!(req.bank_name, "Zenith");
    }

    #[test]
    fn test_tweet_is_required() {
        assert!(serde_json::from_str::<TriageRequest>(r#"{"bank_name":"Acme"}"#).is_err());
        assert!(serde_json::from_str::<TriageRequest>(r#"{"tweet":42}"#).is_err());
    }

    #[test]
    fn test_empty_tweet_is_accepted() {
        let req: TriageRequest = serde_json::from_str(r#"{"tweet":""}"#).unwrap();
        assert_eq!(req.tweet, "");
    }
}
