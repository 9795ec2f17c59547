use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use feedback_types::api::{
    CreateFeedbackRequest, ErrorResponse, FeedbackListResponse, HealthResponse,
};
use feedback_types::models::{FeedbackRecord, MESSAGE_MAX_CHARS, NAME_MAX_CHARS};

use crate::store::FeedbackStore;

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: FeedbackStore,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Name and message are required")]
    MissingFields,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ── Handlers ────────────────────────────────────────────────────────────

/// GET /health — liveness/readiness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        time: Utc::now(),
    })
}

/// GET /api/feedback — full store contents, insertion order.
pub async fn list_feedback(State(state): State<AppState>) -> Json<FeedbackListResponse> {
    Json(FeedbackListResponse {
        feedback: state.store.list_all().await,
    })
}

/// POST /api/feedback — validate, truncate, append.
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(req): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackRecord>), ApiError> {
    let name = truncate_chars(coerce_to_string(&req.name).trim(), NAME_MAX_CHARS);
    let message = truncate_chars(coerce_to_string(&req.message).trim(), MESSAGE_MAX_CHARS);

    if name.is_empty() || message.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let record = state.store.append(name, message).await;
    info!("Saved feedback id={} name=\"{}\"", record.id, record.name);

    Ok((StatusCode::CREATED, Json(record)))
}

/// Strings pass through as-is; null becomes empty (and fails the required
/// check); anything else is rendered as its JSON text.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
