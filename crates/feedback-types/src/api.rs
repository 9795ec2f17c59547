use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::FeedbackRecord;

// -- Health --

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub time: DateTime<Utc>,
}

// -- Feedback --

/// Candidate submission. Fields are raw JSON values so that non-string
/// input (numbers, booleans) can be coerced to text rather than rejected
/// by deserialization; missing fields default to null and fail the
/// required-field check downstream.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFeedbackRequest {
    #[serde(default)]
    pub name: serde_json::Value,
    #[serde(default)]
    pub message: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackListResponse {
    pub feedback: Vec<FeedbackRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
