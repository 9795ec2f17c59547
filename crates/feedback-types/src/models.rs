use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum stored length of a submitter name, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Maximum stored length of a feedback message, in characters.
pub const MESSAGE_MAX_CHARS: usize = 1000;

/// A single stored feedback submission. Records are append-only: once in
/// the store they are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: u64,
    pub name: String,
    pub message: String,
    /// Set at insertion time. The seed record carries no timestamp.
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}
