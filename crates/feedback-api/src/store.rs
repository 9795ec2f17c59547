use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use feedback_types::models::FeedbackRecord;

/// Ordered in-memory collection of feedback records. Append-only; contents
/// live exactly as long as the process. Cloning shares the underlying
/// storage.
#[derive(Clone)]
pub struct FeedbackStore {
    records: Arc<RwLock<Vec<FeedbackRecord>>>,
}

impl FeedbackStore {
    /// Empty store, no seed record. Used by tests that need a clean slate.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Store pre-populated with the "System" welcome record, as served
    /// immediately after startup. The seed carries no timestamp.
    pub fn with_seed() -> Self {
        let seed = FeedbackRecord {
            id: 1,
            name: "System".to_string(),
            message: "Welcome to the Feedback Board!".to_string(),
            created_at: None,
        };
        Self {
            records: Arc::new(RwLock::new(vec![seed])),
        }
    }

    /// Append a record. Inputs are assumed already validated and truncated.
    /// The id is computed and the record pushed under one write lock, so
    /// ids stay unique and strictly increasing under concurrent appends.
    pub async fn append(&self, name: String, message: String) -> FeedbackRecord {
        let mut records = self.records.write().await;
        let record = FeedbackRecord {
            id: records.len() as u64 + 1,
            name,
            message,
            created_at: Some(Utc::now()),
        };
        records.push(record.clone());
        record
    }

    /// Snapshot of all records in insertion order.
    pub async fn list_all(&self) -> Vec<FeedbackRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_store_holds_single_system_record() {
        let store = FeedbackStore::with_seed();
        let records = store.list_all().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name, "System");
        assert_eq!(records[0].message, "Welcome to the Feedback Board!");
        assert!(records[0].created_at.is_none());
    }

    #[tokio::test]
    async fn append_assigns_increasing_ids_and_timestamps() {
        let store = FeedbackStore::with_seed();
        let first = store.append("Alice".into(), "Great job!".into()).await;
        let second = store.append("Bob".into(), "Nice board".into()).await;

        assert_eq!(first.id, 2);
        assert_eq!(second.id, 3);
        assert!(first.created_at.is_some());
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = FeedbackStore::new();
        for i in 0..5 {
            store.append(format!("user{i}"), "hi".into()).await;
        }
        let records = store.list_all().await;
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(records[3].name, "user3");
    }

    #[tokio::test]
    async fn concurrent_appends_never_collide() {
        let store = FeedbackStore::with_seed();
        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(format!("user{i}"), "hello".into()).await
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(store.len().await, 21);
    }
}
