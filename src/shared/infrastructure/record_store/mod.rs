use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("record {id} already exists")]
    Duplicate { id: String },

    #[error("record {id} is corrupt: {reason}")]
    Corrupt {
        id: String,
        reason: String,
        document: serde_json::Value,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

/// A record scoped to the user that owns it.
pub trait OwnedRecord {
    fn record_id(&self) -> &str;
    fn owner_id(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct Versioned<R> {
    pub record: R,
    pub version: i64,
}

/// Persistence port for owner-scoped records. Every lookup takes the owner,
/// so a record owned by someone else is reported as absent.
///
/// Writes use optimistic concurrency: `save` states the version it loaded and
/// fails with `VersionMismatch` if another writer got there first.
#[async_trait]
pub trait RecordStore<R>: Send + Sync
where
    R: OwnedRecord + Clone + Send + Sync + 'static,
{
    async fn load(&self, id: &str, owner_id: &str)
    -> Result<Option<Versioned<R>>, RecordStoreError>;

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<R>, RecordStoreError>;

    async fn insert(&self, record: &R) -> Result<(), RecordStoreError>;

    /// Returns the new version.
    async fn save(&self, record: &R, expected_version: i64) -> Result<i64, RecordStoreError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: &str, owner_id: &str) -> Result<bool, RecordStoreError>;
}

pub mod in_memory;
