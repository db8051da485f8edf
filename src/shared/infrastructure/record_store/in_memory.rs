// In memory implementation of the RecordStore port.
//
// Records are kept as JSON documents, the way a jsonb column would hold them,
// and decoded on every load. A document that no longer decodes is reported
// as `RecordStoreError::Corrupt` instead of being skipped.

use crate::shared::infrastructure::record_store::{
    OwnedRecord, RecordStore, RecordStoreError, Versioned,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredDocument {
    owner_id: String,
    version: i64,
    document: serde_json::Value,
}

pub struct InMemoryRecordStore<R> {
    documents: RwLock<HashMap<String, StoredDocument>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
    _record: PhantomData<fn() -> R>,
}

impl<R> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            is_offline: false,
            delay_save_ms: AtomicU64::new(0),
            _record: PhantomData,
        }
    }
}

impl<R> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Holds every save for `ms` before it checks the version, widening the
    /// window in which two writers can race.
    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::SeqCst);
    }

    /// Stores a document as-is, bypassing encoding. Used to seed data that
    /// was written by an older schema.
    pub async fn put_raw(&self, id: &str, owner_id: &str, document: serde_json::Value) {
        let mut guard = self.documents.write().await;
        let version = guard.get(id).map(|d| d.version + 1).unwrap_or(1);
        guard.insert(
            id.to_string(),
            StoredDocument {
                owner_id: owner_id.to_string(),
                version,
                document,
            },
        );
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

fn encode<R: Serialize>(record: &R) -> Result<serde_json::Value, RecordStoreError> {
    serde_json::to_value(record).map_err(|e| RecordStoreError::Backend(e.to_string()))
}

fn decode<R: DeserializeOwned>(
    id: &str,
    document: &serde_json::Value,
) -> Result<R, RecordStoreError> {
    R::deserialize(document).map_err(|e| RecordStoreError::Corrupt {
        id: id.to_string(),
        reason: e.to_string(),
        document: document.clone(),
    })
}

#[async_trait::async_trait]
impl<R> RecordStore<R> for InMemoryRecordStore<R>
where
    R: OwnedRecord + Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn load(
        &self,
        id: &str,
        owner_id: &str,
    ) -> Result<Option<Versioned<R>>, RecordStoreError> {
        self.ensure_online()?;
        let guard = self.documents.read().await;
        match guard.get(id) {
            Some(stored) if stored.owner_id == owner_id => Ok(Some(Versioned {
                record: decode(id, &stored.document)?,
                version: stored.version,
            })),
            _ => Ok(None),
        }
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<R>, RecordStoreError> {
        self.ensure_online()?;
        let guard = self.documents.read().await;
        guard
            .iter()
            .filter(|(_, stored)| stored.owner_id == owner_id)
            .map(|(id, stored)| decode(id, &stored.document))
            .collect()
    }

    async fn insert(&self, record: &R) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        let document = encode(record)?;
        let mut guard = self.documents.write().await;
        if guard.contains_key(record.record_id()) {
            return Err(RecordStoreError::Duplicate {
                id: record.record_id().to_string(),
            });
        }
        guard.insert(
            record.record_id().to_string(),
            StoredDocument {
                owner_id: record.owner_id().to_string(),
                version: 1,
                document,
            },
        );
        Ok(())
    }

    async fn save(&self, record: &R, expected_version: i64) -> Result<i64, RecordStoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let document = encode(record)?;
        let mut guard = self.documents.write().await;
        let actual = guard
            .get(record.record_id())
            .filter(|stored| stored.owner_id == record.owner_id())
            .map(|stored| stored.version)
            .unwrap_or(0);
        if actual != expected_version {
            return Err(RecordStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        let version = actual + 1;
        guard.insert(
            record.record_id().to_string(),
            StoredDocument {
                owner_id: record.owner_id().to_string(),
                version,
                document,
            },
        );
        Ok(version)
    }

    async fn delete(&self, id: &str, owner_id: &str) -> Result<bool, RecordStoreError> {
        self.ensure_online()?;
        let mut guard = self.documents.write().await;
        if guard.get(id).is_some_and(|stored| stored.owner_id == owner_id) {
            guard.remove(id);
            return Ok(true);
        }
        Ok(false)
    }
}
