use crate::shared::infrastructure::record_store::RecordStoreError;
use thiserror::Error;

/// Outcome of a use case handler that did not succeed. Inbound adapters map
/// each variant to a transport status.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error("record not found")]
    NotFound,

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}
