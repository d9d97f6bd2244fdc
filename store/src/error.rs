use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("concurrent update conflict on key '{0}'")]
    Conflict(String),

    #[error("database is corrupted: {0}")]
    Corruption(String),
}
