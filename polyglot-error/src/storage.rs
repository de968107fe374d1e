use sea_orm::TransactionError;
use thiserror::Error;

/// Classifies cache-related errors to avoid ad-hoc strings.
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    /// Stored payload could not be (de)serialized
    #[error("cache payload malformed: {0}")]
    Malformed(String),
    /// Generic cache error message
    #[error("cache error: {0}")]
    Msg(String),
    /// TTL was zero or otherwise invalid
    #[error("cache ttl expired or invalid: {0}")]
    TTLExpired(String),
    /// Cache already exists
    #[error("cache already exists: {0}")]
    AlreadyExists(String),
    /// Cache not found
    #[error("cache not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(#[from] sea_orm::DbErr),

    /// Structured cache error kind for better classification
    #[error("{0}")]
    CacheKind(#[from] CacheError),
}

impl From<TransactionError<StorageError>> for StorageError {
    #[inline]
    fn from(e: TransactionError<StorageError>) -> Self {
        match e {
            TransactionError::Connection(db_err) => StorageError::from(db_err),
            TransactionError::Transaction(err) => err,
        }
    }
}
