use crate::storage::StorageError;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors surfaced by the service layer to its callers.
///
/// The variants form a closed taxonomy: every failure a caller can observe is
/// either correctable by the client (`NotFound`, `Conflict`, `OutOfSync`,
/// `Invalid`) or a server-side failure that is safe to retry (`Transient`).
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Locale tag does not resolve, or a referenced app/key/category is absent
    #[error("`{0}` not found")]
    NotFound(String),
    /// Uniqueness violation
    #[error("Conflict: `{0}`")]
    Conflict(String),
    /// Caller's timestamp is older than the stored one
    #[error("OutOfSync: `{0}`")]
    OutOfSync(String),
    /// Persistent store or cache call failed
    #[error("Transient: `{0}`")]
    Transient(#[from] StorageError),
    /// Malformed input
    #[error("Invalid: `{0}`")]
    Invalid(String),
}

impl ServiceError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "notFound",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::OutOfSync(_) => "outOfSync",
            ServiceError::Transient(_) => "transient",
            ServiceError::Invalid(_) => "invalid",
        }
    }

    /// Whether the caller can fix the request and try again.
    #[inline]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Transient(_))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    #[inline]
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Transient(StorageError::DBError(e))
    }
}

impl From<ValidationErrors> for ServiceError {
    #[inline]
    fn from(e: ValidationErrors) -> Self {
        ServiceError::Invalid(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(ServiceError::NotFound("locale".into()).is_client_error());
        assert!(ServiceError::Conflict("category".into()).is_client_error());
        assert!(ServiceError::OutOfSync("key".into()).is_client_error());
        assert!(ServiceError::Invalid("tag".into()).is_client_error());
        assert!(!ServiceError::Transient(StorageError::StorageUnavailable).is_client_error());
    }

    #[test]
    fn test_db_error_is_transient() {
        let err = ServiceError::from(sea_orm::DbErr::Custom("boom".into()));
        assert_eq!(err.code(), "transient");
        assert!(err.to_string().contains("boom"));
    }
}
