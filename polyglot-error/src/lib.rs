pub mod init;
pub mod service;
pub mod storage;

use config::ConfigError;
use init::InitContextError;
use sea_orm::DbErr;
use serde_json::Error as SerdeJsonError;
use service::ServiceError;
use std::io::Error as IoError;
use storage::StorageError;
use thiserror::Error;

pub type PGResult<T, E = PGError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;
pub type ServiceResult<T, E = ServiceError> = Result<T, E>;

#[derive(Error, Debug)]
pub enum PGError {
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("{0}")]
    ServiceError(#[from] ServiceError),
}

impl From<String> for PGError {
    #[inline]
    fn from(e: String) -> Self {
        PGError::Msg(e)
    }
}

impl From<&str> for PGError {
    #[inline]
    fn from(e: &str) -> Self {
        PGError::Msg(e.to_string())
    }
}

impl From<DbErr> for PGError {
    #[inline]
    fn from(e: DbErr) -> Self {
        PGError::StorageError(StorageError::DBError(e))
    }
}
