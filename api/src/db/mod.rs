// Database access layer: pool, error type and repositories

pub mod pool;
pub mod repositories;

pub use pool::DbPool;
pub use repositories::Repositories;

use thiserror::Error;

/// Failures from the attractions store. Connectivity problems are kept
/// apart from statement failures so the health endpoint can report which
/// side broke; every other endpoint collapses both into a generic 500.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("store unreachable: {0}")]
    ConnectionError(String),

    #[error("store query failed: {0}")]
    QueryError(String),
}

impl From<sea_orm::DbErr> for DbError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(e) => DbError::ConnectionError(e.to_string()),
            sea_orm::DbErr::ConnectionAcquire(e) => DbError::ConnectionError(e.to_string()),
            other => DbError::QueryError(other.to_string()),
        }
    }
}
