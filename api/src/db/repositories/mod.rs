// Database repository management

mod attraction_repository;
mod like_repository;

pub use attraction_repository::AttractionRepository;
pub use like_repository::LikeRepository;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Container for all database repositories
pub struct Repositories {
    pub attraction: AttractionRepository,
    pub like: LikeRepository,
    conn: Arc<DatabaseConnection>,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: impl Into<Arc<DatabaseConnection>>) -> Self {
        let conn = conn.into();
        Repositories {
            attraction: AttractionRepository::new(conn.clone()),
            like: LikeRepository::new(conn.clone()),
            conn,
        }
    }

    /// Returns the shared connection, for raw probes such as the health check
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
