use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::db::DbError;
use crate::entity::{attraction, prelude::Attraction};

/// Repository for attraction reads
pub struct AttractionRepository {
    conn: Arc<DatabaseConnection>,
}

impl AttractionRepository {
    /// Creates a new attraction repository
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        AttractionRepository { conn }
    }

    /// Gets all attractions, ordered by id ascending for a stable listing
    pub async fn get_all(&self) -> Result<Vec<attraction::Model>, DbError> {
        Attraction::find()
            .order_by_asc(attraction::Column::Id)
            .all(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }

    /// Gets one attraction by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<attraction::Model>, DbError> {
        Attraction::find_by_id(id)
            .one(self.conn.as_ref())
            .await
            .map_err(Into::into)
    }
}
