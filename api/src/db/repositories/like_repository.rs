use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::DbError;
use crate::entity::{like, prelude::Like};

/// Repository for managing likes in the database
pub struct LikeRepository {
    conn: Arc<DatabaseConnection>,
}

impl LikeRepository {
    /// Creates a new like repository with the given database connection
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        LikeRepository { conn }
    }

    /// Inserts a like for an attraction. No existence check: a missing
    /// attraction surfaces as a foreign-key violation from the store.
    pub async fn add_like(&self, attraction_id: i32) -> Result<(), DbError> {
        let row = like::ActiveModel {
            attraction_id: sea_orm::ActiveValue::Set(attraction_id),
            ..Default::default()
        };

        Like::insert(row).exec(self.conn.as_ref()).await?;

        Ok(())
    }

    /// Removes at most one like for an attraction, oldest first.
    /// Returns whether a row was actually deleted.
    pub async fn remove_like(&self, attraction_id: i32) -> Result<bool, DbError> {
        let oldest = Like::find()
            .filter(like::Column::AttractionId.eq(attraction_id))
            .order_by_asc(like::Column::CreatedAt)
            .one(self.conn.as_ref())
            .await?;

        match oldest {
            Some(row) => {
                Like::delete_by_id(row.id).exec(self.conn.as_ref()).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Counts the number of likes for an attraction
    pub async fn get_likes_count(&self, attraction_id: i32) -> Result<i64, DbError> {
        let count = Like::find()
            .filter(like::Column::AttractionId.eq(attraction_id))
            .count(self.conn.as_ref())
            .await?;

        Ok(count as i64)
    }

    /// Batch get likes counts for multiple attractions (single query)
    pub async fn get_likes_counts_batch(
        &self,
        attraction_ids: &[i32],
    ) -> Result<HashMap<i32, i64>, DbError> {
        if attraction_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let likes = Like::find()
            .filter(like::Column::AttractionId.is_in(attraction_ids.to_vec()))
            .all(self.conn.as_ref())
            .await?;

        let mut counts: HashMap<i32, i64> = HashMap::new();
        for row in likes {
            *counts.entry(row.attraction_id).or_insert(0) += 1;
        }

        Ok(counts)
    }
}
