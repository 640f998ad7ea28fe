// Handlers for like/unlike API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{LikeAddedResponse, LikeRemovedResponse};
use crate::services::like_service;

/// Handler for POST /attractions/{id}/like - Inserts one like row and
/// returns the updated count. No existence check: a missing attraction is
/// rejected by the store's foreign key and surfaces as the generic 500, and
/// a non-numeric id takes the same path since it cannot be typed into the
/// foreign-key column.
pub async fn add_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<LikeAddedResponse>> {
    let attraction_id = id
        .parse::<i32>()
        .map_err(|_| ApiError::Database(format!("invalid attraction id: {}", id)))?;

    let likes = like_service::add_like(&state, attraction_id).await?;

    Ok(Json(LikeAddedResponse {
        message: "Like added".to_string(),
        ok: true,
        likes,
    }))
}

/// Handler for DELETE /attractions/{id}/like - Removes at most one like row
/// (oldest first) and acknowledges regardless of whether one existed. A
/// non-numeric id matches zero rows.
pub async fn remove_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<LikeRemovedResponse>> {
    if let Ok(attraction_id) = id.parse::<i32>() {
        like_service::remove_like(&state, attraction_id).await?;
    }

    Ok(Json(LikeRemovedResponse {
        message: "Like removed".to_string(),
    }))
}
