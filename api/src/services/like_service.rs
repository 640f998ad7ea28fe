// Like/unlike business logic implementation

use crate::error::ApiResult;
use crate::handlers::AppState;

/// Inserts one like for the attraction and returns the updated count
pub async fn add_like(state: &AppState, attraction_id: i32) -> ApiResult<i64> {
    state.repositories.like.add_like(attraction_id).await?;

    let count = state
        .repositories
        .like
        .get_likes_count(attraction_id)
        .await?;

    Ok(count)
}

/// Removes at most one like for the attraction (oldest first). Succeeds
/// whether or not a like row existed.
pub async fn remove_like(state: &AppState, attraction_id: i32) -> ApiResult<()> {
    let removed = state.repositories.like.remove_like(attraction_id).await?;

    if !removed {
        tracing::debug!("no like rows to remove for attraction {}", attraction_id);
    }

    Ok(())
}
