// Attraction-related business logic implementation

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::AttractionData;

/// Returns every attraction with its like count, ordered by id.
/// Counts come from one batched query over the listed ids.
pub async fn get_all_attractions(state: &AppState) -> ApiResult<Vec<AttractionData>> {
    let attractions = state.repositories.attraction.get_all().await?;

    let ids: Vec<i32> = attractions.iter().map(|a| a.id).collect();
    let counts = state.repositories.like.get_likes_counts_batch(&ids).await?;

    let rows = attractions
        .into_iter()
        .map(|model| {
            let likes = counts.get(&model.id).copied().unwrap_or(0);
            AttractionData::from_model(model, likes)
        })
        .collect();

    Ok(rows)
}

/// Returns one attraction with its like count, or None when the id matches
/// no row.
pub async fn get_attraction(state: &AppState, id: i32) -> ApiResult<Option<AttractionData>> {
    let attraction = state.repositories.attraction.get_by_id(id).await?;

    match attraction {
        Some(model) => {
            let likes = state.repositories.like.get_likes_count(model.id).await?;
            Ok(Some(AttractionData::from_model(model, likes)))
        }
        None => Ok(None),
    }
}
