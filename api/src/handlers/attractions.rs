// Handlers for attraction-related API endpoints

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{AttractionData, AttractionNotFound};
use crate::services::attraction_service;

/// Handler for GET /attractions - Returns all attractions with like counts
pub async fn get_attractions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AttractionData>>> {
    let rows = attraction_service::get_all_attractions(&state).await?;
    Ok(Json(rows))
}

/// Handler for GET /attractions/{id} - Returns one attraction with its like
/// count. The id arrives as opaque text; anything non-numeric matches zero
/// rows. An absent id answers 200 with an `ok:false` payload unless the
/// NOT_FOUND_AS_404 toggle is set.
pub async fn get_attraction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let found = match id.parse::<i32>() {
        Ok(numeric_id) => attraction_service::get_attraction(&state, numeric_id).await?,
        Err(_) => None,
    };

    match found {
        Some(row) => Ok(Json(row).into_response()),
        None => {
            tracing::info!("no attraction found with id: {}", id);
            if state.config.not_found_as_404 {
                Err(ApiError::NotFound(format!(
                    "No attraction found with id: {}",
                    id
                )))
            } else {
                Ok(Json(AttractionNotFound::new(&id)).into_response())
            }
        }
    }
}
