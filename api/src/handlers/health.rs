// Health check endpoint handler implementation

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::handlers::AppState;
use crate::models::HealthResponse;
use crate::services::health;

/// Handler for GET /health - Verifies the store answers a trivial round-trip.
/// Unlike the other endpoints this one reports the probe error message.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match health::check_database(state.repositories.connection()).await {
        Ok(db) => Json(HealthResponse {
            status: "ok".to_string(),
            db,
        })
        .into_response(),
        Err(e) => {
            tracing::error!("health probe failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
