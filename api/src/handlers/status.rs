// Service banner endpoint handler implementation

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::models::StatusResponse;

/// Handler for GET / - Returns a static status object with the current time
pub async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Welcome to the Attractions API".to_string(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
