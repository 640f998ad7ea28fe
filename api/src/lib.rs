// Attractions API library: module tree and router assembly

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use std::time::Duration;

use axum::routing::{get, post, Router};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{
    add_like, get_attraction, get_attractions, health_check, remove_like, service_status,
    AppState,
};

/// Builds the application router with CORS and request tracing layers
pub fn app(state: AppState) -> Router {
    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/", get(service_status))
        .route("/health", get(health_check))
        .route("/attractions", get(get_attractions))
        .route("/attractions/{id}", get(get_attraction))
        .route(
            "/attractions/{id}/like",
            post(add_like).delete(remove_like),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
