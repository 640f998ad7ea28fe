// Handlers Module
// This module contains the API endpoint handlers

pub mod attractions;
pub mod health;
pub mod likes;
pub mod status;

pub use attractions::{get_attraction, get_attractions};
pub use health::health_check;
pub use likes::{add_like, remove_like};
pub use status::service_status;

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::Repositories;

/// Shared application context, built once at startup
pub struct AppContext {
    pub repositories: Repositories,
    pub config: ApiConfig,
}

/// Type alias for the application state injected into handlers
pub type AppState = Arc<AppContext>;
