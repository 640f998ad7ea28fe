// Client configuration from environment variables

use dotenv::dotenv;
use std::env;

/// Configuration for the attractions CLI client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the attractions service
    pub api_url: String,
}

impl ClientConfig {
    /// Creates configuration instance from environment variables with defaults
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_url = env::var("API_HOST").unwrap_or_else(|_| "http://localhost:3001".to_string());

        Self { api_url }
    }
}
