// Configuration management from environment variables

use dotenv::dotenv;
use std::env;

/// Configuration settings for the Attractions API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Database configuration
    pub database_url: String,
    pub db_pool_max: u32,

    // When set, an absent attraction id answers 404 instead of the
    // historical 200 + `ok:false` payload.
    pub not_found_as_404: bool,
}

impl ApiConfig {
    /// Creates configuration instance from environment variables with defaults
    pub fn from_env() -> Self {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .unwrap_or(3001);

        // DATABASE_URL wins; otherwise the URL is composed from the
        // individual DB_* variables.
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            Self::database_url_from_parts(
                &env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                &env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
                &env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                &env::var("DB_PASSWORD").unwrap_or_default(),
                &env::var("DB_NAME").unwrap_or_else(|_| "attractions".to_string()),
            )
        });

        let db_pool_max = env::var("DB_POOL_MAX")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let not_found_as_404 = env::var("NOT_FOUND_AS_404")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            host,
            port,
            database_url,
            db_pool_max,
            not_found_as_404,
        }
    }

    /// Composes a Postgres connection URL from its parts
    pub fn database_url_from_parts(
        host: &str,
        port: &str,
        user: &str,
        password: &str,
        name: &str,
    ) -> String {
        if password.is_empty() {
            format!("postgres://{}@{}:{}/{}", user, host, port, name)
        } else {
            format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
        }
    }

    /// Returns formatted server address string (host:port)
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_database_url_with_password() {
        let url = ApiConfig::database_url_from_parts("db", "5432", "app", "s3cret", "attractions");
        assert_eq!(url, "postgres://app:s3cret@db:5432/attractions");
    }

    #[test]
    fn composes_database_url_without_password() {
        let url = ApiConfig::database_url_from_parts("localhost", "5432", "postgres", "", "attractions");
        assert_eq!(url, "postgres://postgres@localhost:5432/attractions");
    }
}
