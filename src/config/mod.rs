use std::env;

use crate::core::{AppError, Result};

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub session_secret: String,
    pub session_ttl_hours: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            security: SecurityConfig {
                session_secret: env::var("SESSION_SECRET").map_err(|_| {
                    AppError::Configuration("SESSION_SECRET not set".to_string())
                })?,
                session_ttl_hours: env::var("SESSION_TTL_HOURS")
                    .unwrap_or_else(|_| "24".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid SESSION_TTL_HOURS".to_string())
                    })?,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.security.session_secret.trim().is_empty() {
            return Err(AppError::Configuration(
                "Session secret must not be empty".to_string(),
            ));
        }

        if self.security.session_ttl_hours <= 0 {
            return Err(AppError::Configuration(
                "Session TTL must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
