//! Application configuration management
//!
//! Configuration is loaded from environment variables once at startup and is
//! immutable afterwards.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_CORS_ORIGIN, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_SESSION_EXPIRY_DAYS, MAX_SESSION_EXPIRY_DAYS,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub cors: CorsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `None` selects the in-memory store
    pub url: Option<String>,
    pub max_connections: u32,
}

/// Session token configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub expiry_days: i64,
    /// Attach the session gate to every data route
    pub require_session: bool,
}

/// Cross-origin configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            session: SessionConfig::from_env()?,
            cors: CorsConfig::from_env(),
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.server.environment == "production"
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            max_connections: parse_var(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
        })
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_days: check_expiry_days(parse_var(
                "JWT_EXPIRY_DAYS",
                DEFAULT_SESSION_EXPIRY_DAYS,
            )?)?,
            require_session: parse_var("REQUIRE_SESSION", false)?,
        })
    }
}

impl CorsConfig {
    fn from_env() -> Self {
        let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());
        Self {
            allowed_origins: split_origins(&raw),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => parse_value(name, &value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

/// Session lifetime must be between one day and `MAX_SESSION_EXPIRY_DAYS`
fn check_expiry_days(days: i64) -> Result<i64, ConfigError> {
    if (1..=MAX_SESSION_EXPIRY_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(ConfigError::InvalidValue("JWT_EXPIRY_DAYS".to_string()))
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
