//! Cross-origin policy

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::config::{ConfigError, CorsConfig};

/// CORS layer admitting the configured origins with credentials
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidValue("CORS_ALLOWED_ORIGINS".to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_origins() {
        let config = CorsConfig {
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "https://learners.web.app".to_string(),
            ],
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_config_error() {
        let config = CorsConfig {
            allowed_origins: vec!["http://bad\norigin".to_string()],
        };
        assert!(matches!(
            cors_layer(&config),
            Err(ConfigError::InvalidValue(name)) if name == "CORS_ALLOWED_ORIGINS"
        ));
    }
}
