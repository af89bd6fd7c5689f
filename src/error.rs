//! Custom error types and handling
//!
//! `AuthError` comes from the session codec and gate, `StoreError` from the
//! document store, and `AppError` is what handlers return. Only `AppError`
//! knows how to become an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::constants::UNAUTHORIZED_MESSAGE;

/// Session token failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Missing session token")]
    Missing,

    #[error("Invalid session token")]
    Invalid,

    #[error("Session token expired")]
    Expired,
}

/// Document store failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Document not found")]
    NotFound,

    #[error("Malformed identifier: {0}")]
    MalformedId(String),

    #[error("Store connection failure: {0}")]
    ConnectionFailure(String),
}

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Store details stay in the log
        let message = match &self {
            AppError::Auth(e) => {
                tracing::debug!("Session rejected: {}", e);
                UNAUTHORIZED_MESSAGE.to_string()
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {}", e);
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::ConnectionFailure(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::ConnectionFailure(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Invalid,
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_auth_errors_share_one_message() {
        for err in [AuthError::Missing, AuthError::Invalid, AuthError::Expired] {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({ "message": "unauthorized access" })
            );
        }
    }

    #[tokio::test]
    async fn test_store_errors_hide_details() {
        let response =
            AppError::from(StoreError::ConnectionFailure("pool timed out".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "internal server error");
        assert!(!body.to_string().contains("pool timed out"));
    }

    #[test]
    fn test_jwt_error_mapping() {
        use jsonwebtoken::errors::{Error, ErrorKind};

        assert_eq!(
            AuthError::from(Error::from(ErrorKind::ExpiredSignature)),
            AuthError::Expired
        );
        assert_eq!(
            AuthError::from(Error::from(ErrorKind::InvalidSignature)),
            AuthError::Invalid
        );
    }
}
