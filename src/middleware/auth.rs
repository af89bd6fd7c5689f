//! Session gate middleware
//!
//! Requests pass only with a `token` cookie that verifies; the decoded
//! payload is attached to the request for handlers to extract.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    constants::SESSION_COOKIE,
    error::{AppError, AuthError},
    state::AppState,
};

/// Identity decoded from a verified session token
#[derive(Debug, Clone, PartialEq)]
pub struct SessionIdentity(pub Map<String, Value>);

impl<S> FromRequestParts<S> for SessionIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionIdentity>()
            .cloned()
            .ok_or(AppError::Auth(AuthError::Missing))
    }
}

/// Session gate
pub async fn session_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let jar = CookieJar::from_headers(request.headers());
    let Some(token) = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string()) else {
        debug!(path = %path, "Session rejected: no token cookie");
        return Err(AuthError::Missing.into());
    };

    let payload = state.sessions().verify(&token).map_err(|e| {
        debug!(path = %path, error = %e, "Session rejected: token verification failed");
        e
    })?;

    debug!(path = %path, "Session verified");
    request.extensions_mut().insert(SessionIdentity(payload));

    Ok(next.run(request).await)
}
