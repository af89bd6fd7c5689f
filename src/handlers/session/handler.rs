//! Session handler implementations

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde_json::{Map, Value};

use crate::{error::AppResult, state::AppState};

use super::{
    cookie::{removal_cookie, session_cookie},
    response::SuccessResponse,
};

/// Sign the request body as the session identity and set the `token` cookie
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    let token = state.sessions().sign(payload)?;
    tracing::info!("Issued session token");

    let cookie = session_cookie(token, state.config().is_production());
    Ok((jar.add(cookie), Json(SuccessResponse::ok())))
}

/// Clear the `token` cookie, whether or not the client sent one
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    let cookie = removal_cookie(state.config().is_production());
    (jar.add(cookie), Json(SuccessResponse::ok()))
}
