//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod assignments;
pub mod health;
pub mod session;
pub mod submissions;

use axum::{middleware, Router};

use crate::{middleware::session_gate, state::AppState};

/// Create all routes.
///
/// Data routes get the session gate only when `REQUIRE_SESSION` is set;
/// health and session routes are always open.
pub fn routes(state: &AppState) -> Router<AppState> {
    let data_routes = Router::new()
        .merge(assignments::routes())
        .merge(submissions::routes());

    let data_routes = if state.config().session.require_session {
        data_routes.route_layer(middleware::from_fn_with_state(state.clone(), session_gate))
    } else {
        data_routes
    };

    Router::new()
        .merge(health::routes())
        .merge(session::routes())
        .merge(data_routes)
}
