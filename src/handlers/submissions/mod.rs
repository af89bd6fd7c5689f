//! Submission handlers

mod handler;

pub use handler::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/submissions",
            get(handler::list_submissions).post(handler::create_submission),
        )
        // GET addresses submissions by owner email, PATCH by identifier
        .route(
            "/submissions/{key}",
            get(handler::list_submissions_by_email).patch(handler::update_submission),
        )
        .route("/pendings", get(handler::list_pending_submissions))
}
