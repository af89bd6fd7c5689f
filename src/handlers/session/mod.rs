//! Session issuance handlers

mod cookie;
mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Session routes (never gated)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(handler::issue_token))
        .route("/logout", get(handler::logout))
}
