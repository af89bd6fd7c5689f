//! Assignment handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Assignment routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/assignments",
            get(handler::list_assignments).post(handler::create_assignment),
        )
        .route(
            "/assignments/{id}",
            get(handler::get_assignment)
                .put(handler::upsert_assignment)
                .delete(handler::delete_assignment),
        )
        .route("/all-assignments", get(handler::list_assignments_page))
        .route("/assignments-count", get(handler::count_assignments))
}
