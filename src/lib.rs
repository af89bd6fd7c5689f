//! StudyBuddy - Assignment Submission Backend
//!
//! A thin HTTP gateway over a document store holding two collections,
//! `assignments` and `submissions`, plus cookie-carried session tokens.
//!
//! # Architecture
//!
//! - **Handlers**: one store call per route
//! - **Middleware**: the session gate and CORS policy
//! - **Services**: session token signing and verification
//! - **Db**: the per-collection accessor and its store backends
//! - **Models**: schemaless documents and write acknowledgements

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult, AuthError, StoreError};
pub use state::AppState;
