//! HTTP middleware

pub mod auth;
pub mod cors;

pub use auth::{session_gate, SessionIdentity};
pub use cors::cors_layer;
