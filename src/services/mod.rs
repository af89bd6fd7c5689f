//! Business logic services

pub mod session_codec;

pub use session_codec::{SessionClaims, SessionCodec};
