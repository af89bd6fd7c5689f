//! Application-wide constants
//!
//! Constants are grouped by their purpose.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Plain-text body served from `/`
pub const ROOT_GREETING: &str = "studybuddy server is running";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Collection names
pub mod collections {
    pub const ASSIGNMENTS: &str = "assignments";
    pub const SUBMISSIONS: &str = "submissions";
}

/// Field that carries a document's identifier in every response
pub const ID_FIELD: &str = "_id";

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

/// Default session lifetime in days
pub const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

/// Longest accepted session lifetime in days
pub const MAX_SESSION_EXPIRY_DAYS: i64 = 365;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// Message returned with every rejected session
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";

/// Default allowed CORS origin
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

// =============================================================================
// DOCUMENT FIELDS
// =============================================================================

/// Assignment field used by the listing and count filters
pub const LEVEL_FIELD: &str = "level";

/// Submission owner field
pub const EMAIL_FIELD: &str = "email";

/// Submission status field
pub const STATUS_FIELD: &str = "status";

/// Submission statuses
pub mod statuses {
    pub const PENDING: &str = "pending";
}
