//! Assignment response DTOs

use serde::Serialize;

/// Filtered assignment count
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}
