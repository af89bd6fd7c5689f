//! Session response DTOs

use serde::Serialize;

/// Acknowledgement for session issuance and logout
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
