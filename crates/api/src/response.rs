//! Shared response envelope types.

use serde::Serialize;

/// `{ "success": true }` acknowledgement returned by the update, delete
/// and workflow endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
