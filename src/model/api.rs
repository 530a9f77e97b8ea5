use serde::{Deserialize, Serialize};

/// The response body when an operation fails
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
