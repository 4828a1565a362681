//! Image upload model

use serde::{Deserialize, Serialize};

/// Result of a photo upload; the client treats both fields as opaque
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUploadResponse {
    pub file_name: String,
    pub url: String,
}
