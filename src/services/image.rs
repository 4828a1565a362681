//! Image maintenance service
//!
//! Wraps the backend endpoint that garbage-collects stored photos no
//! member, event group, achievement or carousel entry refers to anymore.

use tracing::{info, warn};

use super::api::ApiClient;
use crate::utils::errors::Result;
use crate::utils::logging::{log_api_error, log_maintenance_action};

/// Path of the unused-image cleanup endpoint, relative to the base URL
pub const UNUSED_IMAGES_PATH: &str = "api/Image/unused-images";

/// Service for image housekeeping on the backend
#[derive(Clone, Debug)]
pub struct ImageService {
    api: ApiClient,
}

impl ImageService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Ask the backend to delete every image no entity references
    ///
    /// Issues exactly one DELETE with the session cookies attached. The
    /// backend reports nothing about what was removed, so success carries
    /// no payload. Failures are returned as is, never retried.
    pub async fn delete_unused_photos(&self) -> Result<()> {
        info!(base_url = %self.api.base_url(), "Deleting unused photos");

        if let Err(e) = self.api.delete(UNUSED_IMAGES_PATH).await {
            warn!(error = %e, "Unused photo cleanup failed");
            log_api_error("image", &e.to_string(), Some(UNUSED_IMAGES_PATH));
            return Err(e);
        }

        log_maintenance_action("delete_unused_photos", None);
        Ok(())
    }
}
