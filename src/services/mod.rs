//! Services module
//!
//! This module contains the backend API transport and the services built on it

pub mod api;
pub mod image;

// Re-export commonly used services
pub use api::ApiClient;
pub use image::{ImageService, UNUSED_IMAGES_PATH};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub api_client: ApiClient,
    pub image_service: ImageService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one API client
    pub fn new(settings: &Settings) -> Result<Self> {
        let api_client = ApiClient::new(&settings.api)?;
        let image_service = ImageService::new(api_client.clone());

        Ok(Self {
            api_client,
            image_service,
        })
    }
}
