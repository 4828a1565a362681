//! PLAIS API client
//!
//! Typed client for the backend of the PLAIS association website. This
//! library provides the data models exchanged with the backend (board,
//! members, events, articles, resources, achievements, bulletins), the
//! pagination envelope shared by list endpoints, and the image maintenance
//! call that prunes unreferenced photos.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ApiError, PlaisError, Result};

// Re-export main components for easy access
pub use services::{ApiClient, ImageService, ServiceFactory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
