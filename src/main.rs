//! PLAIS image maintenance
//!
//! Deletes photos the backend no longer references, then exits.

use anyhow::Context;
use tracing::{error, info};

use plais_client::{config::Settings, services::ServiceFactory, utils::logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!(version = plais_client::VERSION, "Starting {}", plais_client::info());

    let services = ServiceFactory::new(&settings)?;

    if let Err(e) = services.image_service.delete_unused_photos().await {
        error!(error = %e, severity = %e.severity(), "Unused photo cleanup failed");
        return Err(e.into());
    }

    info!("Unused photos deleted");
    Ok(())
}
