//! Livepipe API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p pipe-api
//! ```
//!
//! Configuration is loaded from environment variables.

use pipe_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting livepipe API server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(port = config.api.port, "Configuration loaded");

    // Run the server
    pipe_api::run(config).await?;

    Ok(())
}
