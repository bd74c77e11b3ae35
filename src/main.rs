//! CyberFit Pro validation service - main entry point
//!
//! Reads JSON requests from stdin, one per line, and writes JSON responses to stdout.

use anyhow::Result;
use cyberfit_pro::{Config, ValidationService};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let fallback = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout responses)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        default_ddi = %config.default_ddi,
        invite_cooldown_secs = config.invite_cooldown_secs,
        "Starting CyberFit Pro validation service"
    );

    let service = ValidationService::from_config(&config);
    cyberfit_pro::server::run_stdio(service).await?;

    info!("Validation service shutdown complete");
    Ok(())
}
