//! AssetFlow UI - Main Entry Point
//!
//! Usage: `assetflow-ui [ASSETS_URL]`

use assetflow_ui::app::application::{load_config, run_app};
use assetflow_ui::app::logging::init_logging;
use assetflow_ui::domain::AppConfig;

fn main() -> anyhow::Result<()> {
    let loaded = load_config();
    let config = match &loaded {
        Ok(loaded) => loaded.config.clone(),
        Err(_) => AppConfig::default(),
    };

    // Keep the guard alive so file logs are flushed on exit
    let _log_guard = init_logging(&config.log)?;

    tracing::info!("Starting AssetFlow UI...");
    match &loaded {
        Ok(loaded) if loaded.created => {
            tracing::info!(path = %loaded.path.display(), "Wrote default configuration")
        }
        Ok(loaded) => tracing::debug!(path = %loaded.path.display(), "Loaded configuration"),
        Err(e) => tracing::warn!(error = %e, "Using default configuration"),
    }

    let url = std::env::args().nth(1);
    run_app(&config, url)?;
    Ok(())
}
