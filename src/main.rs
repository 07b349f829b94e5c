//! COVID Tracker - Main Entry Point

use covid_tracker::app::dashboard;
use covid_tracker::constants::CONFIG_FILE;
use covid_tracker::domain::config::AppConfig;
use covid_tracker::services::ServiceHub;
use covid_tracker::utils::config_store;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting COVID tracker...");

    let config = match config_store::load_config::<AppConfig>(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        }
    };

    let hub = match ServiceHub::new(&config.api) {
        Ok(hub) => hub,
        Err(e) => {
            tracing::error!("Failed to create service hub: {e}");
            return;
        }
    };

    hub.start();
    dashboard::run(&hub);
    hub.stop();
}
