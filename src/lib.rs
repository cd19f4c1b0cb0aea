pub mod analytics;
pub mod commands;
pub mod error;
pub mod events;
pub mod form;
pub mod query;
pub mod seed;
pub mod store;
pub mod tags;
pub mod timestamp;
pub mod types;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::StoreError;
use crate::store::IncidentStore;
use crate::types::config::AppConfig;

/// Initialize structured logging with tracing.
/// Respects RUST_LOG env var; defaults to `info` level for safetywatch crate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("safetywatch=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Load `.env` if present, then read the config from the environment.
pub fn load_config() -> AppConfig {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "Failed to read .env file");
        }
    }
    AppConfig::from_env()
}

/// The session's incident store, seeded with demo data unless disabled.
pub fn initial_store(config: &AppConfig) -> Result<IncidentStore, StoreError> {
    if config.seed_demo_data {
        IncidentStore::seeded(seed::demo_incidents())
    } else {
        info!("Demo data disabled, starting with an empty store");
        Ok(IncidentStore::new())
    }
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    let config = load_config();
    let store = initial_store(&config).expect("Failed to seed incident store");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(store)
        .manage(commands::config::ConfigState::new(config))
        .invoke_handler(tauri::generate_handler![
            commands::incidents::incidents_list,
            commands::incidents::incidents_get,
            commands::incidents::incidents_create,
            commands::tags::tags_list,
            commands::tags::tags_suggest,
            commands::config::config_get,
            commands::config::config_update,
            analytics::dashboard_compute,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
