use chrono::Datelike;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use work_hours_engine::api::{AppState, create_router};
use work_hours_engine::config::{ConfigLoader, Settings};
use work_hours_engine::store::ConfigStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    info!(
        config_dir = %settings.config_dir.display(),
        store = %settings.store_path.display(),
        "Starting work hours server"
    );

    let config = ConfigLoader::load(&settings.config_dir).inspect_err(|e| {
        error!(error = %e, "Failed to load configuration");
    })?;
    let (first_year, last_year) = (config.calendar().first_year, config.calendar().last_year);
    info!(
        shifts = config.config().shifts().len(),
        first_year, last_year, "Configuration loaded"
    );
    let current_year = chrono::Local::now().year();
    if !(first_year..=last_year).contains(&current_year) {
        warn!(
            current_year,
            first_year,
            last_year,
            "Holiday calendar does not cover the current year"
        );
    }

    let store = ConfigStore::open(&settings.store_path).inspect_err(|e| {
        error!(error = %e, "Failed to open store");
    })?;

    let router = create_router(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    info!(addr = %settings.addr, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
