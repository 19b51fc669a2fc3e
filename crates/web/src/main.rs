use anyhow::Context;
use importer::{StravaClient, StravaImporter};
use std::sync::Arc;
use storage::Database;

mod app;
mod config;
mod error;
mod features;
mod middleware;
mod openapi;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::{AppState, StravaService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Runlog API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API keys configured; every protected endpoint will return 401");
    } else {
        tracing::info!("Loaded {} API key(s)", api_keys.len());
    }

    let strava = match config.strava() {
        Some(strava_config) => {
            let client = StravaClient::new(strava_config).context("Failed to build Strava client")?;
            tracing::info!("Strava import enabled");
            StravaService(Some(Arc::new(StravaImporter::new(client))))
        }
        None => {
            tracing::info!("Strava credentials not set; Strava import disabled");
            StravaService(None)
        }
    };

    let router = app::build_router(AppState {
        db,
        api_keys,
        strava,
    });

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, router).await?;

    Ok(())
}
