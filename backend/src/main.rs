//! Main entry point for the profile card backend.
//!
//! This file initializes logging, loads configuration from the environment,
//! opens the profile store and serves the API with Axum until Ctrl-C.

mod api;
mod config;
mod database;
mod errors;
mod middleware;
mod services;

use std::process::ExitCode;
use std::sync::Arc;

use adapters::{InMemoryStore, ProfileStore};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::AppState;
use crate::config::Config;
use crate::errors::StartupError;
use crate::services::ProfileService;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    let store: Arc<dyn ProfileStore> = if config.uses_memory_store() {
        warn!("using in-memory profile store, profiles will not survive a restart");
        Arc::new(InMemoryStore::new())
    } else {
        let pool = database::connect(&config)?;
        database::init_schema(&pool).await;
        Arc::new(database::PgProfileStore::new(pool))
    };

    let app = api::app(AppState {
        profiles: ProfileService::new(store),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("could not listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
