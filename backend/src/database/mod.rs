//! Module for database connection setup and the PostgreSQL profile store.
//!
//! This module is responsible for building the connection pool, creating the
//! `profiles` table on startup and exposing it through the
//! `adapters::ProfileStore` trait.

pub mod models;
pub mod queries;

use adapters::{NewProfile, Profile, ProfileStore, StoreError};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

use crate::config::Config;

/// Builds the connection pool without opening a connection.
///
/// Connections are established on first use; establishing one must finish
/// within `config.connect_timeout` or the acquiring request fails.
pub fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect_lazy(&config.database_url)
}

/// Creates the profile table if needed. A failure is logged and startup
/// continues; requests will report the store as unavailable until it recovers.
pub async fn init_schema(pool: &PgPool) {
    match try_init_schema(pool).await {
        Ok(()) => info!("profile schema ready"),
        Err(err) => warn!("could not initialize database: {err}"),
    }
}

async fn try_init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    queries::create_schema(&mut *conn).await
}

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn unavailable(err: sqlx::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

// Each operation holds its pooled connection only for its own duration; the
// guard returns it to the pool on drop, including on the error paths.
#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn insert_profile(&self, id: &str, profile: &NewProfile) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await.map_err(unavailable)?;
        queries::insert_profile(&mut *conn, id, profile)
            .await
            .map_err(unavailable)
    }

    async fn find_profile(&self, id: &str) -> Result<Profile, StoreError> {
        let mut conn = self.pool.acquire().await.map_err(unavailable)?;
        queries::select_profile(&mut *conn, id)
            .await
            .map_err(unavailable)?
            .map(Profile::from)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
