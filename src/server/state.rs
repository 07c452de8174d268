//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database connection and the
//! upstream client share their pools.

use sea_orm::DatabaseConnection;

use crate::server::{coc::CocApiClient, config::IngestionConfig};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Upstream game API client used for tenant registration and player linking.
    pub coc: CocApiClient,

    /// Queue tuning, needed to inspect the ingestion queue from the admin API.
    pub ingestion: IngestionConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, coc: CocApiClient, ingestion: IngestionConfig) -> Self {
        Self { db, coc, ingestion }
    }
}
