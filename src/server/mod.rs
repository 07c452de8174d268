//! Backend for clan war ingestion and war call reservations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules for wars, calls, tenants, and players
//! - **Data Layer** (`data/`) - Database operations over the SeaORM entities
//! - **Model Layer** (`model/`) - Domain models, snapshots, and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Caller identity and permission checks
//!
//! # Ingestion
//!
//! - **Game API** (`coc/`) - `ClanDataSource` trait and its HTTP implementation
//! - **Scheduler** (`scheduler/`) - Cron tick that queues one job per active tenant
//! - **Ingestion** (`ingestion/`) - Durable job queue, retry policy, worker pool, and
//!   the merge of a current-war payload into storage
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database, and upstream client initialization
//! - **Router** (`router`) - Axum route configuration

pub mod coc;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod ingestion;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
