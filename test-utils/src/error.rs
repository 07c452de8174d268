use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database, creating tables, or running migrations failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
