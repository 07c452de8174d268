//! Warboard Test Utils
//!
//! Shared testing utilities for the warboard workspace. Provides a builder for test
//! contexts backed by in-memory SQLite databases, factories that insert entities with
//! sensible defaults, and fixtures of upstream API payloads.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//!
//! # Usage
//!
//! Raw entity tables are enough for most repository tests. Anything relying on the
//! partial unique indexes (war calls, the ingestion queue) needs the migrated schema:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_call_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_migrations().build().await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
