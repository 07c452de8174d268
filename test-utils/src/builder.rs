use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Either add individual entity tables or request the full migrated schema,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Tenant, War};
///
/// let test = TestBuilder::new()
///     .with_table(Tenant)
///     .with_table(War)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether to run the workspace migrations instead of raw table statements.
    migrations: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrations: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after their referenced
    /// tables. Entity-derived tables carry plain unique constraints but not the partial
    /// unique indexes created by migrations.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tenant and identity tables.
    ///
    /// Adds, in dependency order: Tenant, AppUser, Membership, Player.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_tenant_tables(self) -> Self {
        self.with_table(Tenant)
            .with_table(AppUser)
            .with_table(Membership)
            .with_table(Player)
    }

    /// Adds every table touched by war ingestion.
    ///
    /// Adds the tenant tables followed by War, WarParticipant and Attack.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_war_tables(self) -> Self {
        self.with_tenant_tables()
            .with_table(War)
            .with_table(WarParticipant)
            .with_table(Attack)
    }

    /// Builds the schema by running the workspace migrations.
    ///
    /// Required for tests that depend on the partial unique indexes on `war_call` and
    /// `ingestion_job`. Any tables added with `with_table()` are ignored.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and schema ready
    /// - `Err(TestError::Database)`- Failed to connect, create tables, or migrate
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrations {
            setup.with_migrations().await?;
        } else {
            setup.with_tables(self.tables).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
