use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{GuildSettings, Warning};
///
/// let test = TestBuilder::new()
///     .with_table(GuildSettings)
///     .with_table(Warning)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether to insert the bot status row after creating tables.
    seed_bot_status: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            seed_bot_status: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table used by moderation and configuration pipelines.
    ///
    /// Adds `GuildSettings`, `Warning` and `BotStatus`, and seeds the bot status row
    /// with maintenance off, the same state the application is in after startup.
    pub fn with_moderation_tables(mut self) -> Self {
        self.seed_bot_status = true;
        self.with_table(GuildSettings)
            .with_table(Warning)
            .with_table(BotStatus)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::with_schema(self.tables).await?;

        if let (true, Some(db)) = (self.seed_bot_status, test.db.as_ref()) {
            crate::factory::bot_status::create_bot_status(db, false).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
