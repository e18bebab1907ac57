use sea_orm::sea_query::TableCreateStatement;

use crate::{config::TestConfig, context::TestContext, error::TestError, fixture};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add table statements, then call `build()` to create the configured test
/// context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_table(fixture::table::users())
///     .with_table(fixture::table::accounts())
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed, in order, during `build()`.
    tables: Vec<TableCreateStatement>,

    config: TestConfig,
}

impl TestBuilder {
    /// Creates a new test builder with no tables and the in-memory SQLite database.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            config: TestConfig::default(),
        }
    }

    /// Uses database settings from the environment instead of the in-memory default.
    ///
    /// # Returns
    /// - `Ok(Self)` - Builder using `TestConfig::from_env()`
    /// - `Err(TestError::Config)` - Environment settings are invalid
    pub fn from_env() -> Result<Self, TestError> {
        Ok(Self {
            tables: Vec::new(),
            config: TestConfig::from_env()?,
        })
    }

    /// Adds a table to the test database schema.
    ///
    /// Tables are created in the order they were added, so tables with foreign keys should
    /// be added after the tables they reference.
    pub fn with_table(mut self, table: TableCreateStatement) -> Self {
        self.tables.push(table);
        self
    }

    /// Adds the `users` and `accounts` fixture tables.
    pub fn with_fixture_tables(self) -> Self {
        self.with_table(fixture::table::users())
            .with_table(fixture::table::accounts())
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new(self.config);

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
