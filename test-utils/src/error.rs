use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the test database or create its tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Test database settings could not be read from the environment.
    #[error("Invalid test configuration: {0}")]
    Config(String),
}
