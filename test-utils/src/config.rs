use crate::error::TestError;

/// Database URL used when `TEST_DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Database settings for test contexts.
pub struct TestConfig {
    pub database_url: String,
}

impl TestConfig {
    /// Reads test settings from the environment, loading a `.env` file first if present.
    ///
    /// # Returns
    /// - `Ok(TestConfig)` - `TEST_DATABASE_URL` or the in-memory SQLite default
    /// - `Err(TestError::Config)` - `TEST_DATABASE_URL` is set but not valid unicode
    pub fn from_env() -> Result<Self, TestError> {
        dotenvy::dotenv().ok();

        let database_url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(std::env::VarError::NotPresent) => DEFAULT_DATABASE_URL.to_string(),
            Err(err) => return Err(TestError::Config(format!("TEST_DATABASE_URL: {}", err))),
        };

        Ok(Self { database_url })
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}
