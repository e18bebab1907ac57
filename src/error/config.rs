use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Mapper options are not valid JSON or have the wrong shape.
    ///
    /// Every option is optional, so this only occurs for malformed documents or values of
    /// the wrong type (e.g. a number where a translation map is expected).
    #[error("Invalid mapper options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
