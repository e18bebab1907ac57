use thiserror::Error;

/// Errors raised by a data transformation when it cannot convert a value.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The value cannot be represented in the target type.
    ///
    /// # Fields
    /// - `value` - Textual form of the rejected value
    /// - `target` - Name of the type the transformation converts to
    #[error("Cannot convert '{value}' to {target}")]
    InvalidValue { value: String, target: &'static str },

    /// The value is valid text but failed to parse as JSON.
    #[error("Invalid JSON '{value}': {source}")]
    InvalidJson {
        value: String,
        #[source]
        source: serde_json::Error,
    },

    /// Free-form failure raised by a caller-registered transformation.
    #[error("{0}")]
    Custom(String),
}
