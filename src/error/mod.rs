//! Error types for the entity mapper.
//!
//! `MapperError` is the single error type surfaced by `EntityMapper` operations. Row-level
//! failures (shape, translation, insert) are returned immediately and are never retried;
//! rows inserted before the failure stay committed.

pub mod config;
pub mod transform;

use thiserror::Error;

use crate::error::{config::ConfigError, transform::TransformError};

/// Top-level mapper error type.
#[derive(Error, Debug)]
pub enum MapperError {
    /// A data row does not have the same number of cells as the header.
    ///
    /// # Fields
    /// - `row` - 1-based index of the offending data row (the header is row 0)
    /// - `expected` - Number of header columns
    /// - `actual` - Number of cells in the data row
    #[error("Row {row} has {actual} values but the header has {expected} columns")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The translation registry has no transformation registered under this name.
    #[error("Unknown data translation '{0}'")]
    UnknownTranslation(String),

    /// A transformation was resolved but rejected the column's value.
    #[error("Failed to translate column '{column}': {source}")]
    Transform {
        /// Database column whose value was being transformed
        column: String,
        /// The underlying transformer error
        #[source]
        source: TransformError,
    },

    /// The database rejected the insert.
    #[error(transparent)]
    Insert(#[from] sea_orm::DbErr),

    /// `create` was called before a table name was configured.
    #[error("No table name configured for entity '{0}'")]
    NotConfigured(String),

    /// Updating rows from scenario data is part of the contract but has no semantics.
    #[error("Updating '{0}' rows from table data is not supported")]
    UpdateNotSupported(String),

    /// Mapper options could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
