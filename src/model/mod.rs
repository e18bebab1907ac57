//! Data structures exchanged with the entity mapper.
//!
//! - `TableData` is the raw scenario table (header row plus string cells)
//! - `Row` is one fully materialized database row, ordered column by column
//! - `MapperOptions` is the optional configuration applied by `EntityMapper::configure`

pub mod options;
pub mod row;
pub mod table;

pub use options::MapperOptions;
pub use row::Row;
pub use table::TableData;
