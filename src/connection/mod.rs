//! Database connections rows are written through.
//!
//! The mapper only needs two capabilities from a database: insert one row into a named
//! table and report the id generated by the most recent insert. `SqlConnection` provides
//! them on top of a SeaORM connection; `MemoryConnection` keeps rows in memory for tests
//! that only care about what would have been written.

pub mod memory;
pub mod sql;

pub use memory::MemoryConnection;
pub use sql::SqlConnection;

use sea_orm::DbErr;

use crate::model::Row;

/// Connection capable of inserting mapped rows.
///
/// Implementations are driven by one writer at a time: `last_insert_id` must report the
/// id generated by the `insert` call that completed immediately before it.
#[allow(async_fn_in_trait)]
pub trait Connection {
    /// Inserts `row` into `table` as a single statement.
    ///
    /// # Returns
    /// - `Ok(())` - Row inserted
    /// - `Err(DbErr)` - Database rejected the insert (missing table, constraint violation, etc.)
    async fn insert(&self, table: &str, row: &Row) -> Result<(), DbErr>;

    /// Id generated by the most recent successful insert, `None` before the first insert.
    fn last_insert_id(&self) -> Option<i64>;
}
