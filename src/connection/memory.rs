use sea_orm::DbErr;
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{connection::Connection, model::Row};

#[derive(Default)]
struct MemoryState {
    tables: BTreeMap<String, Vec<(i64, Row)>>,
    next_ids: BTreeMap<String, i64>,
    last_insert_id: Option<i64>,
    inserts: usize,
    fail_after: Option<usize>,
}

/// In-memory connection recording inserted rows.
///
/// Each table has its own id sequence starting at 1, matching SQLite rowid assignment for a
/// fresh table. Failures can be injected with `fail_after` to exercise partial inserts.
#[derive(Default)]
pub struct MemoryConnection {
    state: Mutex<MemoryState>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every insert after the first `count` successful ones fail.
    pub fn fail_after(self, count: usize) -> Self {
        self.state().fail_after = Some(count);
        self
    }

    /// Rows inserted into `table`, in insert order.
    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.inserted(table).into_iter().map(|(_, row)| row).collect()
    }

    /// Rows inserted into `table` together with their generated ids.
    pub fn inserted(&self, table: &str) -> Vec<(i64, Row)> {
        self.state().tables.get(table).cloned().unwrap_or_default()
    }

    /// Number of successful inserts across all tables.
    pub fn insert_count(&self) -> usize {
        self.state().inserts
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Connection for MemoryConnection {
    async fn insert(&self, table: &str, row: &Row) -> Result<(), DbErr> {
        let mut state = self.state();

        if state.fail_after.is_some_and(|limit| state.inserts >= limit) {
            return Err(DbErr::Custom(format!(
                "insert into '{}' rejected after {} rows",
                table, state.inserts
            )));
        }

        let next_id = state.next_ids.entry(table.to_string()).or_insert(1);
        let id = *next_id;
        *next_id += 1;

        state
            .tables
            .entry(table.to_string())
            .or_default()
            .push((id, row.clone()));
        state.last_insert_id = Some(id);
        state.inserts += 1;

        Ok(())
    }

    fn last_insert_id(&self) -> Option<i64> {
        self.state().last_insert_id
    }
}
