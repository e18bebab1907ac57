use sea_orm::{
    sea_query::{Alias, Expr, Query},
    ConnectionTrait, DatabaseConnection, DbErr,
};
use serde_json::Value as Json;
use std::sync::{Mutex, PoisonError};

use crate::{connection::Connection, model::Row};

/// SeaORM-backed connection building one `INSERT` statement per row.
///
/// Borrows the caller's `DatabaseConnection`; the connection pool stays owned by the
/// caller, this type only remembers the id reported by its last insert.
pub struct SqlConnection<'a> {
    db: &'a DatabaseConnection,
    last_insert_id: Mutex<Option<i64>>,
}

impl<'a> SqlConnection<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            last_insert_id: Mutex::new(None),
        }
    }
}

/// Converts a mapped JSON value into a bindable database value.
///
/// Scalars map onto their native database types; arrays and objects are stored as JSON
/// text.
pub fn to_db_value(value: &Json) -> sea_orm::Value {
    match value {
        Json::Null => Option::<String>::None.into(),
        Json::Bool(b) => (*b).into(),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.into()
            } else if let Some(u) = n.as_u64() {
                u.into()
            } else {
                n.as_f64().into()
            }
        }
        Json::String(s) => s.clone().into(),
        other => other.to_string().into(),
    }
}

impl Connection for SqlConnection<'_> {
    async fn insert(&self, table: &str, row: &Row) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Alias::new(table));

        if row.is_empty() {
            insert.or_default_values();
        } else {
            insert.columns(row.columns().map(Alias::new));
            insert
                .values(row.iter().map(|(_, value)| Expr::val(to_db_value(value))))
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        let result = self.db.execute(&insert).await?;

        *self
            .last_insert_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = i64::try_from(result.last_insert_id()).ok();

        Ok(())
    }

    fn last_insert_id(&self) -> Option<i64> {
        *self
            .last_insert_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
