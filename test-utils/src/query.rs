//! Read-back helpers for asserting on what tests wrote to the database.

use sea_orm::{
    sea_query::{Alias, Asterisk, Expr, Order, Query},
    ConnectionTrait, DatabaseConnection, DbErr, QueryResult,
};

/// Fetches every row of `table` ordered by its `id` column.
///
/// # Returns
/// - `Ok(Vec<QueryResult>)` - Rows; read columns with `try_get("", column)`
/// - `Err(DbErr)` - Query failed (e.g. unknown table)
pub async fn fetch_all(db: &DatabaseConnection, table: &str) -> Result<Vec<QueryResult>, DbErr> {
    let select = Query::select()
        .column(Asterisk)
        .from(Alias::new(table))
        .order_by(Alias::new("id"), Order::Asc)
        .to_owned();

    db.query_all(&select).await
}

/// Counts the rows of `table`.
pub async fn count(db: &DatabaseConnection, table: &str) -> Result<i64, DbErr> {
    let select = Query::select()
        .expr_as(Expr::cust("COUNT(*)"), Alias::new("count"))
        .from(Alias::new(table))
        .to_owned();

    match db.query_one(&select).await? {
        Some(row) => row.try_get::<i64>("", "count"),
        None => Ok(0),
    }
}
