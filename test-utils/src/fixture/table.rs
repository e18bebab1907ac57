//! Table fixtures for creating test database schemas.

use sea_orm::sea_query::{Alias, ColumnDef, Table, TableCreateStatement};

/// Name of the users fixture table.
pub const USERS: &str = "users";

/// Name of the accounts fixture table.
pub const ACCOUNTS: &str = "accounts";

fn id_column() -> ColumnDef {
    ColumnDef::new(Alias::new("id"))
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

/// Creates the `users` table.
///
/// # Columns
/// - `id` - Auto-increment primary key
/// - `name` - Text, required
/// - `age` - Integer, nullable
/// - `status` - Text, nullable
pub fn users() -> TableCreateStatement {
    Table::create()
        .table(Alias::new(USERS))
        .if_not_exists()
        .col(id_column())
        .col(ColumnDef::new(Alias::new("name")).string().not_null())
        .col(ColumnDef::new(Alias::new("age")).integer().null())
        .col(ColumnDef::new(Alias::new("status")).string().null())
        .to_owned()
}

/// Creates the `accounts` table.
///
/// # Columns
/// - `id` - Auto-increment primary key
/// - `username` - Text, required and unique
/// - `email` - Text, nullable
/// - `active` - Boolean, nullable
/// - `balance` - Double, nullable
/// - `opened_on` - Text date, nullable
pub fn accounts() -> TableCreateStatement {
    Table::create()
        .table(Alias::new(ACCOUNTS))
        .if_not_exists()
        .col(id_column())
        .col(
            ColumnDef::new(Alias::new("username"))
                .string()
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Alias::new("email")).string().null())
        .col(ColumnDef::new(Alias::new("active")).boolean().null())
        .col(ColumnDef::new(Alias::new("balance")).double().null())
        .col(ColumnDef::new(Alias::new("opened_on")).string().null())
        .to_owned()
}
