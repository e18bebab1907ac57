//! Entity Mapper
//!
//! Turns scenario tables (a header row followed by rows of text cells, as written in
//! behaviour-driven test scenarios) into database rows, and remembers the generated id of
//! each row under a human-readable name so later steps can refer to it.
//!
//! # Overview
//!
//! - **EntityMapper**: Maps one entity (one table), applying header translations, defaults
//!   and named data translations before inserting each row
//! - **Connection**: Where rows are written; `SqlConnection` for SeaORM databases,
//!   `MemoryConnection` for tests
//! - **TranslationRegistry**: Resolves data translation names; `TranslationBus` is the
//!   map-backed registry with optional builtins
//! - **MapperError**: Errors surfaced while mapping or inserting rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity_mapper::{EntityMapper, MapperOptions, SqlConnection, TableData, TranslationBus};
//!
//! let connection = SqlConnection::new(&db);
//! let bus = TranslationBus::with_builtins();
//!
//! let mut users = EntityMapper::configure(
//!     &connection,
//!     &bus,
//!     Some(
//!         MapperOptions::new()
//!             .entity_name("user")
//!             .table_name("users")
//!             .header_translation("Name", "full_name")
//!             .data_translation("age", "to_int")
//!             .default_value("status", "active"),
//!     ),
//! );
//!
//! users
//!     .create(&TableData::from_rows([["Name", "Age"], ["Alice", "30"]]), true)
//!     .await?;
//!
//! let alice = users.named_item_id("Alice");
//! ```

pub mod connection;
pub mod error;
pub mod mapper;
pub mod model;
pub mod registry;

pub use connection::{Connection, MemoryConnection, SqlConnection};
pub use error::MapperError;
pub use mapper::EntityMapper;
pub use model::{MapperOptions, Row, TableData};
pub use registry::{TranslationBus, TranslationRegistry, Transformer};
