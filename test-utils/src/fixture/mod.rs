//! Test fixtures providing table schemas and scenario data.
//!
//! `table` holds CREATE TABLE statements for the tables mapped in tests; `scenario` holds
//! scenario table rows in the shape a feature file would provide them. Neither inserts
//! anything into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let users = fixture::table::users();
//! let rows = fixture::scenario::users();
//! ```

pub mod scenario;
pub mod table;
