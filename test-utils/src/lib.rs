//! Entity Mapper Test Utils
//!
//! Provides shared testing utilities for exercising the entity mapper against a real
//! database. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and the table schemas scenario tables are mapped onto.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **TestConfig**: Database settings read from the environment
//! - **TestError**: Error types that can occur during test setup
//! - **fixture** / **query**: Table schemas, scenario rows and read-back helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn maps_users() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(fixture::table::users())
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Map scenario rows into `users`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod fixture;
pub mod query;
