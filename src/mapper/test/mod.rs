use super::*;
use crate::{
    connection::{MemoryConnection, SqlConnection},
    error::transform::TransformError,
    registry::TranslationBus,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, fixture, query};

mod data_translations;

/// Builds table data from string slices, header row first.
fn table(rows: &[&[&str]]) -> TableData {
    TableData::from_rows(rows.iter().map(|row| row.iter().copied()))
}

fn string_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Options for a `users` mapper without translations or defaults.
fn users_options() -> MapperOptions {
    MapperOptions::new().entity_name("user").table_name("users")
}
