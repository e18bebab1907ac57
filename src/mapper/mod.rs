//! Maps scenario tables onto database rows for one entity.
//!
//! An `EntityMapper` is configured once per entity (one table) and then fed scenario tables
//! through `create`. Every data row goes through the same pipeline:
//!
//! 1. shape check against the header
//! 2. header translation and lower-casing (computed once per table)
//! 3. default merging for columns the row omits
//! 4. named data translations resolved on the registry
//! 5. a single `INSERT` through the connection
//! 6. recording the row's first column value against the generated id
//!
//! Rows are inserted one at a time without a surrounding transaction, so a failure leaves
//! the rows before it in place.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::{
    connection::Connection,
    error::MapperError,
    model::{MapperOptions, Row, TableData},
    registry::TranslationRegistry,
};

#[cfg(test)]
mod test;

/// Inserts scenario table rows into one database table and remembers their ids by name.
///
/// The connection and registry are borrowed from the caller for the lifetime of the mapper;
/// configuration and the identifier map are owned by the mapper.
///
/// # Example
///
/// ```rust,ignore
/// use entity_mapper::{EntityMapper, MapperOptions, TableData, TranslationBus, SqlConnection};
///
/// let connection = SqlConnection::new(&db);
/// let bus = TranslationBus::with_builtins();
/// let mut users = EntityMapper::configure(
///     &connection,
///     &bus,
///     Some(MapperOptions::new().table_name("users").data_translation("age", "to_int")),
/// );
///
/// users.create(&TableData::from_rows([["Name", "Age"], ["Alice", "30"]]), true).await?;
/// let alice_id = users.named_item_id("Alice");
/// ```
pub struct EntityMapper<'a, C, R> {
    connection: &'a C,
    registry: &'a R,
    entity_name: String,
    table_name: String,
    header_translations: HashMap<String, String>,
    data_translations: HashMap<String, String>,
    defaults: BTreeMap<String, Value>,
    named_items: HashMap<String, i64>,
}

impl<'a, C, R> EntityMapper<'a, C, R>
where
    C: Connection,
    R: TranslationRegistry,
{
    /// Creates a mapper bound to `connection` and `registry`.
    ///
    /// When `options` is given, each of its fields that is set is applied through the
    /// matching setter; unset fields keep their empty defaults.
    pub fn configure(connection: &'a C, registry: &'a R, options: Option<MapperOptions>) -> Self {
        let mut mapper = Self {
            connection,
            registry,
            entity_name: String::new(),
            table_name: String::new(),
            header_translations: HashMap::new(),
            data_translations: HashMap::new(),
            defaults: BTreeMap::new(),
            named_items: HashMap::new(),
        };

        if let Some(options) = options {
            mapper.apply_options(options);
        }

        mapper
    }

    /// Applies every set field of `options` through its setter.
    ///
    /// Data translations are merged like `set_data_translations`; the other fields replace
    /// the current value.
    pub fn apply_options(&mut self, options: MapperOptions) {
        if let Some(entity_name) = options.entity_name {
            self.set_entity_name(entity_name);
        }
        if let Some(table_name) = options.table_name {
            self.set_table_name(table_name);
        }
        if let Some(header_translations) = options.header_translations {
            self.set_header_translations(header_translations);
        }
        if let Some(data_translations) = options.data_translations {
            self.set_data_translations(data_translations);
        }
        if let Some(defaults) = options.defaults {
            self.set_defaults(defaults);
        }
    }

    pub fn set_connection(&mut self, connection: &'a C) {
        self.connection = connection;
    }

    pub fn set_registry(&mut self, registry: &'a R) {
        self.registry = registry;
    }

    pub fn set_entity_name(&mut self, entity_name: impl Into<String>) {
        self.entity_name = entity_name.into();
    }

    pub fn set_table_name(&mut self, table_name: impl Into<String>) {
        self.table_name = table_name.into();
    }

    pub fn set_defaults(&mut self, defaults: BTreeMap<String, Value>) {
        self.defaults = defaults;
    }

    /// Replaces the header translations.
    pub fn set_header_translations(&mut self, header_translations: HashMap<String, String>) {
        self.header_translations = header_translations;
    }

    /// Merges `data_translations` into the existing ones.
    ///
    /// Entries for columns already mapped are overridden; all other existing entries stay.
    pub fn set_data_translations(&mut self, data_translations: HashMap<String, String>) {
        self.data_translations.extend(data_translations);
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn header_translations(&self) -> &HashMap<String, String> {
        &self.header_translations
    }

    pub fn data_translations(&self) -> &HashMap<String, String> {
        &self.data_translations
    }

    pub fn defaults(&self) -> &BTreeMap<String, Value> {
        &self.defaults
    }

    /// Inserts one database row per data row of `table`.
    ///
    /// The first column of each materialized row (after header translation, default merging
    /// and data translation) is recorded against the id the connection reports for the
    /// insert. Default columns are appended after the header columns, so the first column is
    /// always the first header column when the header is not empty. Rows whose first column
    /// ends up `NULL` are inserted but not recorded.
    ///
    /// # Arguments
    /// - `table` - Scenario table; row 0 is the header
    /// - `apply_defaults` - Whether configured defaults fill in columns the rows omit
    ///
    /// # Returns
    /// - `Ok(Vec<i64>)` - Generated ids in row order
    /// - `Err(MapperError::NotConfigured)` - No table name configured
    /// - `Err(MapperError::ShapeMismatch)` - A row's length differs from the header's
    /// - `Err(MapperError::UnknownTranslation)` - A data translation name is not registered
    /// - `Err(MapperError::Transform)` - A data translation rejected a value
    /// - `Err(MapperError::Insert)` - The database rejected an insert
    ///
    /// Rows inserted before an error stay inserted and stay recorded.
    pub async fn create(
        &mut self,
        table: &TableData,
        apply_defaults: bool,
    ) -> Result<Vec<i64>, MapperError> {
        if self.table_name.is_empty() {
            return Err(MapperError::NotConfigured(self.entity_name.clone()));
        }

        let columns = self.translate_header(table.header());
        let mut ids = Vec::with_capacity(table.data_rows().len());

        for (index, values) in table.data_rows().iter().enumerate() {
            let row = self.build_row(&columns, values, index + 1, apply_defaults)?;

            if let Err(err) = self.connection.insert(&self.table_name, &row).await {
                tracing::error!(
                    "Failed to insert {} row {} into '{}': {}",
                    self.entity_name,
                    index + 1,
                    self.table_name,
                    err
                );
                return Err(err.into());
            }

            let id = self.connection.last_insert_id().ok_or_else(|| {
                sea_orm::DbErr::Custom(format!(
                    "No id reported for insert into '{}'",
                    self.table_name
                ))
            })?;

            tracing::debug!(
                "Inserted {} row {} into '{}' with id {}",
                self.entity_name,
                index + 1,
                self.table_name,
                id
            );

            match row.first() {
                Some((_, Value::Null)) | None => {
                    tracing::debug!(
                        "{} row {} has no name, id {} not recorded",
                        self.entity_name,
                        index + 1,
                        id
                    );
                }
                Some((_, value)) => self.record_named_item(item_name(value), id),
            }
            ids.push(id);
        }

        tracing::info!(
            "Created {} {} row(s) in '{}'",
            ids.len(),
            self.entity_name,
            self.table_name
        );

        Ok(ids)
    }

    /// Shorthand for `create(table, false)`.
    pub async fn create_without_defaults(
        &mut self,
        table: &TableData,
    ) -> Result<Vec<i64>, MapperError> {
        self.create(table, false).await
    }

    /// Updating existing rows from scenario tables is not supported.
    ///
    /// # Returns
    /// - `Err(MapperError::UpdateNotSupported)` - Always
    pub fn update(&mut self, _table: &TableData) -> Result<(), MapperError> {
        Err(MapperError::UpdateNotSupported(self.entity_name.clone()))
    }

    /// Id recorded for the row named `name`, `None` when no such row was created.
    pub fn named_item_id(&self, name: &str) -> Option<i64> {
        self.named_items.get(name).copied()
    }

    /// Every recorded row name with its id, in no particular order.
    pub fn named_items(&self) -> impl Iterator<Item = (&str, i64)> {
        self.named_items
            .iter()
            .map(|(name, id)| (name.as_str(), *id))
    }

    /// Forgets every recorded row name. Rows in the database are untouched.
    pub fn clear_named_items(&mut self) {
        self.named_items.clear();
    }

    /// Translates header labels to lower-cased database column names.
    ///
    /// Lookups use the label exactly as written; lower-casing happens afterwards, so a
    /// translation for `"Name"` does not apply to a `"name"` header.
    fn translate_header(&self, header: &[String]) -> Vec<String> {
        header
            .iter()
            .map(|label| {
                self.header_translations
                    .get(label)
                    .unwrap_or(label)
                    .to_lowercase()
            })
            .collect()
    }

    fn build_row(
        &self,
        columns: &[String],
        values: &[String],
        index: usize,
        apply_defaults: bool,
    ) -> Result<Row, MapperError> {
        if values.len() != columns.len() {
            return Err(MapperError::ShapeMismatch {
                row: index,
                expected: columns.len(),
                actual: values.len(),
            });
        }

        let mut row: Row = columns
            .iter()
            .cloned()
            .zip(values.iter().cloned().map(Value::String))
            .collect();

        if apply_defaults {
            for (column, value) in &self.defaults {
                if !row.contains(column) {
                    row.insert(column.clone(), value.clone());
                }
            }
        }

        // Applied in row column order; the first failing column is the one reported.
        let translated: Vec<(String, &String)> = row
            .columns()
            .filter_map(|column| {
                self.data_translations
                    .get(column)
                    .map(|name| (column.to_string(), name))
            })
            .collect();

        for (column, name) in translated {
            let transform = self.registry.resolve(name)?;
            if let Some(value) = row.get_mut(&column) {
                let raw = std::mem::take(value);
                *value = transform(raw).map_err(|source| MapperError::Transform {
                    column: column.clone(),
                    source,
                })?;
            }
        }

        Ok(row)
    }

    fn record_named_item(&mut self, name: String, id: i64) {
        if let Some(previous) = self.named_items.insert(name.clone(), id) {
            tracing::warn!(
                "{} '{}' was already recorded with id {}, now {}",
                self.entity_name,
                name,
                previous,
                id
            );
        }
    }
}

/// Lookup name for a row's first column value.
fn item_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
