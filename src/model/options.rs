use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::error::config::ConfigError;

/// Optional mapper configuration applied by `EntityMapper::configure`.
///
/// Every field is independently optional; a `None` field leaves the mapper's current value
/// untouched. Field names accept both `snake_case` and `camelCase` when deserialized.
///
/// # Example
///
/// ```rust
/// use entity_mapper::model::MapperOptions;
///
/// let options = MapperOptions::from_json(
///     r#"{ "tableName": "users", "headerTranslations": { "Name": "full_name" } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(options.table_name.as_deref(), Some("users"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Descriptive entity label, used only in log output and error messages.
    #[serde(alias = "entityName")]
    pub entity_name: Option<String>,

    /// Database table rows are inserted into.
    #[serde(alias = "tableName")]
    pub table_name: Option<String>,

    /// Scenario column label → database column name.
    #[serde(alias = "headerTranslations")]
    pub header_translations: Option<HashMap<String, String>>,

    /// Database column name → name of a registered transformation.
    #[serde(alias = "dataTranslations")]
    pub data_translations: Option<HashMap<String, String>>,

    /// Database column name → value used when a row omits the column.
    pub defaults: Option<BTreeMap<String, Value>>,
}

impl MapperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON document.
    ///
    /// # Returns
    /// - `Ok(MapperOptions)` - Parsed options, absent fields left as `None`
    /// - `Err(ConfigError::InvalidOptions)` - Malformed JSON or wrongly typed field
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn entity_name(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = Some(entity_name.into());
        self
    }

    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Adds one header translation, keeping any already set.
    pub fn header_translation(mut self, label: impl Into<String>, column: impl Into<String>) -> Self {
        self.header_translations
            .get_or_insert_with(HashMap::new)
            .insert(label.into(), column.into());
        self
    }

    /// Adds one data translation, keeping any already set.
    pub fn data_translation(mut self, column: impl Into<String>, name: impl Into<String>) -> Self {
        self.data_translations
            .get_or_insert_with(HashMap::new)
            .insert(column.into(), name.into());
        self
    }

    /// Adds one default value, keeping any already set.
    pub fn default_value(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults
            .get_or_insert_with(BTreeMap::new)
            .insert(column.into(), value.into());
        self
    }
}
