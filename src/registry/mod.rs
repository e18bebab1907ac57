//! Named data transformations.
//!
//! Scenario tables only carry text, so columns that need a typed or normalized value are
//! mapped to a transformation by name (e.g. `age → "to_int"`). The mapper resolves names
//! through the `TranslationRegistry` trait; `TranslationBus` is the map-backed registry
//! callers register their functions on.

pub mod builtin;

use serde_json::Value;
use std::{collections::HashMap, fmt, sync::Arc};

use crate::error::{transform::TransformError, MapperError};

/// A resolved transformation converting one column value into its stored form.
pub type Transformer = Arc<dyn Fn(Value) -> Result<Value, TransformError> + Send + Sync>;

/// Resolves transformation names to callables.
pub trait TranslationRegistry {
    /// Looks up the transformation registered under `name`.
    ///
    /// # Returns
    /// - `Ok(Transformer)` - Callable for the name
    /// - `Err(MapperError::UnknownTranslation)` - Nothing registered under the name
    fn resolve(&self, name: &str) -> Result<Transformer, MapperError>;
}

/// Registry of transformations keyed by name, owned by the caller.
///
/// # Example
///
/// ```rust
/// use entity_mapper::registry::{TranslationBus, TranslationRegistry};
/// use serde_json::{json, Value};
///
/// let mut bus = TranslationBus::new();
/// bus.register("shout", |value: Value| {
///     Ok(json!(value.as_str().unwrap_or_default().to_uppercase()))
/// });
///
/// let shout = bus.resolve("shout").unwrap();
/// assert_eq!(shout(json!("hi")).unwrap(), json!("HI"));
/// ```
#[derive(Clone, Default)]
pub struct TranslationBus {
    translations: HashMap<String, Transformer>,
}

impl TranslationBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bus with every transformation from `builtin` registered.
    pub fn with_builtins() -> Self {
        let mut bus = Self::new();
        builtin::register_all(&mut bus);
        bus
    }

    /// Registers `transform` under `name`, replacing any previous registration.
    pub fn register<F>(&mut self, name: impl Into<String>, transform: F) -> &mut Self
    where
        F: Fn(Value) -> Result<Value, TransformError> + Send + Sync + 'static,
    {
        self.translations.insert(name.into(), Arc::new(transform));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.translations.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TranslationRegistry for TranslationBus {
    fn resolve(&self, name: &str) -> Result<Transformer, MapperError> {
        self.translations
            .get(name)
            .cloned()
            .ok_or_else(|| MapperError::UnknownTranslation(name.to_string()))
    }
}

impl fmt::Debug for TranslationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationBus")
            .field("translations", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_registered_transformation() {
        let mut bus = TranslationBus::new();
        bus.register("double", |value: Value| {
            Ok(json!(value.as_i64().unwrap_or_default() * 2))
        });

        let double = bus.resolve("double").unwrap();

        assert_eq!(double(json!(21)).unwrap(), json!(42));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let bus = TranslationBus::new();

        let result = bus.resolve("missing");

        assert!(matches!(result, Err(MapperError::UnknownTranslation(name)) if name == "missing"));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut bus = TranslationBus::new();
        bus.register("value", |_| Ok(json!(1)))
            .register("value", |_| Ok(json!(2)));

        let value = bus.resolve("value").unwrap();

        assert_eq!(value(Value::Null).unwrap(), json!(2));
        assert_eq!(bus.names(), vec!["value"]);
    }

    #[test]
    fn builtins_are_registered() {
        let bus = TranslationBus::with_builtins();

        for name in ["to_int", "to_float", "to_bool", "null_if_empty", "json", "to_date"] {
            assert!(bus.contains(name), "missing builtin {}", name);
        }
    }
}
