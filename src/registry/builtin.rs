//! Transformations registered by `TranslationBus::with_builtins`.
//!
//! Each function accepts the raw cell value (normally a JSON string) and returns the value
//! to store. Values that are already of the target type pass through unchanged, so the
//! same transformation can safely be applied to defaults.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Number, Value};
use std::borrow::Cow;

use crate::{error::transform::TransformError, registry::TranslationBus};

/// Storage format used by `to_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format used by `to_datetime`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Registers every builtin on `bus` under its function name.
pub fn register_all(bus: &mut TranslationBus) {
    bus.register("to_int", to_int)
        .register("to_float", to_float)
        .register("to_bool", to_bool)
        .register("null_if_empty", null_if_empty)
        .register("json", json)
        .register("trim", trim)
        .register("lowercase", lowercase)
        .register("uppercase", uppercase)
        .register("to_date", to_date)
        .register("to_datetime", to_datetime);
}

fn text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

fn invalid(value: &Value, target: &'static str) -> TransformError {
    TransformError::InvalidValue {
        value: text(value).into_owned(),
        target,
    }
}

/// Parses the value as a signed 64-bit integer.
pub fn to_int(value: Value) -> Result<Value, TransformError> {
    if value.is_i64() || value.is_null() {
        return Ok(value);
    }

    text(&value)
        .trim()
        .parse::<i64>()
        .map(Value::from)
        .map_err(|_| invalid(&value, "integer"))
}

/// Parses the value as a finite floating point number.
pub fn to_float(value: Value) -> Result<Value, TransformError> {
    if value.is_number() || value.is_null() {
        return Ok(value);
    }

    text(&value)
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| invalid(&value, "float"))
}

/// Accepts `true/false`, `yes/no`, `y/n`, `on/off` and `1/0`, case-insensitively.
pub fn to_bool(value: Value) -> Result<Value, TransformError> {
    if value.is_boolean() || value.is_null() {
        return Ok(value);
    }

    match text(&value).trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Ok(Value::Bool(true)),
        "false" | "no" | "n" | "off" | "0" => Ok(Value::Bool(false)),
        _ => Err(invalid(&value, "boolean")),
    }
}

/// Maps an empty (or whitespace-only) string to `NULL`.
pub fn null_if_empty(value: Value) -> Result<Value, TransformError> {
    match value {
        Value::String(s) if s.trim().is_empty() => Ok(Value::Null),
        other => Ok(other),
    }
}

/// Parses a string cell as a JSON document.
pub fn json(value: Value) -> Result<Value, TransformError> {
    match value {
        Value::String(s) => {
            serde_json::from_str(&s).map_err(|source| TransformError::InvalidJson { value: s, source })
        }
        other => Ok(other),
    }
}

pub fn trim(value: Value) -> Result<Value, TransformError> {
    match value {
        Value::String(s) => Ok(Value::String(s.trim().to_string())),
        other => Ok(other),
    }
}

pub fn lowercase(value: Value) -> Result<Value, TransformError> {
    match value {
        Value::String(s) => Ok(Value::String(s.to_lowercase())),
        other => Ok(other),
    }
}

pub fn uppercase(value: Value) -> Result<Value, TransformError> {
    match value {
        Value::String(s) => Ok(Value::String(s.to_uppercase())),
        other => Ok(other),
    }
}

/// Normalizes a date to `YYYY-MM-DD`. `today` resolves to the current UTC date.
pub fn to_date(value: Value) -> Result<Value, TransformError> {
    if value.is_null() {
        return Ok(value);
    }

    let raw = text(&value);
    let raw = raw.trim();
    let date = if raw.eq_ignore_ascii_case("today") {
        Utc::now().date_naive()
    } else {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
            .map_err(|_| invalid(&value, "date"))?
    };

    Ok(Value::String(date.format(DATE_FORMAT).to_string()))
}

/// Normalizes a timestamp to `YYYY-MM-DD HH:MM:SS` in UTC. `now` resolves to the current time.
pub fn to_datetime(value: Value) -> Result<Value, TransformError> {
    if value.is_null() {
        return Ok(value);
    }

    let raw = text(&value);
    let raw = raw.trim();
    let datetime = if raw.eq_ignore_ascii_case("now") {
        Utc::now().naive_utc()
    } else if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        parsed.with_timezone(&Utc).naive_utc()
    } else {
        NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
            .map_err(|_| invalid(&value, "datetime"))?
    };

    Ok(Value::String(datetime.format(DATETIME_FORMAT).to_string()))
}
