//! Conversion between TOML items and JSON values
//!
//! TOML and JSON overlap on strings, booleans, numbers, arrays, and
//! tables/objects. The rest is mapped by fixed rules:
//!
//! | TOML                          | JSON                          |
//! |-------------------------------|-------------------------------|
//! | integer                       | number (integral)             |
//! | float                         | number, or string for nan/inf |
//! | datetime                      | string (TOML text)            |
//! | table, inline table           | object (entry order kept)     |
//! | array, array of tables        | array                         |
//!
//! In the other direction a JSON number becomes a TOML integer when it has no
//! fractional part and fits in `i64`, otherwise a float. JSON objects become
//! inline tables. TOML has no null, so JSON `null` is written as `""`.

use serde_json::{Map, Number, Value};
use toml_edit::{Array, InlineTable, Item, TableLike};

use crate::error::{Error, Result};

/// Convert a TOML item to its JSON form.
pub fn to_generic(item: &Item) -> Value {
    match item {
        // Vacant slot, never returned by a resolved read.
        Item::None => Value::Null,
        Item::Value(value) => value_to_generic(value),
        Item::Table(table) => table_to_generic(table),
        Item::ArrayOfTables(tables) => Value::Array(tables.iter().map(|t| table_to_generic(t)).collect()),
    }
}

fn value_to_generic(value: &toml_edit::Value) -> Value {
    match value {
        toml_edit::Value::String(s) => Value::String(s.value().clone()),
        toml_edit::Value::Integer(i) => Value::Number((*i.value()).into()),
        toml_edit::Value::Float(f) => float_to_generic(*f.value()),
        toml_edit::Value::Boolean(b) => Value::Bool(*b.value()),
        toml_edit::Value::Array(array) => Value::Array(array.iter().map(value_to_generic).collect()),
        toml_edit::Value::InlineTable(table) => table_to_generic(table),
        // No JSON counterpart: fall back to the TOML text of the datetime.
        toml_edit::Value::Datetime(dt) => Value::String(dt.value().to_string()),
    }
}

fn table_to_generic(table: &dyn TableLike) -> Value {
    let entries: Map<String, Value> = table
        .iter()
        .map(|(key, item)| (key.to_string(), to_generic(item)))
        .collect();
    Value::Object(entries)
}

fn float_to_generic(f: f64) -> Value {
    match Number::from_f64(f) {
        Some(n) => Value::Number(n),
        None => Value::String(non_finite_text(f).to_string()),
    }
}

fn non_finite_text(f: f64) -> &'static str {
    if f.is_nan() {
        "nan"
    } else if f.is_sign_negative() {
        "-inf"
    } else {
        "inf"
    }
}

/// Convert a JSON value to a TOML value.
///
/// `null` becomes the empty string, at any depth.
pub fn to_native(value: &Value) -> Result<toml_edit::Value> {
    let native = match value {
        Value::Null => toml_edit::Value::from(""),
        Value::Bool(b) => toml_edit::Value::from(*b),
        Value::Number(n) => number_to_native(n)?,
        Value::String(s) => toml_edit::Value::from(s.as_str()),
        Value::Array(items) => {
            let mut array = Array::new();
            for item in items {
                array.push(to_native(item)?);
            }
            toml_edit::Value::Array(array)
        }
        Value::Object(entries) => {
            let mut table = InlineTable::new();
            for (key, entry) in entries {
                table.insert(key.as_str(), to_native(entry)?);
            }
            toml_edit::Value::InlineTable(table)
        }
    };
    Ok(native)
}

fn number_to_native(n: &Number) -> Result<toml_edit::Value> {
    if let Some(i) = n.as_i64() {
        return Ok(toml_edit::Value::from(i));
    }
    match n.as_f64() {
        Some(f) if is_integral(f) => Ok(toml_edit::Value::from(f as i64)),
        Some(f) => Ok(toml_edit::Value::from(f)),
        None => Err(Error::invalid_argument(format!(
            "number {n} cannot be represented in TOML"
        ))),
    }
}

/// Whole number within `i64` range. `i64::MAX as f64` rounds up to 2^63,
/// so the upper bound is exclusive.
fn is_integral(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Pass a JSON value through TOML and back, so it compares equal to what a
/// read returns after writing it.
pub fn normalize(value: &Value) -> Result<Value> {
    Ok(value_to_generic(&to_native(value)?))
}
