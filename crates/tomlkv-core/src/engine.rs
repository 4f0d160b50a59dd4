//! Get/Set/Delete/Test over a single key of a TOML file
//!
//! Every call parses the file afresh and owns the resulting tree. Set and
//! Delete do all parsing, traversal, and conversion in memory before the one
//! whole-file write, so a failing call leaves the file as it was.

use std::path::Path;

use serde_json::Value;
use toml_edit::Item;

use crate::document::TomlDocument;
use crate::error::{Error, Result};
use crate::io;
use crate::path::{KeyPath, resolve_delete, resolve_read, resolve_write, retain_empty_parent};
use crate::resource::{KeyValue, TestResult};
use crate::value::{normalize, to_generic, to_native};

/// Report the current state of `key` in the file at `path`.
///
/// A missing file or key is reported with `_exist: false`, not as an error.
pub fn get(path: &Path, key: &str) -> Result<KeyValue> {
    if !io::file_exists(path) {
        tracing::debug!(?path, "TOML file does not exist");
        return Ok(KeyValue::absent(path, key));
    }

    let document = TomlDocument::load(path)?;
    let key_path = KeyPath::parse(key);

    match resolve_read(document.root(), &key_path) {
        Some(item) => Ok(KeyValue::present(path, key, to_generic(item))),
        None => {
            tracing::debug!(?path, key, "Key not found");
            Ok(KeyValue::absent(path, key))
        }
    }
}

/// Assign `value` to `key`, creating intermediate tables as needed.
///
/// The file must already exist. A `None` value is written as `""`.
pub fn set(path: &Path, key: &str, value: Option<&Value>) -> Result<()> {
    if !io::file_exists(path) {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut document = TomlDocument::load(path)?;
    let key_path = KeyPath::parse(key);
    let leaf = to_native(value.unwrap_or(&Value::Null))?;

    let parent = resolve_write(document.root_mut(), &key_path)?;
    let replaced = parent.insert(key_path.leaf(), Item::Value(leaf)).is_some();

    document.save()?;
    tracing::info!(?path, key, replaced, "Set TOML key");
    Ok(())
}

/// Remove `key` from the file at `path`.
///
/// A missing file, intermediate table, or key is a successful no-op that does
/// not touch the file. Tables left empty by the removal are kept.
pub fn delete(path: &Path, key: &str) -> Result<()> {
    if !io::file_exists(path) {
        tracing::debug!(?path, "TOML file does not exist, nothing to delete");
        return Ok(());
    }

    let mut document = TomlDocument::load(path)?;
    let key_path = KeyPath::parse(key);

    let removed = match resolve_delete(document.root_mut(), &key_path) {
        Some(parent) => parent.remove(key_path.leaf()).is_some(),
        None => false,
    };

    if !removed {
        tracing::debug!(?path, key, "Key not found, nothing to delete");
        return Ok(());
    }

    retain_empty_parent(document.root_mut(), &key_path);
    document.save()?;
    tracing::info!(?path, key, "Deleted TOML key");
    Ok(())
}

/// Bring the file in line with `desired`: Set when the key should exist,
/// Delete when `_exist` is false.
pub fn apply(desired: &KeyValue) -> Result<()> {
    desired.validate()?;
    if desired.exists() {
        set(&desired.path, &desired.key, desired.value.as_ref())
    } else {
        delete(&desired.path, &desired.key)
    }
}

/// Compare the actual state of the key with `desired`.
///
/// A desired instance without a value only checks existence. A desired value
/// is compared after the same conversion Set applies, so `2.0` matches a
/// stored `2`.
pub fn test(desired: &KeyValue) -> Result<TestResult> {
    desired.validate()?;
    let actual = get(&desired.path, &desired.key)?;
    let mut differing_properties = Vec::new();

    if desired.exists() != actual.exists() {
        differing_properties.push("_exist".to_string());
    } else if let (true, Some(want)) = (desired.exists(), desired.value.as_ref()) {
        if actual.value.as_ref() != Some(&normalize(want)?) {
            differing_properties.push("value".to_string());
        }
    }

    Ok(TestResult {
        actual,
        in_desired_state: differing_properties.is_empty(),
        differing_properties,
    })
}
