//! Key path parsing and table traversal
//!
//! A key path addresses a value inside a TOML document with dot-separated
//! segments: `server.tls.cert` names the `cert` key of the `tls` table of the
//! `server` table. There is no escape syntax, so a key whose name contains a
//! literal `.` cannot be addressed.
//!
//! Reads, writes, and deletes walk the tree differently:
//!
//! - [`resolve_read`] treats any missing or non-table intermediate as "not found".
//! - [`resolve_write`] creates missing intermediate tables and fails with
//!   [`Error::TypeMismatch`] when an intermediate exists but is not a table.
//! - [`resolve_delete`] is a read walk that stops at the parent table.
//!
//! # Examples
//!
//! ```
//! use tomlkv_core::path::{KeyPath, resolve_read};
//! use toml_edit::DocumentMut;
//!
//! let doc: DocumentMut = "[server]\nport = 8080\n".parse().unwrap();
//! let path = KeyPath::parse("server.port");
//! let item = resolve_read(doc.as_table(), &path).unwrap();
//! assert_eq!(item.as_integer(), Some(8080));
//!
//! assert!(resolve_read(doc.as_table(), &KeyPath::parse("server.host")).is_none());
//! ```

use std::fmt;

use toml_edit::{Item, Table, TableLike};

use crate::error::{Error, Result};

/// Segment delimiter for key paths
pub const DELIMITER: char = '.';

/// A dotted key split into its segments.
///
/// Always holds at least one segment. Empty segments (from `".a"`, `"a."` or
/// `"a..b"`) are literal empty-string keys, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Split a key on `.` into segments.
    ///
    /// ```
    /// use tomlkv_core::path::KeyPath;
    ///
    /// assert_eq!(KeyPath::parse("a.b.c").segments(), ["a", "b", "c"]);
    /// assert_eq!(KeyPath::parse("name").segments(), ["name"]);
    /// assert_eq!(KeyPath::parse("a..b").segments(), ["a", "", "b"]);
    /// ```
    pub fn parse(key: &str) -> Self {
        Self {
            segments: key.split(DELIMITER).map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments leading to the parent table of the leaf.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }

    /// The final segment, the key assigned or removed in the parent table.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Whether the path addresses a key of the root table directly.
    pub fn is_single(&self) -> bool {
        self.segments.len() == 1
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Find the item addressed by `path`.
///
/// Returns `None` when any segment is missing or an intermediate segment is
/// not a table. Both cases read as "does not exist".
pub fn resolve_read<'a>(root: &'a dyn TableLike, path: &KeyPath) -> Option<&'a Item> {
    read_in(root, path.parents(), path.leaf())
}

fn read_in<'a>(table: &'a dyn TableLike, parents: &[String], leaf: &str) -> Option<&'a Item> {
    match parents.split_first() {
        None => table.get(leaf).filter(|item| !item.is_none()),
        Some((first, rest)) => read_in(table.get(first)?.as_table_like()?, rest, leaf),
    }
}

/// Walk to the parent table of the leaf, creating missing tables on the way.
///
/// New intermediate tables are implicit, so they only get a `[header]` once
/// they hold a value of their own. An existing intermediate that is not a
/// table is never replaced; the walk fails with [`Error::TypeMismatch`].
pub fn resolve_write<'a>(
    root: &'a mut dyn TableLike,
    path: &KeyPath,
) -> Result<&'a mut dyn TableLike> {
    write_in(root, path.parents(), path)
}

fn write_in<'a>(
    table: &'a mut dyn TableLike,
    parents: &[String],
    path: &KeyPath,
) -> Result<&'a mut dyn TableLike> {
    let Some((first, rest)) = parents.split_first() else {
        return Ok(table);
    };

    if !table.contains_key(first) {
        tracing::debug!(segment = %first, key = %path, "Creating intermediate table");
        let mut created = Table::new();
        created.set_implicit(true);
        table.insert(first, Item::Table(created));
    }

    match table.get_mut(first).and_then(|item| item.as_table_like_mut()) {
        Some(child) => write_in(child, rest, path),
        None => Err(Error::TypeMismatch {
            key: path.to_string(),
            segment: first.clone(),
        }),
    }
}

/// Walk to the parent table of the leaf without creating anything.
///
/// Returns `None` when an intermediate is missing or not a table, in which
/// case there is nothing to delete.
pub fn resolve_delete<'a>(
    root: &'a mut dyn TableLike,
    path: &KeyPath,
) -> Option<&'a mut dyn TableLike> {
    delete_in(root, path.parents())
}

fn delete_in<'a>(table: &'a mut dyn TableLike, parents: &[String]) -> Option<&'a mut dyn TableLike> {
    match parents.split_first() {
        None => Some(table),
        Some((first, rest)) => delete_in(table.get_mut(first)?.as_table_like_mut()?, rest),
    }
}

/// Keep the parent table of the leaf in the rendered document once it is empty.
///
/// Implicit and dotted tables print nothing when they hold no entries, so an
/// emptied one is turned into a standard table with its own `[header]`.
/// Only the parent can become empty through a removal; every other ancestor
/// still contains it.
pub fn retain_empty_parent(root: &mut dyn TableLike, path: &KeyPath) {
    let Some((last, ancestors)) = path.parents().split_last() else {
        return;
    };
    let Some(grandparent) = delete_in(root, ancestors) else {
        return;
    };
    if let Some(Item::Table(table)) = grandparent.get_mut(last) {
        if table.is_empty() {
            table.set_implicit(false);
            table.set_dotted(false);
        }
    }
}
