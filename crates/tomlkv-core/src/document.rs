//! A TOML file loaded for editing

use std::path::{Path, PathBuf};

use toml_edit::{DocumentMut, TableLike};

use crate::error::{Error, Result};
use crate::io;

/// Parsed TOML document tied to the file it came from.
///
/// Backed by `toml_edit`, so comments and formatting of entries that are not
/// touched survive a load/save cycle.
#[derive(Debug, Clone)]
pub struct TomlDocument {
    path: PathBuf,
    doc: DocumentMut,
}

impl TomlDocument {
    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(?path, "Loading TOML document");
        let bytes = io::read_bytes(path)?;
        let source = String::from_utf8(bytes)
            .map_err(|e| Error::parse(path, format!("document is not valid UTF-8: {e}")))?;
        Self::parse(path, &source)
    }

    /// Parse `source` as the content of `path`.
    pub fn parse(path: &Path, source: &str) -> Result<Self> {
        let doc: DocumentMut = source
            .parse()
            .map_err(|e: toml_edit::TomlError| Error::parse(path, e.to_string()))?;
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &dyn TableLike {
        self.doc.as_table()
    }

    pub fn root_mut(&mut self) -> &mut dyn TableLike {
        self.doc.as_table_mut()
    }

    /// Render the document back to TOML text.
    pub fn render(&self) -> String {
        self.doc.to_string()
    }

    /// Overwrite the source file with the rendered document.
    pub fn save(&self) -> Result<()> {
        io::write_text(&self.path, &self.render())
    }
}
