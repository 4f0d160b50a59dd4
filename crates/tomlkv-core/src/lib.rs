//! Key-path editing of TOML files
//!
//! Reads, sets, and deletes a single value inside a TOML document addressed
//! by a dotted key such as `server.tls.port`, exchanging values as JSON.
//! Set creates missing intermediate tables; Get and Delete treat missing
//! files and keys as non-existence rather than errors.

pub mod document;
pub mod engine;
pub mod error;
pub mod io;
pub mod path;
pub mod resource;
pub mod value;

pub use document::TomlDocument;
pub use engine::{apply, delete, get, set, test};
pub use error::{Error, ExitCode, Result};
pub use path::KeyPath;
pub use resource::{KeyValue, TestResult};
