//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Manage TOML key-value pairs as a desired-state resource
#[derive(Parser, Debug)]
#[command(name = "tomlkv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Level of diagnostics written to stderr
    #[arg(long, global = true, env = "TOMLKV_TRACE_LEVEL", value_enum)]
    pub trace_level: Option<TraceLevel>,

    /// The operation to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Resource operations. Each takes one instance as JSON, e.g.
/// `{"path": "app.toml", "key": "server.port", "value": 8080}`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report the current value of a key
    Get(InstanceArgs),

    /// Set a key, or delete it when `_exist` is false
    ///
    /// The TOML file must already exist. Missing parent tables are created.
    Set(InstanceArgs),

    /// Delete a key if present
    Delete(InstanceArgs),

    /// Check whether a key matches the desired instance
    Test(InstanceArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InstanceArgs {
    /// Instance JSON. Read from stdin when omitted.
    #[arg(short, long)]
    pub input: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl TraceLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
