//! TOML key-value resource CLI
//!
//! Reads one resource instance as JSON, runs the requested operation, and
//! prints the resulting instance as JSON. Failures are reported on stderr
//! and through the process exit code.

mod cli;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.exit_code() == 0 {
                tomlkv_core::ExitCode::Success.into()
            } else {
                tomlkv_core::ExitCode::InvalidParameter.into()
            };
        }
    };

    if let Err(e) = logging::init(cli.trace_level) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }

    match commands::execute(&cli.command) {
        Ok(Some(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            tracing::debug!(code = code.code(), "{}", code.description());
            eprintln!("{}: {}", "error".red().bold(), e);
            code.into()
        }
    }
}
