//! Operation handlers
//!
//! Each handler takes the instance JSON, runs the engine, and returns the
//! JSON line to print, if any.

use std::io::Read;

use tomlkv_core::KeyValue;

use crate::cli::{Commands, InstanceArgs};
use crate::error::{CliError, Result};

/// Run a command and return its stdout payload.
pub fn execute(command: &Commands) -> Result<Option<String>> {
    match command {
        Commands::Get(args) => run_get(&read_instance(args)?).map(Some),
        Commands::Set(args) => run_set(&read_instance(args)?).map(Some),
        Commands::Delete(args) => run_delete(&read_instance(args)?).map(|()| None),
        Commands::Test(args) => run_test(&read_instance(args)?).map(Some),
    }
}

/// Parse the instance from `--input`, or from stdin when absent.
pub fn read_instance(args: &InstanceArgs) -> Result<KeyValue> {
    let input = match &args.input {
        Some(input) => input.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_instance(&input)
}

pub fn parse_instance(input: &str) -> Result<KeyValue> {
    if input.trim().is_empty() {
        return Err(CliError::user("No instance JSON supplied"));
    }
    let instance: KeyValue = serde_json::from_str(input)?;
    tracing::debug!(path = ?instance.path, key = %instance.key, "Parsed instance");
    Ok(instance)
}

/// Serialize a result for stdout. Input errors are reported elsewhere, so a
/// failure here is internal.
fn render<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| CliError::internal(format!("failed to render result: {e}")))
}

pub fn run_get(instance: &KeyValue) -> Result<String> {
    instance.validate()?;
    let state = tomlkv_core::get(&instance.path, &instance.key)?;
    render(&state)
}

/// Apply the instance and report the resulting state.
pub fn run_set(instance: &KeyValue) -> Result<String> {
    tomlkv_core::apply(instance)?;
    let state = tomlkv_core::get(&instance.path, &instance.key)?;
    render(&state)
}

pub fn run_delete(instance: &KeyValue) -> Result<()> {
    instance.validate()?;
    tomlkv_core::delete(&instance.path, &instance.key)?;
    Ok(())
}

pub fn run_test(instance: &KeyValue) -> Result<String> {
    let result = tomlkv_core::test(instance)?;
    render(&result)
}
