//! Shell command implementation.
//!
//! Reads one command per line and answers each with one JSON line, mapping
//! store errors to a status the way an HTTP front-end would.
//!
//! ```text
//! add
//! update <id> [name=<name>] [price=<price>]
//! delete <id>
//! get <id>
//! list
//! len
//! ```
//!
//! A field value runs until the next `name=` or `price=`, so
//! `update <id> name=Big Widget price=3` sets the name to `Big Widget`.
//! Runs of whitespace inside a value collapse to one space.

use prodstore_core::{Context, ProductStore, ProductUpdate, StoreError};
use serde_json::{json, Value};
use std::io::{BufRead, Write};
use thiserror::Error;

const STATUS_BAD_REQUEST: u16 = 400;
const STATUS_INTERNAL: u16 = 500;

/// Errors in a shell command line.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The first word is not a known command.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// What was missing.
        argument: &'static str,
    },

    /// An update field is not `name=` or `price=`.
    #[error("unknown field `{0}`; expected name=<name> or price=<price>")]
    UnknownField(String),

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ShellError {
    fn status(&self) -> u16 {
        match self {
            Self::Store(err) if !err.is_client_error() => STATUS_INTERNAL,
            _ => STATUS_BAD_REQUEST,
        }
    }
}

/// Runs the shell until `input` is exhausted.
pub fn run<R: BufRead, W: Write>(
    store: &dyn ProductStore,
    input: R,
    mut output: W,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(backend = %store.backend(), "shell started");
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let response = respond(store, line);
        writeln!(output, "{}", serde_json::to_string(&response)?)?;
    }
    output.flush()?;
    Ok(())
}

/// Executes one line and renders the outcome as JSON.
pub fn respond(store: &dyn ProductStore, line: &str) -> Value {
    match execute(store, &Context::background(), line) {
        Ok(value) => value,
        Err(err) => json!({ "error": err.to_string(), "status": err.status() }),
    }
}

fn execute(store: &dyn ProductStore, ctx: &Context, line: &str) -> Result<Value, ShellError> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();

    match command {
        "add" => {
            let id = store.add(ctx)?;
            Ok(json!({ "id": id }))
        }
        "update" => {
            let id = words.next().ok_or(ShellError::MissingArgument {
                command: "update",
                argument: "an id",
            })?;
            let (name, price) = parse_fields(words)?;
            let update = ProductUpdate::parse(id, &name, &price)?;
            store.update(ctx, &update)?;
            Ok(json!({ "msg": "Product updated" }))
        }
        "delete" => {
            let id = words.next().ok_or(ShellError::MissingArgument {
                command: "delete",
                argument: "an id",
            })?;
            store.delete(ctx, id)?;
            Ok(json!({ "msg": "Product deleted" }))
        }
        "get" => {
            let id = words.next().ok_or(ShellError::MissingArgument {
                command: "get",
                argument: "an id",
            })?;
            Ok(json!(store.get(ctx, id)?))
        }
        "list" => Ok(json!(store.get_all(ctx)?)),
        "len" => Ok(json!({ "len": store.len() })),
        other => Err(ShellError::UnknownCommand(other.to_string())),
    }
}

/// Collects `name=` and `price=` values; bare words extend the previous value.
fn parse_fields<'a>(words: impl Iterator<Item = &'a str>) -> Result<(String, String), ShellError> {
    // [name, price]
    let mut values = [String::new(), String::new()];
    let mut current: Option<usize> = None;
    for word in words {
        let (index, value) = match word.split_once('=') {
            Some(("name", value)) => (0, value),
            Some(("price", value)) => (1, value),
            Some(_) => return Err(ShellError::UnknownField(word.to_string())),
            None => {
                let Some(index) = current else {
                    return Err(ShellError::UnknownField(word.to_string()));
                };
                values[index].push(' ');
                values[index].push_str(word);
                continue;
            }
        };
        values[index] = value.to_string();
        current = Some(index);
    }
    let [name, price] = values;
    Ok((name, price))
}
