//! CLI commands for hopgraph

pub mod dispatch;
pub mod edges;
pub mod info;
pub mod level;
pub mod path;
pub mod reach;

use std::fmt::Display;

/// Join keys with a separator for human output
pub(crate) fn join_keys<K: Display>(keys: &[K], sep: &str) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Print a JSON value the way every command does
pub(crate) fn print_json(value: &serde_json::Value) -> hopgraph_core::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
