//! Shared utilities for CLI commands

use serde_json::{Map, Value};
use tabled::{Table, settings::Style};

use crate::cli::error::{CliError, CliResult};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Format extra person attributes as `key=value` pairs for display
pub fn format_attributes(attributes: &Map<String, Value>) -> String {
    if attributes.is_empty() {
        return "-".to_string();
    }
    attributes
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}={}", key, s),
            other => format!("{}={}", key, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse `key=value` arguments into an attribute map.
///
/// Values that parse as JSON (numbers, booleans, arrays...) keep their type;
/// anything else is stored as a string.
pub fn parse_attributes(pairs: &[String]) -> CliResult<Map<String, Value>> {
    let mut attributes = Map::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| CliError::InvalidArgument {
                message: format!("'{}' is not a key=value pair", pair),
            })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::InvalidArgument {
                message: format!("'{}' has an empty key", pair),
            });
        }
        let value = serde_json::from_str(raw.trim())
            .unwrap_or_else(|_| Value::String(raw.trim().to_string()));
        attributes.insert(key.to_string(), value);
    }
    Ok(attributes)
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
