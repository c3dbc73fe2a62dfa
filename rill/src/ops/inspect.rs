//! Inspect operation: dump the in-memory process graph.

use eyre::{Context, Result};
use rill_builder::ProcessDefinition;

/// Pretty-printed JSON of `definition`.
pub fn inspect(definition: &ProcessDefinition) -> Result<String> {
    serde_json::to_string_pretty(definition)
        .wrap_err_with(|| format!("Failed to serialize '{}'", definition.id()))
}
