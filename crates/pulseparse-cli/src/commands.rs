//! CLI command implementations.

use crate::output::{self, OutputFormat, ParseReport, TypeInfo};
use anyhow::{Context, Result};
use pulseparse_core::{parse, select, ColumnType, RawItem};
use pulseparse_fs::config::CONFIG_FILE;
use pulseparse_fs::{load_path, load_reader, ParserConfig};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

/// Marker for reading from stdin in place of a path.
const STDIN_MARKER: &str = "-";

/// Transform item exports and write the result.
pub fn transform(
    config: &ParserConfig,
    inputs: &[PathBuf],
    out: Option<&Path>,
    compact: bool,
    format: OutputFormat,
) -> Result<()> {
    let items = read_inputs(inputs)?;
    let transformed = config.transformer().transform(&items);
    info!(count = transformed.len(), "Transformed items");

    output::write_items(&transformed, format, compact, out)
}

fn read_inputs(inputs: &[PathBuf]) -> Result<Vec<RawItem>> {
    if inputs.is_empty() {
        return load_reader(std::io::stdin().lock(), "stdin").context("Failed to read stdin");
    }

    let mut items = Vec::new();
    for input in inputs {
        let loaded = if input.as_os_str() == STDIN_MARKER {
            load_reader(std::io::stdin().lock(), "stdin").context("Failed to read stdin")?
        } else {
            load_path(input).with_context(|| format!("Failed to load {}", input.display()))?
        };
        items.extend(loaded);
    }
    Ok(items)
}

/// Parse a single raw value and show its parsed and mappable forms.
pub fn parse_value(tag: &str, text: Option<&str>, raw: &str, format: OutputFormat) -> Result<()> {
    let kind = ColumnType::from_tag(tag);
    let parsed = parse(Some(&Value::from(raw)), &kind);
    let mappable = select(&kind, text, parsed.clone());

    let report = ParseReport {
        kind: kind.to_string(),
        parsed: parsed.map(pulseparse_core::ParsedValue::into_value),
        mappable,
    };
    output::print(&report, format)
}

/// List recognized column types.
pub fn types(format: OutputFormat) -> Result<()> {
    let infos: Vec<TypeInfo> = ColumnType::known()
        .map(|kind| TypeInfo {
            tag: kind.tag().to_string(),
            fields: kind.fields().to_vec(),
            accepts_text: kind.accepts_scalar(),
        })
        .collect();
    output::print_list(&infos, format)
}

/// Write a default config file.
pub fn init_config(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    ParserConfig::write_default(path).context("Failed to write config")?;
    output::print_success(&format!("Wrote config to {}", path.display()), format);
    Ok(())
}
