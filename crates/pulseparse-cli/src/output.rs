//! Output formatting for the CLI.

use anyhow::{Context, Result};
use console::style;
use pulseparse_core::TransformedItem;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    #[default]
    Json,
    /// YAML output
    Yaml,
    /// Human-readable summary
    Human,
}

/// Render a value in a machine format. `Human` falls back to its display.
fn render<T: Serialize + HumanDisplay + ?Sized>(
    value: &T,
    format: OutputFormat,
    compact: bool,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Human => value.human_display(),
        OutputFormat::Json if compact => {
            serde_json::to_string(value).context("Failed to serialize to JSON")?
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize to YAML")?,
    };
    Ok(rendered)
}

/// Print a value in the specified format.
pub fn print<T: Serialize + HumanDisplay>(value: &T, format: OutputFormat) -> Result<()> {
    println!("{}", render(value, format, false)?);
    Ok(())
}

/// Print a list in the specified format.
pub fn print_list<T: Serialize + HumanDisplay>(values: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for value in values {
                println!("{}", value.human_display());
            }
            Ok(())
        }
        _ => {
            println!("{}", render(values, format, false)?);
            Ok(())
        }
    }
}

/// Write transformed items to a file, or stdout when no path is given.
pub fn write_items(
    items: &[TransformedItem],
    format: OutputFormat,
    compact: bool,
    path: Option<&Path>,
) -> Result<()> {
    let rendered = render(items, format, compact)?;

    match path {
        Some(path) => fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").context("Failed to write to stdout")
        }
    }
}

/// Print a success message.
pub fn print_success(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{}", style(message).green()),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({"status": "ok", "message": message}));
        }
        OutputFormat::Yaml => {
            println!("status: ok\nmessage: {message}");
        }
    }
}

/// Trait for human-readable display.
pub trait HumanDisplay {
    fn human_display(&self) -> String;
}

impl<T: HumanDisplay> HumanDisplay for [T] {
    fn human_display(&self) -> String {
        self.iter()
            .map(HumanDisplay::human_display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanDisplay for TransformedItem {
    fn human_display(&self) -> String {
        let mut out = String::new();

        let name = self.name.as_deref().unwrap_or("(unnamed)");
        let _ = writeln!(out, "{} {}", style(&self.id).bold(), name);
        let _ = writeln!(out, "  State:    {}", self.state.as_deref().unwrap_or("-"));
        let _ = writeln!(out, "  Creator:  {}", self.creator_id.as_ref().map_or_else(|| "-".to_string(), short));
        let _ = write!(out, "  Columns:  {}", self.column_values.len());

        for cv in &self.column_values {
            let mapped = self
                .mappable_column_values
                .get(&cv.id)
                .map_or_else(|| "-".to_string(), short);
            let _ = write!(out, "\n    {:<24} {}", cv.id, style(mapped).dim());
        }

        out
    }
}

/// Parse result of a single raw value.
#[derive(Debug, Serialize)]
pub struct ParseReport {
    #[serde(rename = "type")]
    pub kind: String,
    pub parsed: Option<Value>,
    pub mappable: Option<Value>,
}

impl HumanDisplay for ParseReport {
    fn human_display(&self) -> String {
        let show = |v: &Option<Value>| v.as_ref().map_or_else(|| "(absent)".to_string(), Value::to_string);
        format!(
            "Type:      {}\nParsed:    {}\nMappable:  {}",
            self.kind,
            show(&self.parsed),
            show(&self.mappable)
        )
    }
}

/// A recognized column type and the fields extracted for it.
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    pub tag: String,
    pub fields: Vec<&'static str>,
    pub accepts_text: bool,
}

impl HumanDisplay for TypeInfo {
    fn human_display(&self) -> String {
        let fields = if self.fields.is_empty() {
            "(passthrough)".to_string()
        } else {
            self.fields.join(", ")
        };
        format!("{:<16} {}", self.tag, fields)
    }
}

/// Single-line rendering of a JSON value for summaries.
fn short(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
