//! Mappable value selection.
//!
//! The flat `mappable_column_values` map holds the consumer-facing form of
//! each column: display text for simple columns, records for the rest.

use crate::column::ColumnType;
use crate::value::ParsedValue;
use serde_json::{json, Value};

/// Derive the mappable value for a column from its parsed value and display text.
///
/// Returns `None` when the parsed value is absent, and for `status` columns
/// without display text.
#[must_use]
pub fn select(kind: &ColumnType, text: Option<&str>, parsed: Option<ParsedValue>) -> Option<Value> {
    let parsed = parsed?;
    let shown = text.filter(|t| !t.is_empty());

    match kind {
        plain if plain.is_plain() => Some(shown.map_or_else(|| parsed.into_value(), Value::from)),
        ColumnType::Status => text.map(Value::from),
        ColumnType::Checkbox => parsed.as_record().map(|record| {
            let checked = record.get("checked").cloned().unwrap_or(Value::Bool(false));
            json!({ "checked": checked, "text": text })
        }),
        _ => match parsed {
            ParsedValue::Record(mut record) => {
                if let Some(shown) = shown {
                    record
                        .entry("text")
                        .or_insert_with(|| Value::from(shown));
                }
                Some(Value::Object(record))
            }
            ParsedValue::Scalar(value) => Some(value),
        },
    }
}
