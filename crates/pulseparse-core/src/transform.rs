//! Item transformation.
//!
//! Turns raw board items into [`TransformedItem`]s: envelope fields, creator
//! lookup, enriched column values, and the flat mappable map. One output item
//! per input item, in input order.

use crate::clock::{format_timestamp, Clock, SystemClock};
use crate::column::{ColumnType, DEFAULT_COLOR};
use crate::error::Result;
use crate::item::{ColumnMeta, EnrichedColumnValue, Envelope, RawColumnValue, RawItem, TransformedItem};
use crate::mappable::select;
use crate::value::{is_absent, parse, ParsedValue};
use serde_json::{json, Map, Value};
use tracing::debug;

/// Column ids with this prefix carry color display info.
pub const COLOR_COLUMN_PREFIX: &str = "color_";

/// Transforms raw items using a fixed envelope and a clock.
#[derive(Debug, Clone)]
pub struct Transformer<C = SystemClock> {
    envelope: Envelope,
    clock: C,
}

impl Transformer<SystemClock> {
    /// Create a transformer reading the system clock.
    #[must_use]
    pub const fn new(envelope: Envelope) -> Self {
        Self::with_clock(envelope, SystemClock)
    }
}

impl<C: Clock> Transformer<C> {
    /// Create a transformer with an explicit clock.
    #[must_use]
    pub const fn with_clock(envelope: Envelope, clock: C) -> Self {
        Self { envelope, clock }
    }

    #[must_use]
    pub const fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Transform a list of items.
    #[must_use]
    pub fn transform(&self, items: &[RawItem]) -> Vec<TransformedItem> {
        items.iter().map(|item| self.transform_item(item)).collect()
    }

    /// Transform a single item.
    #[must_use]
    pub fn transform_item(&self, item: &RawItem) -> TransformedItem {
        debug!(id = %item.id, columns = item.column_values.len(), "Transforming item");

        let mut column_values = Vec::with_capacity(item.column_values.len());
        let mut mappable_column_values = Map::new();

        for cv in &item.column_values {
            let kind = cv.column_type();
            let parsed = parse(cv.value.as_ref(), &kind);

            column_values.push(EnrichedColumnValue {
                id: cv.id.clone(),
                value: cv.value.clone(),
                text: cv.text.clone(),
                title: cv.title().to_string(),
                additional_info: additional_info(cv, &kind, parsed.as_ref()),
            });

            let mapped = select(&kind, cv.text.as_deref(), parsed);
            mappable_column_values.insert(cv.id.clone(), mapped.unwrap_or(Value::Null));
        }

        TransformedItem {
            id: item.id.clone(),
            name: item.name.clone(),
            created_at: item.created_at.clone(),
            state: item.state.clone(),
            email: self.envelope.email_for(&item.id),
            updated_at: format_timestamp(self.clock.now()),
            board: self.envelope.board(),
            group: self.envelope.group(),
            assets: Vec::new(),
            parent_item: None,
            subitems: Vec::new(),
            creator_id: creator_id(&item.column_values),
            column_values,
            mappable_column_values,
        }
    }
}

/// Transform items with the default envelope and the system clock.
#[must_use]
pub fn transform_items(items: &[RawItem]) -> Vec<TransformedItem> {
    Transformer::new(Envelope::default()).transform(items)
}

/// Decode a JSON array of items and transform it.
///
/// # Errors
/// Returns `CoreError::Json` if the input is not a JSON array of items.
pub fn transform_json(input: &str) -> Result<Vec<TransformedItem>> {
    let items: Vec<RawItem> = serde_json::from_str(input)?;
    Ok(transform_items(&items))
}

/// Creator id from the first non-empty `creation_log` column.
fn creator_id(columns: &[RawColumnValue]) -> Option<Value> {
    let log = columns.iter().find(|cv| {
        cv.column_type() == ColumnType::CreationLog && cv.value.as_ref().is_some_and(|v| !is_absent(v))
    })?;

    parse(log.value.as_ref(), &ColumnType::CreationLog)?
        .get("creator_id")
        .filter(|id| !id.is_null())
        .cloned()
}

/// Display enrichment for status, numeric and color columns, checked in that order.
fn additional_info(cv: &RawColumnValue, kind: &ColumnType, parsed: Option<&ParsedValue>) -> Option<String> {
    let record = parsed.and_then(ParsedValue::as_record);
    match (kind, record) {
        (ColumnType::Status, Some(record)) => {
            Some(display_info(cv.text.as_deref(), record, Value::from(DEFAULT_COLOR)))
        }
        (ColumnType::Status, None) => None,
        (ColumnType::Numbers, _) => cv
            .column
            .as_ref()
            .and_then(ColumnMeta::unit)
            .map(|unit| unit.to_string()),
        (_, Some(record)) if cv.id.starts_with(COLOR_COLUMN_PREFIX) => {
            let color = record
                .get("color")
                .cloned()
                .unwrap_or_else(|| Value::from(DEFAULT_COLOR));
            Some(display_info(cv.text.as_deref(), record, color))
        }
        _ => None,
    }
}

fn display_info(text: Option<&str>, record: &Map<String, Value>, color: Value) -> String {
    let label = text
        .filter(|t| !t.is_empty())
        .map_or_else(|| record.get("label").cloned().unwrap_or(Value::Null), Value::from);
    let changed_at = record.get("changed_at").cloned().unwrap_or_else(|| Value::from(""));

    json!({
        "label": label,
        "color": color,
        "changed_at": changed_at,
    })
    .to_string()
}
