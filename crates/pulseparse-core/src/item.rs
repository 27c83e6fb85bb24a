//! Raw and transformed item models.

use crate::column::ColumnType;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Default board placeholder attached to every transformed item.
pub const DEFAULT_BOARD_ID: &str = "7992652551";
/// Default group placeholder id.
pub const DEFAULT_GROUP_ID: &str = "topics";
/// Default group placeholder title.
pub const DEFAULT_GROUP_TITLE: &str = "Detected results";
/// Template for the synthesized item email; `{id}` is replaced by the item id.
pub const DEFAULT_EMAIL_TEMPLATE: &str =
    "retailbox-company_pulse_{id}_c5fda29b3ac05c31753d__17719660@use1.mx.monday.com";

/// An item as exported by the board API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawItem {
    /// Item identifier. Numeric ids are accepted and kept as text.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub column_values: Vec<RawColumnValue>,
}

impl RawItem {
    /// Create a raw item with an id and name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Set the item state.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Append a column value.
    #[must_use]
    pub fn with_column(mut self, column: RawColumnValue) -> Self {
        self.column_values.push(column);
        self
    }
}

/// One typed column value attached to a raw item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawColumnValue {
    #[serde(default)]
    pub id: String,

    /// Declared type tag (e.g. "status", "people").
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// JSON-encoded string, already decoded JSON, or absent.
    #[serde(default)]
    pub value: Option<Value>,

    /// Display text rendered by the board.
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub column: Option<ColumnMeta>,
}

impl RawColumnValue {
    /// Create a column value with an id and declared type.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// Set the raw value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the display text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the column title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.column.get_or_insert_with(ColumnMeta::default).title = Some(title.into());
        self
    }

    /// Set the column's encoded settings.
    #[must_use]
    pub fn with_settings(mut self, settings: impl Into<String>) -> Self {
        self.column.get_or_insert_with(ColumnMeta::default).settings_str = Some(settings.into());
        self
    }

    /// Resolve the declared type. A missing tag resolves to an empty `Other`.
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        ColumnType::from_tag(self.kind.as_deref().unwrap_or_default())
    }

    /// Column title, empty when the metadata has none.
    #[must_use]
    pub fn title(&self) -> &str {
        self.column
            .as_ref()
            .and_then(|c| c.title.as_deref())
            .unwrap_or_default()
    }
}

/// Column metadata carried alongside each value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColumnMeta {
    #[serde(default)]
    pub title: Option<String>,

    /// JSON-encoded column settings; numeric columns may carry a `unit`.
    #[serde(default)]
    pub settings_str: Option<String>,
}

impl ColumnMeta {
    /// The `unit` entry of the encoded settings, if the settings decode and have one.
    #[must_use]
    pub fn unit(&self) -> Option<Value> {
        let settings = self.settings_str.as_deref()?;
        match serde_json::from_str::<Value>(settings) {
            Ok(Value::Object(mut map)) => map.remove("unit"),
            _ => None,
        }
    }
}

/// Placeholder descriptors written into every transformed item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Envelope {
    pub board_id: String,
    pub group_id: String,
    pub group_title: String,
    /// Email template; `{id}` is replaced by the item id.
    pub email_template: String,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            board_id: DEFAULT_BOARD_ID.to_string(),
            group_id: DEFAULT_GROUP_ID.to_string(),
            group_title: DEFAULT_GROUP_TITLE.to_string(),
            email_template: DEFAULT_EMAIL_TEMPLATE.to_string(),
        }
    }
}

impl Envelope {
    /// Synthesized email address for an item.
    #[must_use]
    pub fn email_for(&self, id: &str) -> String {
        self.email_template.replace("{id}", id)
    }

    #[must_use]
    pub fn board(&self) -> Board {
        Board {
            id: self.board_id.clone(),
        }
    }

    #[must_use]
    pub fn group(&self) -> Group {
        Group {
            id: self.group_id.clone(),
            title: self.group_title.clone(),
            deleted: false,
            archived: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub title: String,
    pub deleted: bool,
    pub archived: bool,
}

/// A normalized item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformedItem {
    pub id: String,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub state: Option<String>,

    /// Synthesized from the id.
    pub email: String,

    /// Generation time (ISO 8601 UTC, `Z` suffix).
    pub updated_at: String,

    pub board: Board,
    pub group: Group,
    pub assets: Vec<Value>,
    pub parent_item: Option<Value>,
    pub subitems: Vec<Value>,

    /// Creator from the first `creation_log` column; always serialized, `null` if unknown.
    pub creator_id: Option<Value>,

    pub column_values: Vec<EnrichedColumnValue>,

    /// Column id to mappable value; every column id is present, absent values are `null`.
    pub mappable_column_values: Map<String, Value>,
}

/// A column value with its title and optional display enrichment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedColumnValue {
    pub id: String,
    pub value: Option<Value>,
    pub text: Option<String>,
    pub title: String,

    /// JSON-encoded enrichment for status, color, and numeric-unit columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_raw_item() {
        let item: RawItem = serde_json::from_value(json!({
            "id": "123",
            "name": "Item",
            "created_at": "2023-01-01T00:00:00Z",
            "state": "active",
            "column_values": [{
                "id": "status",
                "type": "status",
                "value": "{\"index\": 1}",
                "text": "Working",
                "column": {"title": "Status"}
            }]
        }))
        .unwrap();

        assert_eq!(item.id, "123");
        assert_eq!(item.state.as_deref(), Some("active"));
        assert_eq!(item.column_values.len(), 1);
        assert_eq!(item.column_values[0].column_type(), ColumnType::Status);
        assert_eq!(item.column_values[0].title(), "Status");
    }

    #[test]
    fn test_numeric_id_and_missing_fields() {
        let item: RawItem = serde_json::from_value(json!({"id": 42})).unwrap();
        assert_eq!(item.id, "42");
        assert!(item.name.is_none());
        assert!(item.column_values.is_empty());

        let cv: RawColumnValue = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert_eq!(cv.column_type(), ColumnType::Other(String::new()));
        assert_eq!(cv.title(), "");
        assert!(cv.value.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let cv = RawColumnValue::new("numbers", "numbers")
            .with_value("12")
            .with_text("12")
            .with_title("Amount")
            .with_settings(r#"{"unit":{"symbol":"$"}}"#);

        assert_eq!(cv.title(), "Amount");
        assert_eq!(cv.value, Some(json!("12")));
        assert_eq!(
            cv.column.as_ref().and_then(ColumnMeta::unit),
            Some(json!({"symbol": "$"}))
        );
    }

    #[test]
    fn test_unit_ignores_bad_settings() {
        let meta = ColumnMeta {
            title: None,
            settings_str: Some("{broken".to_string()),
        };
        assert!(meta.unit().is_none());

        let meta = ColumnMeta {
            title: None,
            settings_str: Some(r#"["unit"]"#.to_string()),
        };
        assert!(meta.unit().is_none());
        assert!(ColumnMeta::default().unit().is_none());
    }

    #[test]
    fn test_envelope_defaults() {
        let envelope = Envelope::default();
        assert_eq!(
            envelope.email_for("123"),
            "retailbox-company_pulse_123_c5fda29b3ac05c31753d__17719660@use1.mx.monday.com"
        );
        assert_eq!(envelope.board().id, "7992652551");
        let group = envelope.group();
        assert_eq!(group.id, "topics");
        assert_eq!(group.title, "Detected results");
        assert!(!group.deleted && !group.archived);
    }
}
