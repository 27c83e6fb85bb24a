//! Column value parser.
//!
//! Raw column values arrive either as JSON-encoded strings or as already
//! decoded JSON. [`parse`] decodes them and extracts a fixed record shape per
//! [`ColumnType`]. Nothing here fails past the function boundary: errors are
//! logged and the column becomes absent.

use crate::column::{ColumnType, DEFAULT_COLOR};
use crate::error::{kind_name, ParseError};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

/// Result of parsing one column value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    /// A JSON object, either extracted for a known type or passed through.
    Record(Map<String, Value>),
    /// Any non-object value passed through unchanged.
    Scalar(Value),
}

impl ParsedValue {
    /// Wrap a decoded value. JSON `null` is treated as absent.
    #[must_use]
    pub fn from_decoded(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(map) => Some(Self::Record(map)),
            other => Some(Self::Scalar(other)),
        }
    }

    /// The record, if this value is one.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Record(map) => Some(map),
            Self::Scalar(_) => None,
        }
    }

    /// Look up a key on a record. Scalars have no keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_record().and_then(|map| map.get(key))
    }

    /// Convert into a plain JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Record(map) => Value::Object(map),
            Self::Scalar(value) => value,
        }
    }
}

/// Parse a raw column value for the given declared type.
///
/// Returns `None` for absent input, for shapes that do not fit the type, and
/// for any parse error. Errors are reported through `tracing` at warn level.
#[must_use]
pub fn parse(raw: Option<&Value>, kind: &ColumnType) -> Option<ParsedValue> {
    match try_parse(raw, kind) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(column_type = %kind, error = %err, "Error parsing column value");
            None
        }
    }
}

/// Parse a raw column value, surfacing errors instead of logging them.
///
/// # Errors
/// Returns `ParseError::Decode` when the raw text is not JSON and the type
/// only accepts records, and `ParseError::NotAnObject` /
/// `ParseError::UnexpectedShape` when a record is malformed in a way the
/// extraction cannot default around.
pub fn try_parse(raw: Option<&Value>, kind: &ColumnType) -> Result<Option<ParsedValue>, ParseError> {
    let Some(raw) = raw.filter(|value| !is_absent(value)) else {
        return Ok(None);
    };

    let decoded = match raw {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(_) if kind.accepts_scalar() => Value::String(text.clone()),
            Err(err) => return Err(ParseError::Decode(err)),
        },
        other => other.clone(),
    };

    decode(kind, decoded)
}

/// Whether a raw value counts as "no value": `null` or an empty string.
#[must_use]
pub fn is_absent(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Decoded `null` is absent for passthrough types; text fallbacks stringify it.
fn decode(kind: &ColumnType, value: Value) -> Result<Option<ParsedValue>, ParseError> {
    match (value, extractor(kind)) {
        (Value::Object(map), Some(extract)) => extract(&map).map(|record| Some(ParsedValue::Record(record))),
        (value, Some(_)) => non_record(kind, value),
        (value, None) => Ok(ParsedValue::from_decoded(value)),
    }
}

/// Fallback for types with an extractor that received something other than an object.
fn non_record(kind: &ColumnType, value: Value) -> Result<Option<ParsedValue>, ParseError> {
    let parsed = match kind {
        ColumnType::Status => ParsedValue::from_decoded(value),
        ColumnType::LongText => Some(ParsedValue::Record(record([("text", stringify(&value).into())]))),
        ColumnType::Email => {
            let text = stringify(&value);
            Some(ParsedValue::Record(record([
                ("email", text.clone().into()),
                ("text", text.into()),
            ])))
        }
        ColumnType::Phone => Some(ParsedValue::Record(record([("phone", stringify(&value).into())]))),
        ColumnType::CreationLog => return Err(ParseError::NotAnObject(kind_name(&value))),
        _ => None,
    };
    Ok(parsed)
}

type Extract = fn(&Map<String, Value>) -> Result<Map<String, Value>, ParseError>;

/// Record extractor for a type, or `None` for passthrough types.
fn extractor(kind: &ColumnType) -> Option<Extract> {
    let extract: Extract = match kind {
        ColumnType::CreationLog => creation_log,
        ColumnType::Status => status,
        ColumnType::Checkbox => checkbox,
        ColumnType::LongText => long_text,
        ColumnType::Link => link,
        ColumnType::Date => date,
        ColumnType::Timeline => timeline,
        ColumnType::People => people,
        ColumnType::Dropdown => dropdown,
        ColumnType::Tags => tags,
        ColumnType::Email => email,
        ColumnType::Phone => phone,
        ColumnType::File => file,
        ColumnType::BoardRelation | ColumnType::Dependency => linked_pulses,
        ColumnType::Mirror => mirror,
        ColumnType::Location => location,
        ColumnType::Country => country,
        ColumnType::Rating => rating,
        ColumnType::Vote => vote,
        ColumnType::Hour => hour,
        ColumnType::Week => week,
        ColumnType::WorldClock => world_clock,
        ColumnType::TimeTracking => time_tracking,
        ColumnType::Button => button,
        ColumnType::LastUpdated => last_updated,
        ColumnType::Doc => doc,
        ColumnType::Color(_) => color,
        ColumnType::Formula
        | ColumnType::ItemId
        | ColumnType::Text
        | ColumnType::Numbers
        | ColumnType::Other(_) => return None,
    };
    Some(extract)
}

/// Defaulting field access on a decoded record.
///
/// A key that is present keeps its value, even `null`; only a missing key
/// takes the default.
trait Lookup {
    fn field(&self, key: &str) -> Value;
    fn field_or(&self, key: &str, default: impl Into<Value>) -> Value;
    fn list(&self, key: &str) -> Value;
}

impl Lookup for Map<String, Value> {
    fn field(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or(Value::Null)
    }

    fn field_or(&self, key: &str, default: impl Into<Value>) -> Value {
        self.get(key).cloned().unwrap_or_else(|| default.into())
    }

    fn list(&self, key: &str) -> Value {
        self.field_or(key, Value::Array(Vec::new()))
    }
}

fn record<const N: usize>(pairs: [(&str, Value); N]) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn creation_log(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("created_at", v.field("created_at")),
        ("creator_id", v.field("creator_id")),
    ]))
}

fn status(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("label", v.field("label")),
        ("index", v.field("index")),
        ("post_id", v.field("post_id")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn checkbox(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    let checked = matches!(v.get("checked"), Some(Value::String(s)) if s == "true");
    Ok(record([
        ("checked", Value::Bool(checked)),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn long_text(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("text", v.field_or("text", "")),
        ("changed_at", v.field_or("changed_at", "")),
    ]))
}

fn link(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("url", v.field("url")),
        ("text", v.field("text")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn date(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("date", v.field("date")),
        ("time", v.field("time")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn timeline(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("from", v.field("from")),
        ("to", v.field("to")),
        ("changed_at", v.field("changed_at")),
        ("visualization_type", v.field("visualization_type")),
    ]))
}

/// People columns mix persons and teams in one list, tagged by `kind`.
fn people(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    let entries = v.list("personsAndTeams");
    let Value::Array(list) = &entries else {
        return Err(ParseError::UnexpectedShape {
            field: "personsAndTeams".to_string(),
            expected: "array",
            found: kind_name(&entries),
        });
    };

    let (mut persons, mut teams) = (0_usize, 0_usize);
    for entry in list {
        let Value::Object(entry) = entry else {
            return Err(ParseError::UnexpectedShape {
                field: "personsAndTeams[]".to_string(),
                expected: "object",
                found: kind_name(entry),
            });
        };
        match entry.get("kind").and_then(Value::as_str) {
            Some("person") => persons += 1,
            Some("team") => teams += 1,
            _ => {}
        }
    }

    Ok(record([
        ("personsAndTeams", entries),
        ("changed_at", v.field("changed_at")),
        ("persons_count", persons.into()),
        ("teams_count", teams.into()),
    ]))
}

fn dropdown(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("ids", v.list("ids")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn tags(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("tag_ids", v.list("tag_ids")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn email(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    let address = v.field("email");
    Ok(record([
        ("email", address.clone()),
        ("text", v.field_or("text", address)),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn phone(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("phone", v.field("phone")),
        ("countryShortName", v.field("countryShortName")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn file(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("files", v.list("files")),
        ("changed_at", v.field("changed_at")),
    ]))
}

/// Shared by `board_relation` and `dependency`.
fn linked_pulses(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("linkedPulseIds", v.list("linkedPulseIds")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn mirror(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("linkedPulseId", v.field("linkedPulseId")),
        ("linkedPulseColumnId", v.field("linkedPulseColumnId")),
    ]))
}

fn location(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("address", v.field("address")),
        ("lat", v.field("lat")),
        ("lng", v.field("lng")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn country(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("countryCode", v.field("countryCode")),
        ("countryName", v.field("countryName")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn rating(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("rating", v.field("rating")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn vote(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("votes", v.list("votes")),
        ("voters", v.list("voters")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn hour(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("hour", v.field("hour")),
        ("minute", v.field("minute")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn week(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("week", v.field("week")),
        ("startDate", v.field("startDate")),
        ("endDate", v.field("endDate")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn world_clock(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("timezone", v.field("timezone")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn time_tracking(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("duration", v.field("duration")),
        ("startDate", v.field("startDate")),
        ("status", v.field("status")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn button(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("label", v.field("label")),
        ("color", v.field("color")),
        ("url", v.field("url")),
    ]))
}

fn last_updated(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("updatedAt", v.field("updatedAt")),
        ("updater", v.field("updater")),
    ]))
}

fn doc(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("file_id", v.field("file_id")),
        ("changed_at", v.field("changed_at")),
    ]))
}

fn color(v: &Map<String, Value>) -> Result<Map<String, Value>, ParseError> {
    Ok(record([
        ("index", v.field("index")),
        ("post_id", v.field("post_id")),
        ("changed_at", v.field_or("changed_at", "")),
        ("label", v.field("label")),
        ("color", v.field_or("color", DEFAULT_COLOR)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse_str(raw: &str, tag: &str) -> Option<Value> {
        parse(Some(&Value::String(raw.to_string())), &ColumnType::from_tag(tag))
            .map(ParsedValue::into_value)
    }

    fn parse_json(raw: &Value, tag: &str) -> Option<Value> {
        parse(Some(raw), &ColumnType::from_tag(tag)).map(ParsedValue::into_value)
    }

    #[test]
    fn test_absent_inputs() {
        assert!(parse(None, &ColumnType::Status).is_none());
        assert!(parse(Some(&Value::Null), &ColumnType::Status).is_none());
        assert!(parse(Some(&json!("")), &ColumnType::Text).is_none());
        assert!(parse_str("null", "text").is_none());
    }

    #[test]
    fn test_checkbox() {
        let parsed = parse_str(r#"{"checked":"true","changed_at":"T"}"#, "checkbox");
        assert_eq!(parsed, Some(json!({"checked": true, "changed_at": "T"})));

        let parsed = parse_str(r#"{"checked":"false"}"#, "checkbox");
        assert_eq!(parsed, Some(json!({"checked": false, "changed_at": null})));

        assert_eq!(parse_str("true", "checkbox"), None);
    }

    #[test]
    fn test_status_record_and_scalar() {
        let parsed = parse_str(
            r#"{"index":1,"label":"In Progress","post_id":null,"changed_at":"T"}"#,
            "status",
        );
        assert_eq!(
            parsed,
            Some(json!({"label": "In Progress", "index": 1, "post_id": null, "changed_at": "T"}))
        );

        assert_eq!(parse_str("3", "status"), Some(json!(3)));
        assert_eq!(parse_str("Done", "status"), Some(json!("Done")));
    }

    #[test]
    fn test_malformed_structured_value_is_error() {
        let raw = json!("{not json");
        let result = try_parse(Some(&raw), &ColumnType::Link);
        assert!(matches!(result, Err(ParseError::Decode(_))));

        // The public entry point degrades to absent.
        assert!(parse(Some(&raw), &ColumnType::Link).is_none());
    }

    #[test]
    fn test_structured_type_with_scalar_is_absent() {
        let result = try_parse(Some(&json!("42")), &ColumnType::Date).unwrap();
        assert!(result.is_none());
        assert!(parse_json(&json!([1, 2]), "timeline").is_none());
    }

    #[test]
    fn test_unknown_type_passthrough() {
        let parsed = parse_str(r#"{"foo":"bar"}"#, "custom_widget");
        assert_eq!(parsed, Some(json!({"foo": "bar"})));

        assert_eq!(parse_str("plain words", "custom_widget"), Some(json!("plain words")));
    }

    #[test]
    fn test_scalar_types() {
        assert_eq!(parse_str("\"hello\"", "text"), Some(json!("hello")));
        assert_eq!(parse_str("hello", "text"), Some(json!("hello")));
        assert_eq!(parse_str("\"12.5\"", "numbers"), Some(json!("12.5")));
        assert_eq!(parse_str("7", "numbers"), Some(json!(7)));
        assert_eq!(parse_json(&json!({"a": 1}), "formula"), Some(json!({"a": 1})));
    }

    #[test]
    fn test_already_decoded_value() {
        let raw = json!({"url": "https://example.com", "text": "Example"});
        assert_eq!(
            parse_json(&raw, "link"),
            Some(json!({"url": "https://example.com", "text": "Example", "changed_at": null}))
        );
    }

    #[test]
    fn test_long_text() {
        assert_eq!(
            parse_json(&json!({}), "long_text"),
            Some(json!({"text": "", "changed_at": ""}))
        );
        assert_eq!(parse_str("just notes", "long_text"), Some(json!({"text": "just notes"})));
        assert_eq!(parse_str("12", "long_text"), Some(json!({"text": "12"})));
    }

    #[test]
    fn test_email_and_phone() {
        assert_eq!(
            parse_json(&json!({"email": "a@b.co"}), "email"),
            Some(json!({"email": "a@b.co", "text": "a@b.co", "changed_at": null}))
        );
        assert_eq!(
            parse_str("a@b.co", "email"),
            Some(json!({"email": "a@b.co", "text": "a@b.co"}))
        );
        assert_eq!(parse_str("5551234", "phone"), Some(json!({"phone": "5551234"})));
    }

    #[test]
    fn test_people_counts() {
        let raw = json!({
            "personsAndTeams": [
                {"id": 1, "kind": "person"},
                {"id": 2, "kind": "person"},
                {"id": 3, "kind": "team"}
            ],
            "changed_at": "T"
        });
        let parsed = parse_json(&raw, "people").unwrap();
        assert_eq!(parsed["persons_count"], json!(2));
        assert_eq!(parsed["teams_count"], json!(1));
        assert_eq!(parsed["personsAndTeams"].as_array().map(Vec::len), Some(3));

        let empty = parse_json(&json!({}), "people").unwrap();
        assert_eq!(empty["personsAndTeams"], json!([]));
        assert_eq!(empty["persons_count"], json!(0));
    }

    #[test]
    fn test_people_bad_shape_is_error() {
        let raw = json!({"personsAndTeams": null});
        let result = try_parse(Some(&raw), &ColumnType::People);
        assert!(matches!(result, Err(ParseError::UnexpectedShape { .. })));

        let raw = json!({"personsAndTeams": ["alice"]});
        assert!(parse(Some(&raw), &ColumnType::People).is_none());
    }

    #[test]
    fn test_list_defaults() {
        assert_eq!(
            parse_json(&json!({}), "dropdown"),
            Some(json!({"ids": [], "changed_at": null}))
        );
        assert_eq!(
            parse_json(&json!({"linkedPulseIds": [{"linkedPulseId": 9}]}), "dependency"),
            Some(json!({"linkedPulseIds": [{"linkedPulseId": 9}], "changed_at": null}))
        );
        assert_eq!(
            parse_json(&json!({}), "vote"),
            Some(json!({"votes": [], "voters": [], "changed_at": null}))
        );
    }

    #[test]
    fn test_color_defaults() {
        let parsed = parse_str(r#"{"index":2,"label":"Red"}"#, "color").unwrap();
        assert_eq!(
            parsed,
            json!({"index": 2, "post_id": null, "changed_at": "", "label": "Red", "color": "#00c875"})
        );

        let parsed = parse_json(&json!({"color": "#ff0000"}), "color_picker").unwrap();
        assert_eq!(parsed["color"], json!("#ff0000"));

        assert!(parse_str("\"red\"", "color").is_none());
    }

    #[test]
    fn test_creation_log() {
        let parsed = parse_str(
            r#"{"created_at":"2023-01-01T00:00:00Z","creator_id":"999"}"#,
            "creation_log",
        );
        assert_eq!(
            parsed,
            Some(json!({"created_at": "2023-01-01T00:00:00Z", "creator_id": "999"}))
        );

        let result = try_parse(Some(&json!("[1]")), &ColumnType::CreationLog);
        assert!(matches!(result, Err(ParseError::NotAnObject("array"))));
    }

    #[test]
    fn test_null_text_uses_text_fallbacks() {
        assert_eq!(parse_str("null", "long_text"), Some(json!({"text": "null"})));
        assert_eq!(
            parse_str("null", "email"),
            Some(json!({"email": "null", "text": "null"}))
        );
        assert_eq!(parse_str("null", "phone"), Some(json!({"phone": "null"})));

        assert!(parse_str("null", "status").is_none());
        assert!(parse_str("null", "link").is_none());
        assert!(parse_str("null", "custom_widget").is_none());
    }

    #[test]
    fn test_extracted_keys_match_declared_fields() {
        let derived = ["checked", "persons_count", "teams_count"];

        for kind in ColumnType::known() {
            let fields = kind.fields();
            if fields.is_empty() {
                continue;
            }

            let mut input = Map::new();
            for field in fields {
                let value = match *field {
                    "personsAndTeams" => json!([]),
                    other => json!(format!("{}-{other}", kind.tag())),
                };
                input.insert((*field).to_string(), value);
            }
            input.insert("unlisted_key".to_string(), json!("dropped"));

            let parsed = try_parse(Some(&Value::Object(input.clone())), &kind)
                .unwrap()
                .unwrap_or_else(|| panic!("{kind} parsed to nothing"));
            let record = parsed.as_record().expect("record output");

            let keys: Vec<&str> = record.keys().map(String::as_str).collect();
            assert_eq!(keys, fields.to_vec(), "keys for {kind}");
            assert!(!record.contains_key("unlisted_key"), "extra key kept for {kind}");

            for field in fields.iter().filter(|f| !derived.contains(*f)) {
                assert_eq!(record.get(*field), input.get(*field), "{kind}.{field}");
            }
        }
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_parse_failure_emits_warning() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let parsed = tracing::subscriber::with_default(subscriber, || {
            parse(Some(&json!("{not json")), &ColumnType::Link)
        });
        assert!(parsed.is_none());

        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("Error parsing column value"), "{logged}");
        assert!(logged.contains("column_type=link"), "{logged}");

        // Shape mismatches are not diagnostics.
        captured.0.lock().unwrap().clear();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(parse(Some(&json!("42")), &ColumnType::Link).is_none());
        });
        assert!(captured.0.lock().unwrap().is_empty());
    }
}
