//! Loading raw items from files, directories and readers.

use crate::error::{FsError, Result};
use pulseparse_core::error::kind_name;
use pulseparse_core::RawItem;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Extension of export files picked up from directories.
const INPUT_EXTENSION: &str = "json";

/// Decode export text into raw items.
///
/// Accepts an array of items or a single item object.
///
/// # Errors
/// Returns `FsError::Json` for malformed JSON and `FsError::UnsupportedInput`
/// when the top-level value is neither an array nor an object.
pub fn parse_items(text: &str, source_name: &str) -> Result<Vec<RawItem>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        other => Err(FsError::UnsupportedInput {
            source_name: source_name.to_string(),
            found: kind_name(&other),
        }),
    }
}

/// Load items from a single JSON file.
///
/// # Errors
/// Returns `FsError::InputNotFound` if the file is missing, or a read/decode error.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<RawItem>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FsError::InputNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let items = parse_items(&text, &path.display().to_string())?;
    debug!(path = %path.display(), count = items.len(), "Loaded input file");
    Ok(items)
}

/// Load items from every `*.json` file under a directory, in path order.
///
/// # Errors
/// Returns an error if traversal fails or any file cannot be decoded.
pub fn load_dir(path: impl AsRef<Path>) -> Result<Vec<RawItem>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FsError::InputNotFound(path.to_path_buf()));
    }

    let mut items = Vec::new();
    let mut files = 0_usize;

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        let is_export = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION));
        if !is_export {
            continue;
        }

        items.extend(load_file(entry.path())?);
        files += 1;
    }

    info!(path = %path.display(), files, count = items.len(), "Loaded input directory");
    Ok(items)
}

/// Load items from a file or a directory.
///
/// # Errors
/// See [`load_file`] and [`load_dir`].
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<RawItem>> {
    let path = path.as_ref();
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

/// Load items from a reader such as stdin.
///
/// # Errors
/// Returns an IO error if reading fails, or a decode error.
pub fn load_reader(mut reader: impl Read, source_name: &str) -> Result<Vec<RawItem>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_items(&text, source_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const ITEM: &str = r#"{"id": "1", "name": "One", "column_values": []}"#;

    #[test]
    fn test_parse_array_and_single_item() {
        let items = parse_items(&format!("[{ITEM}, {ITEM}]"), "test").unwrap();
        assert_eq!(items.len(), 2);

        let items = parse_items(ITEM, "test").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("One"));
    }

    #[test]
    fn test_parse_rejects_scalars() {
        let result = parse_items("42", "stdin");
        assert!(matches!(
            result,
            Err(FsError::UnsupportedInput { found: "number", .. })
        ));
        assert!(matches!(parse_items("[1", "stdin"), Err(FsError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = load_file(tmp.path().join("missing.json"));
        assert!(matches!(result, Err(FsError::InputNotFound(_))));
    }

    #[test]
    fn test_load_dir_sorted_json_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("b.json"), r#"[{"id": "b"}]"#).unwrap();
        fs::write(tmp.path().join("a.json"), r#"{"id": "a"}"#).unwrap();
        fs::write(tmp.path().join("nested/c.json"), r#"[{"id": "c1"}, {"id": "c2"}]"#).unwrap();
        fs::write(tmp.path().join("notes.txt"), "not an export").unwrap();

        let items = load_path(tmp.path()).unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c1", "c2"]);
    }

    #[test]
    fn test_load_reader() {
        let items = load_reader(format!("[{ITEM}]").as_bytes(), "stdin").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
    }
}
