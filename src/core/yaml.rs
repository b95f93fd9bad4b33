//! YAML loading

use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::error::{MockError, MockResult};

/// Load a YAML document, returning `None` for empty or `null` documents
pub fn load_yaml(path: &Path) -> MockResult<Option<Value>> {
    let content = fs::read_to_string(path).map_err(|e| MockError::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_yaml::from_str(&content).map_err(|source| MockError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match value {
        Value::Null => None,
        other => Some(other),
    })
}

/// Like [`load_yaml`] but any failure, including a missing file, yields `None`
pub fn load_yaml_lenient(path: &Path) -> Option<Value> {
    if !path.is_file() {
        return None;
    }
    match load_yaml(path) {
        Ok(value) => value,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring unreadable YAML");
            None
        }
    }
}

/// Non-empty string field of a mapping, `None` for missing, empty or non-string values
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
