//! Role name resolution
//!
//! Computes a fully-qualified role name (`<namespace>.<name>` or `<name>`)
//! from the `galaxy_info` section of a role's `meta/main.yml`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;

use crate::core::error::{MockError, MockResult};

/// Looks like a person's full name rather than a galaxy login
static AUTHOR_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+ \w+").expect("Invalid AUTHOR_NAME_RE regex"));

static ROLE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ansible-role-|ansible-").expect("Invalid ROLE_PREFIX_RE regex"));

/// Role metadata; values stay raw so type mismatches surface at resolution
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleMetadata {
    #[serde(default)]
    pub namespace: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub role_name: Option<Value>,
}

impl RoleMetadata {
    /// Read the `galaxy_info` section of a parsed `meta/main.yml`
    pub fn from_meta(meta: &Value) -> Option<Self> {
        let info = meta.get("galaxy_info")?;
        if info.is_null() {
            return None;
        }
        serde_yaml::from_value(info.clone()).ok()
    }
}

/// Missing, null and empty-string values count as unset
fn is_unset(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn describe(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{:?}", value))
}

/// Namespace part of the FQRN, without the trailing dot
pub fn role_namespace(meta: &RoleMetadata) -> MockResult<String> {
    let chosen = if is_unset(meta.namespace.as_ref()) {
        meta.author.as_ref()
    } else {
        meta.namespace.as_ref()
    };

    let namespace = match chosen {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.as_str(),
        Some(other) => return Err(MockError::NamespaceNotString(describe(other))),
    };

    if AUTHOR_NAME_RE.is_match(namespace) {
        return Ok(String::new());
    }
    Ok(namespace.to_string())
}

/// Role name from metadata, falling back to the project directory name
pub fn role_name(meta: &RoleMetadata, project_dir: &Path) -> MockResult<String> {
    match meta.role_name.as_ref() {
        Some(Value::String(s)) if !s.is_empty() => return Ok(s.clone()),
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(other) => return Err(MockError::RoleNameNotString(describe(other))),
    }

    let dir_name = project_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ROLE_PREFIX_RE.replace_all(&dir_name, "").into_owned())
}

/// Fully-qualified role name
pub fn role_fqrn(meta: &RoleMetadata, project_dir: &Path) -> MockResult<String> {
    let namespace = role_namespace(meta)?;
    let name = role_name(meta, project_dir)?;
    if namespace.is_empty() {
        Ok(name)
    } else {
        Ok(format!("{}.{}", namespace, name))
    }
}
