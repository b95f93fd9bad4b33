//! Unified Result Model
//!
//! Every command maps what it did to this model before rendering output.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Dir,
    File,
    Link,
    Env,
    Fqrn,
    Error,
}

/// What happened to a filesystem artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Did not exist before
    Created,
    /// Existed with different content or target and was rewritten
    Replaced,
    /// Already as expected
    Unchanged,
    /// Computed only, nothing touched on disk
    Planned,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,

    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Error information for a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemError {
    pub code: String,
    pub message: String,
}

impl ItemError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The unified result item that all commands must produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Filesystem path, using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Symlink target for `link` items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Free-form payload (env value, resolved name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Identifier this item was produced for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub meta: Meta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ItemError>,
}

impl ResultItem {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            path: None,
            target: None,
            excerpt: None,
            source: None,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new directory result
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new(Kind::Dir)
        }
    }

    /// Create a new file result
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new(Kind::File)
        }
    }

    /// Create a new symlink result
    pub fn link(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            target: Some(target.into()),
            ..Self::new(Kind::Link)
        }
    }

    /// Create a new environment variable result
    pub fn env(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: Some(name.into()),
            excerpt: Some(value.into()),
            ..Self::new(Kind::Env)
        }
    }

    /// Create a new resolved role name result
    pub fn fqrn(name: impl Into<String>) -> Self {
        Self {
            excerpt: Some(name.into()),
            ..Self::new(Kind::Fqrn)
        }
    }

    /// Create a new error result
    pub fn error(error: ItemError) -> Self {
        Self {
            errors: vec![error],
            ..Self::new(Kind::Error)
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.meta.outcome = Some(outcome);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
