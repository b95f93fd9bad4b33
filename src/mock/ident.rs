//! Identifier parsing
//!
//! Module identifiers are either a bare word (`foo`) or a dotted name of at
//! least three word segments (`ns.coll.mod`, `ns.coll.sub.mod`). Role
//! identifiers are `ns.coll.role` or any other single path segment taken as
//! a bare name.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::error::{MockError, MockResult};
use crate::core::paths::{collection_dir, is_single_segment, modules_dir, roles_dir};

static MODULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\w+|\w+\.\w+(?:\.\w+)+)$").expect("Invalid MODULE_RE regex"));

static ROLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\.(\w+)\.(\w+)$").expect("Invalid ROLE_RE regex"));

/// A validated module identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleId {
    Bare(String),
    Qualified {
        namespace: String,
        collection: String,
        /// Plugin subpath segments; the last one is the file stem
        path: Vec<String>,
    },
}

impl ModuleId {
    pub fn parse(raw: &str) -> MockResult<Self> {
        if !MODULE_RE.is_match(raw) {
            return Err(MockError::InvalidModuleName(raw.to_string()));
        }

        let mut parts = raw.split('.').map(str::to_string);
        let first = parts.next().unwrap_or_default();
        match parts.next() {
            None => Ok(ModuleId::Bare(first)),
            Some(collection) => Ok(ModuleId::Qualified {
                namespace: first,
                collection,
                path: parts.collect(),
            }),
        }
    }

    /// File stem of the stub
    pub fn stem(&self) -> &str {
        match self {
            ModuleId::Bare(name) => name,
            ModuleId::Qualified { path, .. } => path.last().map(String::as_str).unwrap_or_default(),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            ModuleId::Bare(_) => None,
            ModuleId::Qualified { namespace, .. } => Some(namespace),
        }
    }

    pub fn collection(&self) -> Option<&str> {
        match self {
            ModuleId::Bare(_) => None,
            ModuleId::Qualified { collection, .. } => Some(collection),
        }
    }

    /// Directory holding the stub
    pub fn stub_dir(&self, cache_dir: &Path) -> PathBuf {
        match self {
            ModuleId::Bare(_) => modules_dir(cache_dir),
            ModuleId::Qualified {
                namespace,
                collection,
                path,
            } => {
                let mut dir = collection_dir(cache_dir, namespace, collection)
                    .join("plugins")
                    .join("modules");
                if let Some((_, subpath)) = path.split_last() {
                    dir.extend(subpath);
                }
                dir
            }
        }
    }

    /// Full path of the stub file
    pub fn stub_file(&self, cache_dir: &Path) -> PathBuf {
        self.stub_dir(cache_dir).join(format!("{}.py", self.stem()))
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleId::Bare(name) => write!(f, "{}", name),
            ModuleId::Qualified {
                namespace,
                collection,
                path,
            } => write!(f, "{}.{}.{}", namespace, collection, path.join(".")),
        }
    }
}

/// A role identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleId {
    Bare(String),
    Qualified {
        namespace: String,
        collection: String,
        role: String,
    },
}

impl RoleId {
    /// Bare names must stay one directory below `<cache>/roles`
    pub fn parse(raw: &str) -> MockResult<Self> {
        match ROLE_RE.captures(raw) {
            Some(caps) => Ok(RoleId::Qualified {
                namespace: caps[1].to_string(),
                collection: caps[2].to_string(),
                role: caps[3].to_string(),
            }),
            None if is_single_segment(raw) => Ok(RoleId::Bare(raw.to_string())),
            None => Err(MockError::InvalidRoleName(raw.to_string())),
        }
    }

    /// Directory standing in for the installed role
    pub fn role_dir(&self, cache_dir: &Path) -> PathBuf {
        match self {
            RoleId::Bare(name) => roles_dir(cache_dir).join(name),
            RoleId::Qualified {
                namespace,
                collection,
                role,
            } => collection_dir(cache_dir, namespace, collection)
                .join("roles")
                .join(role),
        }
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleId::Bare(name) => write!(f, "{}", name),
            RoleId::Qualified {
                namespace,
                collection,
                role,
            } => write!(f, "{}.{}.{}", namespace, collection, role),
        }
    }
}
