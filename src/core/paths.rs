//! Path utilities for the simulated install tree
//!
//! Every location under the cache directory is derived here so the layout
//! stays a pure function of the cache root and the identifier parts.

use std::path::{Component, Path, PathBuf};

use crate::core::constants::{COLLECTIONS_DIR, COLLECTIONS_NS_DIR, MODULES_DIR, ROLES_DIR};
use crate::core::error::{MockError, MockResult};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Absolute form of `path` without resolving symlinks.
///
/// `..` is folded lexically into its parent, so the result always ends in
/// a real directory name (unless it is the root).
pub fn absolute(path: &Path) -> MockResult<PathBuf> {
    let abs = std::path::absolute(path).map_err(|e| MockError::io(path, e))?;
    let mut normalized = PathBuf::new();
    for component in abs.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Whether `value` can be joined as exactly one path component
pub fn is_single_segment(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value.contains(['/', '\\'])
}

/// `<cache>/modules`
pub fn modules_dir(cache_dir: &Path) -> PathBuf {
    cache_dir.join(MODULES_DIR)
}

/// `<cache>/roles`
pub fn roles_dir(cache_dir: &Path) -> PathBuf {
    cache_dir.join(ROLES_DIR)
}

/// `<cache>/collections`
pub fn collections_root(cache_dir: &Path) -> PathBuf {
    cache_dir.join(COLLECTIONS_DIR)
}

/// `<cache>/collections/ansible_collections/<namespace>`
pub fn namespace_dir(cache_dir: &Path, namespace: &str) -> PathBuf {
    collections_root(cache_dir)
        .join(COLLECTIONS_NS_DIR)
        .join(namespace)
}

/// `<cache>/collections/ansible_collections/<namespace>/<collection>`
pub fn collection_dir(cache_dir: &Path, namespace: &str, collection: &str) -> PathBuf {
    namespace_dir(cache_dir, namespace).join(collection)
}
