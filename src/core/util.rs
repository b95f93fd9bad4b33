//! Common utilities

use std::path::{Path, PathBuf};
use xxhash_rust::xxh3::xxh3_64;

/// Compute the xxh3 hash of bytes as 16 hex digits
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Per-project cache root: `<user cache>/lintmock/<hash of project path>`
///
/// The user cache is `$XDG_CACHE_HOME`, else `$HOME/.cache`. With neither set
/// the tree lives inside the project at `.cache/lintmock`.
pub fn default_cache_dir(project_dir: &Path) -> PathBuf {
    default_cache_dir_with(project_dir, |key| std::env::var(key).ok())
}

pub fn default_cache_dir_with(
    project_dir: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    let user_cache = env("XDG_CACHE_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env("HOME")
                .filter(|v| !v.is_empty())
                .map(|home| PathBuf::from(home).join(".cache"))
        });

    match user_cache {
        Some(base) => {
            let key = hash_bytes(project_dir.to_string_lossy().as_bytes());
            base.join("lintmock").join(key)
        }
        None => project_dir.join(".cache").join("lintmock"),
    }
}

/// Drop repeated entries, keeping the first occurrence
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
