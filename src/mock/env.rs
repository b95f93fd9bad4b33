//! Environment exports pointing the linted tool at the mock tree

use std::path::{Path, PathBuf};

use crate::core::paths::{collections_root, modules_dir, normalize_path, roles_dir};

#[cfg(windows)]
const PATH_SEP: &str = ";";
#[cfg(not(windows))]
const PATH_SEP: &str = ":";

/// Variables and the cache location each one must include
pub fn env_locations(cache_dir: &Path) -> [(&'static str, PathBuf); 3] {
    [
        ("ANSIBLE_LIBRARY", modules_dir(cache_dir)),
        ("ANSIBLE_ROLES_PATH", roles_dir(cache_dir)),
        ("ANSIBLE_COLLECTIONS_PATH", collections_root(cache_dir)),
    ]
}

/// Prepend `entry` to a separator-joined list unless already present
fn prepend_path(entry: &str, current: Option<&str>) -> String {
    let existing: Vec<&str> = current
        .unwrap_or_default()
        .split(PATH_SEP)
        .filter(|p| !p.is_empty())
        .collect();

    if existing.contains(&entry) {
        return existing.join(PATH_SEP);
    }

    std::iter::once(entry)
        .chain(existing)
        .collect::<Vec<_>>()
        .join(PATH_SEP)
}

/// Exported values, each prepended to the current value from `current`
pub fn ansible_env(
    cache_dir: &Path,
    current: impl Fn(&str) -> Option<String>,
) -> Vec<(String, String)> {
    env_locations(cache_dir)
        .into_iter()
        .map(|(name, path)| {
            let value = prepend_path(&normalize_path(&path), current(name).as_deref());
            (name.to_string(), value)
        })
        .collect()
}

/// Quote a value for POSIX shells
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn test_env_fresh() {
        let env = ansible_env(Path::new("/cache"), |_| None);
        assert_eq!(
            env,
            vec![
                ("ANSIBLE_LIBRARY".to_string(), "/cache/modules".to_string()),
                ("ANSIBLE_ROLES_PATH".to_string(), "/cache/roles".to_string()),
                (
                    "ANSIBLE_COLLECTIONS_PATH".to_string(),
                    "/cache/collections".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_env_prepends_existing() {
        let env = ansible_env(Path::new("/cache"), |k| match k {
            "ANSIBLE_ROLES_PATH" => Some("/etc/roles:/usr/roles".to_string()),
            _ => None,
        });
        assert_eq!(env[1].1, "/cache/roles:/etc/roles:/usr/roles");
    }

    #[test]
    fn test_env_does_not_duplicate() {
        let env = ansible_env(Path::new("/cache"), |k| match k {
            "ANSIBLE_LIBRARY" => Some("/x:/cache/modules".to_string()),
            _ => None,
        });
        assert_eq!(env[0].1, "/x:/cache/modules");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("/a b"), "'/a b'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }
}
