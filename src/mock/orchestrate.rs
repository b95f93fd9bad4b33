//! The mocking pass: role directories, module stubs, then self-links

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Options;
use crate::core::error::{MockError, MockResult};
use crate::core::model::{Kind, Outcome, ResultItem};
use crate::core::paths::normalize_path;
use crate::mock::ident::RoleId;
use crate::mock::link::{link_self_collection, link_self_role};
use crate::mock::stub::make_module_stub;

/// A filesystem entry produced by the pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: Kind,
    pub path: PathBuf,
    pub target: Option<PathBuf>,
    /// Identifier the artifact stands in for
    pub source: Option<String>,
    pub outcome: Outcome,
}

impl Artifact {
    pub fn dir(path: PathBuf, outcome: Outcome) -> Self {
        Self {
            kind: Kind::Dir,
            path,
            target: None,
            source: None,
            outcome,
        }
    }

    pub fn file(path: PathBuf, outcome: Outcome) -> Self {
        Self {
            kind: Kind::File,
            ..Self::dir(path, outcome)
        }
    }

    pub fn link(path: PathBuf, target: PathBuf, outcome: Outcome) -> Self {
        Self {
            kind: Kind::Link,
            target: Some(target),
            ..Self::dir(path, outcome)
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn to_result_item(&self) -> ResultItem {
        let path = normalize_path(&self.path);
        let mut item = match (&self.kind, &self.target) {
            (Kind::Link, Some(target)) => ResultItem::link(path, normalize_path(target)),
            (Kind::File, _) => {
                let mut item = ResultItem::file(path);
                item.meta.size = fs::metadata(&self.path).ok().map(|m| m.len());
                item
            }
            _ => ResultItem::dir(path),
        };
        if let Some(source) = &self.source {
            item = item.with_source(source.clone());
        }
        item.with_outcome(self.outcome)
    }
}

/// Create a directory for every configured role, stopping at the first invalid one
pub fn mock_roles(options: &Options) -> MockResult<Vec<Artifact>> {
    options
        .mock_roles
        .iter()
        .map(|raw| -> MockResult<Artifact> {
            let dir = RoleId::parse(raw)?.role_dir(&options.cache_dir);
            let outcome = if dir.is_dir() {
                Outcome::Unchanged
            } else {
                Outcome::Created
            };
            fs::create_dir_all(&dir).map_err(|e| MockError::io(&dir, e))?;
            debug!(role = %raw, path = %dir.display(), "mocked role");
            Ok(Artifact::dir(dir, outcome).with_source(raw.clone()))
        })
        .collect()
}

/// Write a stub for every configured module, stopping at the first invalid one
pub fn mock_modules(options: &Options) -> MockResult<Vec<Artifact>> {
    options
        .mock_modules
        .iter()
        .map(|raw| -> MockResult<Artifact> {
            let (path, existed) = make_module_stub(&options.cache_dir, raw)?;
            let outcome = if existed {
                Outcome::Replaced
            } else {
                Outcome::Created
            };
            Ok(Artifact::file(path, outcome).with_source(raw.clone()))
        })
        .collect()
}

/// Run the whole pass in order: roles, modules, self collection, self role
pub fn perform_mockings(options: &Options) -> MockResult<Vec<Artifact>> {
    let mut artifacts = mock_roles(options)?;
    artifacts.extend(mock_modules(options)?);
    artifacts.extend(link_self_collection(options)?);
    artifacts.extend(link_self_role(options)?);
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn options(roles: &[&str], modules: &[&str]) -> (TempDir, Options) {
        let temp = tempdir().unwrap();
        let project = temp.path().join("project");
        fs::create_dir_all(&project).unwrap();
        let options = Options {
            cache_dir: temp.path().join("cache"),
            project_dir: project,
            mock_roles: roles.iter().map(|s| s.to_string()).collect(),
            mock_modules: modules.iter().map(|s| s.to_string()).collect(),
        };
        (temp, options)
    }

    #[test]
    fn test_roles_and_modules_created_in_order() {
        let (_temp, options) = options(&["web", "acme.tools.db"], &["foo", "ns.coll.sub.mod"]);
        let artifacts = perform_mockings(&options).unwrap();

        let cache = &options.cache_dir;
        let paths: Vec<_> = artifacts.iter().map(|a| a.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                cache.join("roles/web"),
                cache.join("collections/ansible_collections/acme/tools/roles/db"),
                cache.join("modules/foo.py"),
                cache.join("collections/ansible_collections/ns/coll/plugins/modules/sub/mod.py"),
            ]
        );
        assert!(artifacts.iter().all(|a| a.outcome == Outcome::Created));
        assert!(paths[0].is_dir() && paths[1].is_dir());
        assert!(paths[2].is_file() && paths[3].is_file());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let (_temp, options) = options(&["web"], &["foo"]);
        perform_mockings(&options).unwrap();
        let second = perform_mockings(&options).unwrap();

        assert_eq!(second[0].outcome, Outcome::Unchanged);
        assert_eq!(second[1].outcome, Outcome::Replaced);
    }

    #[test]
    fn test_invalid_module_stops_the_pass() {
        let (_temp, options) = options(&[], &["good", "1bad!name", "later"]);
        let err = perform_mockings(&options).unwrap_err();

        assert!(matches!(err, MockError::InvalidModuleName(ref m) if m == "1bad!name"));
        assert!(options.cache_dir.join("modules/good.py").exists());
        assert!(!options.cache_dir.join("modules/later.py").exists());
    }

    #[test]
    fn test_role_escaping_cache_is_rejected() {
        let (temp, options) = options(&["web", "../../outside"], &[]);
        let err = perform_mockings(&options).unwrap_err();

        assert!(matches!(err, MockError::InvalidRoleName(ref r) if r == "../../outside"));
        assert!(err.is_config_error());
        assert!(options.cache_dir.join("roles/web").is_dir());
        assert!(!temp.path().join("outside").exists());
    }

    #[test]
    fn test_empty_config_touches_nothing() {
        let (_temp, options) = options(&[], &[]);
        assert!(perform_mockings(&options).unwrap().is_empty());
        assert!(!options.cache_dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_self_collection_included() {
        let (_temp, options) = options(&[], &[]);
        fs::write(
            options.project_dir.join("galaxy.yml"),
            "namespace: acme\nname: tools\n",
        )
        .unwrap();

        let artifacts = perform_mockings(&options).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].kind, Kind::Link);
        assert_eq!(artifacts[0].source.as_deref(), Some("acme.tools"));
    }

    #[test]
    fn test_artifact_to_result_item() {
        let (_temp, options) = options(&[], &["foo"]);
        let artifacts = mock_modules(&options).unwrap();
        let item = artifacts[0].to_result_item();

        assert_eq!(item.kind, Kind::File);
        assert_eq!(item.source.as_deref(), Some("foo"));
        assert_eq!(item.meta.outcome, Some(Outcome::Created));
        assert!(item.meta.size.unwrap() > 0);
    }
}
