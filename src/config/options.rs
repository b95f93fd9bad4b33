//! Resolved options

use std::path::{Path, PathBuf};

use crate::config::file::FileConfig;
use crate::core::error::MockResult;
use crate::core::paths::absolute;
use crate::core::util::{dedup_preserving_order, default_cache_dir};

/// Everything a mocking pass needs, resolved up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Root of the simulated install tree
    pub cache_dir: PathBuf,
    /// Root of the project being linted
    pub project_dir: PathBuf,
    pub mock_roles: Vec<String>,
    pub mock_modules: Vec<String>,
}

/// Merges config file values with command-line values
#[derive(Debug, Default)]
pub struct OptionsBuilder {
    file: FileConfig,
    cache_dir: Option<PathBuf>,
    extra_roles: Vec<String>,
    extra_modules: Vec<String>,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_config(mut self, file: FileConfig) -> Self {
        self.file = file;
        self
    }

    /// Cache dir from the command line or environment, wins over the file
    pub fn cache_dir(mut self, cache_dir: Option<PathBuf>) -> Self {
        self.cache_dir = cache_dir;
        self
    }

    pub fn mock_roles(mut self, roles: Vec<String>) -> Self {
        self.extra_roles = roles;
        self
    }

    pub fn mock_modules(mut self, modules: Vec<String>) -> Self {
        self.extra_modules = modules;
        self
    }

    pub fn build(self, project_dir: &Path) -> MockResult<Options> {
        let project_dir = absolute(project_dir)?;

        let cache_dir = match self.cache_dir.or(self.file.cache_dir) {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => project_dir.join(dir),
            None => default_cache_dir(&project_dir),
        };

        let mut mock_roles = self.file.mock_roles;
        mock_roles.extend(self.extra_roles);
        let mut mock_modules = self.file.mock_modules;
        mock_modules.extend(self.extra_modules);

        Ok(Options {
            cache_dir,
            project_dir,
            mock_roles: dedup_preserving_order(mock_roles),
            mock_modules: dedup_preserving_order(mock_modules),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_merge_file_first() {
        let file = FileConfig {
            cache_dir: None,
            mock_roles: vec!["a".to_string(), "b".to_string()],
            mock_modules: vec!["m".to_string()],
        };
        let options = OptionsBuilder::new()
            .file_config(file)
            .cache_dir(Some(PathBuf::from("/cache")))
            .mock_roles(vec!["b".to_string(), "c".to_string()])
            .mock_modules(vec!["n".to_string()])
            .build(Path::new("/project"))
            .unwrap();

        assert_eq!(options.mock_roles, vec!["a", "b", "c"]);
        assert_eq!(options.mock_modules, vec!["m", "n"]);
        assert_eq!(options.cache_dir, PathBuf::from("/cache"));
        assert_eq!(options.project_dir, PathBuf::from("/project"));
    }

    #[test]
    fn test_cache_dir_precedence() {
        let file = FileConfig {
            cache_dir: Some(PathBuf::from("/from-file")),
            ..Default::default()
        };
        let options = OptionsBuilder::new()
            .file_config(file.clone())
            .build(Path::new("/project"))
            .unwrap();
        assert_eq!(options.cache_dir, PathBuf::from("/from-file"));

        let options = OptionsBuilder::new()
            .file_config(file)
            .cache_dir(Some(PathBuf::from("/from-cli")))
            .build(Path::new("/project"))
            .unwrap();
        assert_eq!(options.cache_dir, PathBuf::from("/from-cli"));
    }

    #[test]
    fn test_relative_cache_dir_is_under_project() {
        let options = OptionsBuilder::new()
            .cache_dir(Some(PathBuf::from(".lint-cache")))
            .build(Path::new("/project"))
            .unwrap();
        assert_eq!(options.cache_dir, PathBuf::from("/project/.lint-cache"));
    }

    #[test]
    fn test_project_dir_parent_components_are_folded() {
        let options = OptionsBuilder::new()
            .cache_dir(Some(PathBuf::from("/cache")))
            .build(Path::new("/src/ansible-role-web/tasks/.."))
            .unwrap();
        assert_eq!(options.project_dir, PathBuf::from("/src/ansible-role-web"));

        let plain = OptionsBuilder::new()
            .build(Path::new("/src/ansible-role-web"))
            .unwrap();
        let dotted = OptionsBuilder::new()
            .build(Path::new("/src/ansible-role-web/tasks/.."))
            .unwrap();
        assert_eq!(plain.cache_dir, dotted.cache_dir);
    }

    #[test]
    fn test_default_cache_dir_is_absolute() {
        let options = OptionsBuilder::new().build(Path::new("/project")).unwrap();
        assert!(options.cache_dir.is_absolute());
        assert!(options.mock_roles.is_empty());
    }
}
