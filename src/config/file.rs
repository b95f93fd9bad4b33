//! YAML config file

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::constants::DEFAULT_CONFIG_FILE;
use crate::core::error::{MockError, MockResult};
use crate::core::yaml::load_yaml;

/// Keys understood in the config file; unknown keys are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub cache_dir: Option<PathBuf>,
    pub mock_roles: Vec<String>,
    pub mock_modules: Vec<String>,
}

/// Config file to use: the explicit one, else `.ansible-lint` in the project
pub fn find_config(project_dir: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        }
    }
}

/// Parse a config file; an empty document yields the defaults
pub fn load_file_config(path: &Path) -> MockResult<FileConfig> {
    match load_yaml(path)? {
        None => Ok(FileConfig::default()),
        Some(value) => serde_yaml::from_value(value).map_err(|source| MockError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}
