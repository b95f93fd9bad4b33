//! Error taxonomy for mocking operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while preparing the mock tree
#[derive(Debug, Error)]
pub enum MockError {
    /// Module identifier is neither a bare word nor `ns.coll.name[.sub...]`
    #[error("Config error: {0} is not a valid module name.")]
    InvalidModuleName(String),

    /// Bare role identifier that is not a single directory name
    #[error("Config error: {0} is not a valid role name.")]
    InvalidRoleName(String),

    /// Role metadata carries a namespace that is not a string
    #[error("Role namespace must be string, not {0}")]
    NamespaceNotString(String),

    /// Role metadata carries a role_name that is not a string
    #[error("Role name must be string, not {0}")]
    RoleNameNotString(String),

    /// A real directory sits where a symlink must be created
    #[error("cannot replace directory with symlink: {}", .0.display())]
    LinkOccupied(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl MockError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        MockError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error should end the process with the invalid-config status
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MockError::InvalidModuleName(_) | MockError::InvalidRoleName(_)
        )
    }
}

pub type MockResult<T> = Result<T, MockError>;
