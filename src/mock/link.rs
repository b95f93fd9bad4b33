//! Self-links that make the project under development look installed

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::config::Options;
use crate::core::constants::{GALAXY_MANIFEST, ROLE_META};
use crate::core::error::{MockError, MockResult};
use crate::core::model::Outcome;
use crate::core::paths::{absolute, is_single_segment, namespace_dir, roles_dir};
use crate::core::yaml::{load_yaml_lenient, str_field};
use crate::mock::fqrn::{role_fqrn, RoleMetadata};
use crate::mock::orchestrate::Artifact;

#[cfg(unix)]
fn symlink_dir(target: &Path, link_path: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link_path)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link_path: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link_path)
}

#[cfg(unix)]
fn remove_link(link_path: &Path) -> std::io::Result<()> {
    fs::remove_file(link_path)
}

#[cfg(windows)]
fn remove_link(link_path: &Path) -> std::io::Result<()> {
    fs::remove_dir(link_path).or_else(|_| fs::remove_file(link_path))
}

/// Make `link_path` a directory symlink to `target`.
///
/// Existence is checked without following links, so a dangling link is
/// replaced like any other stale one. Regular files are replaced; a real
/// directory is left alone and reported as [`MockError::LinkOccupied`].
pub fn ensure_symlink(link_path: &Path, target: &Path) -> MockResult<Outcome> {
    let outcome = match fs::symlink_metadata(link_path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Outcome::Created,
        Err(e) => return Err(MockError::io(link_path, e)),
        Ok(meta) if meta.file_type().is_symlink() => {
            let current = fs::read_link(link_path).map_err(|e| MockError::io(link_path, e))?;
            if current == target {
                return Ok(Outcome::Unchanged);
            }
            remove_link(link_path).map_err(|e| MockError::io(link_path, e))?;
            Outcome::Replaced
        }
        Ok(meta) if meta.is_dir() => {
            return Err(MockError::LinkOccupied(link_path.to_path_buf()));
        }
        Ok(_) => {
            fs::remove_file(link_path).map_err(|e| MockError::io(link_path, e))?;
            Outcome::Replaced
        }
    };

    symlink_dir(target, link_path).map_err(|e| MockError::io(link_path, e))?;
    Ok(outcome)
}

/// Link `<cache>/collections/ansible_collections/<ns>/<name>` to the project
/// when the project carries a `galaxy.yml` with both fields set.
pub fn link_self_collection(options: &Options) -> MockResult<Option<Artifact>> {
    let manifest = options.project_dir.join(GALAXY_MANIFEST);
    let Some(doc) = load_yaml_lenient(&manifest) else {
        return Ok(None);
    };
    let (Some(namespace), Some(name)) = (str_field(&doc, "namespace"), str_field(&doc, "name"))
    else {
        debug!(path = %manifest.display(), "galaxy.yml lacks namespace or name");
        return Ok(None);
    };
    if !is_single_segment(namespace) || !is_single_segment(name) {
        debug!(
            path = %manifest.display(),
            namespace = namespace,
            collection = name,
            "galaxy.yml names are not plain directory names"
        );
        return Ok(None);
    }

    let parent = namespace_dir(&options.cache_dir, namespace);
    fs::create_dir_all(&parent).map_err(|e| MockError::io(&parent, e))?;

    let link_path = parent.join(name);
    let target = absolute(&options.project_dir)?;
    let outcome = ensure_symlink(&link_path, &target)?;
    debug!(link = %link_path.display(), ?outcome, "self collection link");

    Ok(Some(
        Artifact::link(link_path, target, outcome).with_source(format!("{}.{}", namespace, name)),
    ))
}

/// Link `<cache>/roles/<fqrn>` to the project when it is a role with
/// `galaxy_info` in `meta/main.yml`.
pub fn link_self_role(options: &Options) -> MockResult<Option<Artifact>> {
    let meta_path = options.project_dir.join(ROLE_META);
    let Some(meta) = load_yaml_lenient(&meta_path).and_then(|doc| RoleMetadata::from_meta(&doc))
    else {
        return Ok(None);
    };

    let target = absolute(&options.project_dir)?;
    let fqrn = role_fqrn(&meta, &target)?;
    if fqrn.ends_with('.') || !is_single_segment(&fqrn) {
        debug!(path = %meta_path.display(), "cannot derive a role name");
        return Ok(None);
    }

    let parent = roles_dir(&options.cache_dir);
    fs::create_dir_all(&parent).map_err(|e| MockError::io(&parent, e))?;

    let link_path = parent.join(&fqrn);
    let outcome = ensure_symlink(&link_path, &target)?;
    debug!(link = %link_path.display(), ?outcome, "self role link");

    Ok(Some(Artifact::link(link_path, target, outcome).with_source(fqrn)))
}
