//! Placeholder module files

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants::MOCKED_MODULE_TEMPLATE;
use crate::core::error::{MockError, MockResult};
use crate::mock::ident::ModuleId;

/// Stub source for a module.
///
/// `{name}` is the dotted identifier as configured (`foo`, `ns.coll.sub.mod`),
/// not the stub's file path, so the DOCUMENTATION block names the module the
/// way playbooks reference it. Unset namespace/collection render empty.
pub fn render_stub(id: &ModuleId) -> String {
    MOCKED_MODULE_TEMPLATE
        .replace("{name}", &id.to_string())
        .replace("{namespace}", id.namespace().unwrap_or_default())
        .replace("{collection}", id.collection().unwrap_or_default())
}

/// Where the stub for `raw` would be written, without touching disk
pub fn stub_path(cache_dir: &Path, raw: &str) -> MockResult<PathBuf> {
    Ok(ModuleId::parse(raw)?.stub_file(cache_dir))
}

/// Write the stub for `raw`, overwriting any existing one.
///
/// Returns the stub path and whether it already existed.
pub fn make_module_stub(cache_dir: &Path, raw: &str) -> MockResult<(PathBuf, bool)> {
    let id = ModuleId::parse(raw)?;
    let dir = id.stub_dir(cache_dir);
    fs::create_dir_all(&dir).map_err(|e| MockError::io(&dir, e))?;

    let file = id.stub_file(cache_dir);
    let existed = file.exists();
    fs::write(&file, render_stub(&id)).map_err(|e| MockError::io(&file, e))?;
    debug!(module = %id, path = %file.display(), "wrote module stub");

    Ok((file, existed))
}
