use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Workspace root, resolved relative to this crate's manifest.
pub fn repo_root() -> Result<PathBuf> {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask is expected to live at <workspace>/xtask")
}
