use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Manifest file name, looked up next to the executable.
pub const MANIFEST_FILE: &str = "apps.json";

/// Downloads directory name, created next to the executable.
pub const DOWNLOADS_DIR: &str = "Downloads";

/// Default manifest location: `<exe dir>/apps.json`.
#[tracing::instrument(skip(runtime))]
pub fn default_manifest_path<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let dir = runtime
        .exe_dir()
        .context("Could not determine the default manifest location")?;
    debug!("Using executable directory {:?}", dir);
    Ok(dir.join(MANIFEST_FILE))
}

/// Default downloads directory: `<exe dir>/Downloads`.
#[tracing::instrument(skip(runtime))]
pub fn default_downloads_dir<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let dir = runtime
        .exe_dir()
        .context("Could not determine the default downloads directory")?;
    Ok(dir.join(DOWNLOADS_DIR))
}
