//! Executable location and privilege information.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn exe_dir_impl(&self) -> Result<PathBuf> {
        let exe = env::current_exe().context("Failed to locate the running executable")?;
        exe.parent()
            .map(|p| p.to_path_buf())
            .with_context(|| format!("Executable path {:?} has no parent directory", exe))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_privileged_impl(&self) -> bool {
        #[cfg(unix)]
        return nix::unistd::geteuid().as_raw() == 0;

        #[cfg(windows)]
        return is_elevated::is_elevated();
    }
}
