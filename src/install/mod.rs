//! Launching downloaded installers.
//!
//! Without silent arguments the file is handed to the default handler and left running.
//! With silent arguments the installer is run through the shell and awaited; `.msi`
//! packages go through the package installer (`msiexec.exe /i "<file>" <args>`).

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::catalog::AppDescriptor;
use crate::runtime::{LaunchCommand, Runtime};

/// Executable that installs `.msi` packages.
pub const PACKAGE_INSTALLER: &str = "msiexec.exe";

/// Extension (case-insensitive) of files installed through [`PACKAGE_INSTALLER`].
const PACKAGE_EXTENSION: &str = "msi";

/// How a downloaded file is going to be launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    /// Open with the default file handler; do not wait.
    OpenWithDefault(PathBuf),
    /// Run through the shell and wait for exit.
    Run(LaunchCommand),
}

/// Result of one install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Handed to the default handler; completion is unknown.
    Opened,
    /// The silent installer exited.
    Completed { exit_code: Option<i32> },
    Failed(String),
}

fn is_package(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(PACKAGE_EXTENSION))
}

/// Decides how to launch `path` for `app`.
pub fn plan(app: &AppDescriptor, path: &Path) -> InstallPlan {
    let Some(silent_args) = app.silent_args() else {
        return InstallPlan::OpenWithDefault(path.to_path_buf());
    };

    if is_package(path) {
        InstallPlan::Run(LaunchCommand::new(
            PACKAGE_INSTALLER,
            format!("/i \"{}\" {}", path.display(), silent_args),
        ))
    } else {
        InstallPlan::Run(LaunchCommand::new(path, silent_args))
    }
}

/// Installs `app` from the downloaded file at `path`.
/// Failures are returned as [`InstallOutcome::Failed`], never as errors.
#[tracing::instrument(skip(runtime, app), fields(app = app.display_name()))]
pub async fn install<R: Runtime>(runtime: &R, app: &AppDescriptor, path: &Path) -> InstallOutcome {
    let outcome = match plan(app, path) {
        InstallPlan::OpenWithDefault(path) => {
            debug!("No silent arguments, opening {:?}", path);
            runtime.open_detached(&path).map(|()| InstallOutcome::Opened)
        }
        InstallPlan::Run(command) => {
            info!("Running {}", command);
            runtime
                .run_to_completion(&command)
                .await
                .map(|exit_code| InstallOutcome::Completed { exit_code })
        }
    };

    outcome.unwrap_or_else(|e| {
        warn!("Install of {} failed: {:#}", app.display_name(), e);
        InstallOutcome::Failed(format!(
            "Error during installation of {}: {:#}",
            app.display_name(),
            e
        ))
    })
}
