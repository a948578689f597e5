//! Process launching (run to completion, or open with the default handler and detach).

use anyhow::{Context, Result};
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use super::RealRuntime;

/// A program plus its argument string.
///
/// `args` is handed to the shell as written, so quoting inside it is preserved
/// (e.g. `/i "C:\Downloads\app.msi" /quiet`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: String,
}

impl LaunchCommand {
    pub fn new(program: impl Into<PathBuf>, args: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: args.into(),
        }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.program.display())
        } else {
            write!(f, "{} {}", self.program.display(), self.args)
        }
    }
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) async fn run_to_completion_impl(
        &self,
        command: &LaunchCommand,
    ) -> Result<Option<i32>> {
        debug!("Launching {}", command);
        let mut child = shell_command(command)
            .spawn()
            .with_context(|| format!("Failed to launch {}", command.program.display()))?;

        let status = child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for {}", command.program.display()))?;

        debug!("{} exited with {}", command.program.display(), status);
        Ok(status.code())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn open_detached_impl(&self, path: &Path) -> Result<()> {
        debug!("Opening {:?} with its default handler", path);
        open_command(path)
            .stdin(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to open {:?}", path))?;
        Ok(())
    }
}

#[cfg(windows)]
fn shell_command(command: &LaunchCommand) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("cmd");
    cmd.raw_arg(start_wait_line(command));
    cmd
}

/// Builds `/C start "" /wait "<program>" <args>` for `cmd`.
///
/// `start` launches through the shell, so installers that require elevation get a UAC
/// prompt instead of failing with ERROR_ELEVATION_REQUIRED. `/wait` keeps `cmd` alive
/// until the installer exits and passes its exit code through.
#[cfg(any(windows, test))]
fn start_wait_line(command: &LaunchCommand) -> String {
    let program = command.program.display();
    if command.args.trim().is_empty() {
        format!("/C start \"\" /wait \"{}\"", program)
    } else {
        format!("/C start \"\" /wait \"{}\" {}", program, command.args)
    }
}

#[cfg(not(windows))]
fn shell_command(command: &LaunchCommand) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("sh");
    cmd.arg("-c").arg(shell_line(command));
    cmd
}

/// Builds `exec '<program>' <args>` for `sh -c`.
#[cfg(not(windows))]
fn shell_line(command: &LaunchCommand) -> String {
    let program = shell_quote(&command.program.to_string_lossy());
    if command.args.trim().is_empty() {
        format!("exec {}", program)
    } else {
        format!("exec {} {}", program, command.args)
    }
}

#[cfg(not(windows))]
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(windows)]
fn open_command(path: &Path) -> std::process::Command {
    use std::os::windows::process::CommandExt;

    // `start` treats the first quoted argument as the window title.
    let mut cmd = std::process::Command::new("cmd");
    cmd.raw_arg(format!("/C start \"\" \"{}\"", path.display()));
    cmd
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_command_display() {
        let cmd = LaunchCommand::new("msiexec.exe", r#"/i "app.msi" /quiet"#);
        assert_eq!(cmd.to_string(), r#"msiexec.exe /i "app.msi" /quiet"#);

        let cmd = LaunchCommand::new("setup.exe", "");
        assert_eq!(cmd.to_string(), "setup.exe");
    }

    #[test]
    fn test_start_wait_line_quotes_program_only() {
        let cmd = LaunchCommand::new(r"C:\Tools\Downloads\My Setup.exe", r"/S /D=C:\Apps");
        assert_eq!(
            start_wait_line(&cmd),
            r#"/C start "" /wait "C:\Tools\Downloads\My Setup.exe" /S /D=C:\Apps"#
        );
    }

    #[test]
    fn test_start_wait_line_package_installer() {
        let cmd = LaunchCommand::new("msiexec.exe", r#"/i "C:\Downloads\vlc.msi" /quiet"#);
        assert_eq!(
            start_wait_line(&cmd),
            r#"/C start "" /wait "msiexec.exe" /i "C:\Downloads\vlc.msi" /quiet"#
        );
    }

    #[test]
    fn test_start_wait_line_without_args() {
        let cmd = LaunchCommand::new(r"C:\Downloads\foo.exe", "  ");
        assert_eq!(
            start_wait_line(&cmd),
            r#"/C start "" /wait "C:\Downloads\foo.exe""#
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_shell_line_quotes_program_only() {
        let cmd = LaunchCommand::new("/tmp/My App/setup.sh", "/S --dir \"x y\"");
        assert_eq!(shell_line(&cmd), "exec '/tmp/My App/setup.sh' /S --dir \"x y\"");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_shell_line_escapes_single_quotes() {
        let cmd = LaunchCommand::new("/tmp/it's/setup", "");
        assert_eq!(shell_line(&cmd), r"exec '/tmp/it'\''s/setup'");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_to_completion_returns_exit_code() {
        use crate::runtime::Runtime;

        let runtime = RealRuntime;
        let code = runtime
            .run_to_completion(&LaunchCommand::new("sh", "-c 'exit 3'"))
            .await
            .unwrap();
        assert_eq!(code, Some(3));

        let code = runtime
            .run_to_completion(&LaunchCommand::new("true", ""))
            .await
            .unwrap();
        assert_eq!(code, Some(0));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_to_completion_missing_program_is_not_zero() {
        use crate::runtime::Runtime;

        // The shell itself starts fine and reports 127 for an unknown command.
        let runtime = RealRuntime;
        let code = runtime
            .run_to_completion(&LaunchCommand::new("/nonexistent/setup.bin", "/S"))
            .await
            .unwrap();
        assert_ne!(code, Some(0));
    }
}
