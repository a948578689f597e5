//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Executable location and privilege checks
//! - `fs` - File system operations (read, create, directory)
//! - `process` - Launching installers (wait for exit, or open and detach)
//! - `user` - Console interaction (line input, key press, screen clearing)

mod env;
mod fs;
mod process;
mod user;

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub use process::LaunchCommand;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    /// Directory containing the running executable.
    fn exe_dir(&self) -> Result<PathBuf>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;

    /// Create a new file for writing. Fails if something already exists at `path`.
    fn create_new_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>>;

    // Privilege
    fn is_privileged(&self) -> bool;

    // Console
    /// Read one line from standard input without its line terminator.
    /// Returns `None` once input is exhausted.
    fn read_line(&self) -> Result<Option<String>>;
    fn wait_for_key(&self) -> Result<()>;
    fn clear_screen(&self) -> Result<()>;

    // Processes
    /// Launch a command through the shell and wait for it to exit.
    /// Returns the exit code when the platform reports one.
    async fn run_to_completion(&self, command: &LaunchCommand) -> Result<Option<i32>>;

    /// Open a file with its default handler and return as soon as the launch succeeded.
    fn open_detached(&self, path: &Path) -> Result<()>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn exe_dir(&self) -> Result<PathBuf> {
        self.exe_dir_impl()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn create_new_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        self.create_new_file_impl(path)
    }

    fn is_privileged(&self) -> bool {
        self.is_privileged_impl()
    }

    fn read_line(&self) -> Result<Option<String>> {
        self.read_line_impl()
    }

    fn wait_for_key(&self) -> Result<()> {
        self.wait_for_key_impl()
    }

    fn clear_screen(&self) -> Result<()> {
        self.clear_screen_impl()
    }

    async fn run_to_completion(&self, command: &LaunchCommand) -> Result<Option<i32>> {
        self.run_to_completion_impl(command).await
    }

    fn open_detached(&self, path: &Path) -> Result<()> {
        self.open_detached_impl(path)
    }
}
