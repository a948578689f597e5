//! File system operations (read, create, directory).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context("Failed to read file to string")
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).context("Failed to create directory")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_new_file_impl(
        &self,
        path: &Path,
    ) -> Result<Box<dyn std::io::Write + Send>> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            // Downloaded installers are launched directly.
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o755);
        }
        let file = options.open(path).context("Failed to create file")?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("test.txt");

        runtime.create_dir_all(file_path.parent().unwrap()).unwrap();
        assert!(!runtime.exists(&file_path));

        {
            let mut writer = runtime.create_new_file(&file_path).unwrap();
            writer.write_all(b"hello").unwrap();
        }
        assert!(runtime.exists(&file_path));
        assert_eq!(runtime.read_to_string(&file_path).unwrap(), "hello");
    }

    #[test]
    fn test_create_new_file_refuses_existing_file() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("setup.exe");
        std::fs::write(&file_path, b"old").unwrap();

        assert!(runtime.create_new_file(&file_path).is_err());
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "old");
    }

    #[cfg(unix)]
    #[test]
    fn test_create_new_file_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("setup.sh");
        drop(runtime.create_new_file(&file_path).unwrap());

        let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o100, 0o100, "owner execute bit missing: {:o}", mode);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        assert!(runtime.read_to_string(&dir.path().join("missing.json")).is_err());
    }
}
