//! Application catalog loaded from the JSON manifest.

mod descriptor;

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::runtime::Runtime;

pub use descriptor::{AppDescriptor, UNNAMED_APP};

/// Ordered, read-only list of applications.
///
/// Menu entries are numbered from 1; entry `k` is `apps()[k - 1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    apps: Vec<AppDescriptor>,
}

impl Catalog {
    pub fn new(apps: Vec<AppDescriptor>) -> Self {
        Self { apps }
    }

    /// Reads and parses the manifest at `path`.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        if !runtime.exists(path) {
            anyhow::bail!("Manifest file {:?} not found.", path);
        }

        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read manifest {:?}", path))?;
        let catalog =
            Self::parse(&content).with_context(|| format!("Failed to parse manifest {:?}", path))?;

        debug!("Loaded {} application(s) from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Parses a manifest document: a JSON array of descriptors, or `null` for none.
    pub fn parse(content: &str) -> Result<Self> {
        let apps: Option<Vec<AppDescriptor>> = serde_json::from_str(content)?;
        Ok(Self::new(apps.unwrap_or_default()))
    }

    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Entry for a 1-based menu number.
    pub fn entry(&self, number: usize) -> Option<&AppDescriptor> {
        number.checked_sub(1).and_then(|i| self.apps.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    const MANIFEST: &str = r#"[
        {"Category": "Tools", "Name": "7-Zip", "DownloadUrl": "https://x/7z.exe", "SilentArgs": "/S"},
        {"Category": "Media", "Name": "VLC", "DownloadUrl": "https://x/vlc.msi", "SilentArgs": "/quiet"},
        {"Name": "Notepad++", "DownloadUrl": "https://x/npp.exe"}
    ]"#;

    #[test]
    fn test_load_manifest() {
        let path = PathBuf::from("/opt/multitool/apps.json");

        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .with(eq(path.clone()))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .with(eq(path.clone()))
            .returning(|_| Ok(MANIFEST.to_string()));

        let catalog = Catalog::load(&runtime, &path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.apps()[0].name(), Some("7-Zip"));
        assert_eq!(catalog.apps()[1].silent_args(), Some("/quiet"));
        assert_eq!(catalog.apps()[2].silent_args(), None);
    }

    #[test]
    fn test_load_missing_manifest_fails_without_reading() {
        let path = PathBuf::from("/opt/multitool/apps.json");

        // read_to_string has no expectation: calling it would panic.
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| false);

        let err = Catalog::load(&runtime, &path).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_malformed_manifest_fails() {
        let path = PathBuf::from("apps.json");

        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("[{\"Name\": ".to_string()));

        let err = Catalog::load(&runtime, &path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse manifest"));
    }

    #[test]
    fn test_parse_empty_and_null() {
        assert!(Catalog::parse("[]").unwrap().is_empty());
        assert!(Catalog::parse("null").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(Catalog::parse(r#"{"Name": "x"}"#).is_err());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let catalog = Catalog::parse(r#"[{"Name": "A", "Homepage": "https://a"}]"#).unwrap();
        assert_eq!(catalog.apps()[0].name(), Some("A"));
    }

    #[test]
    fn test_entry_is_one_based() {
        let catalog = Catalog::parse(MANIFEST).unwrap();
        assert_eq!(catalog.entry(0), None);
        assert_eq!(catalog.entry(1).and_then(|a| a.name()), Some("7-Zip"));
        assert_eq!(catalog.entry(3).and_then(|a| a.name()), Some("Notepad++"));
        assert_eq!(catalog.entry(4), None);
    }
}
