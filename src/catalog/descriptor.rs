use serde::Deserialize;

/// Label shown in the menu for a descriptor that has no name.
pub const UNNAMED_APP: &str = "Name not available";

/// One installable application, as listed in the manifest.
///
/// Every field is optional in the manifest. A descriptor is only processable
/// when both [`name`](Self::name) and [`download_url`](Self::download_url) are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppDescriptor {
    /// Informational grouping, not used for processing.
    pub category: Option<String>,
    pub name: Option<String>,
    pub download_url: Option<String>,
    pub silent_args: Option<String>,
}

impl AppDescriptor {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            download_url: Some(download_url.into()),
            ..Default::default()
        }
    }

    pub fn with_silent_args(mut self, args: impl Into<String>) -> Self {
        self.silent_args = Some(args.into());
        self
    }

    /// The name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// The download URL, if present and non-empty.
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref().filter(|s| !s.is_empty())
    }

    /// Silent install arguments, if present and not blank.
    pub fn silent_args(&self) -> Option<&str> {
        self.silent_args.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Name used for display, falling back to [`UNNAMED_APP`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_APP)
    }
}
