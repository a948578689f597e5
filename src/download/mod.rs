//! Downloading application installers into the downloads directory.

use anyhow::Context;
use log::{debug, info, warn};
use percent_encoding::percent_decode_str;
use reqwest::Url;
use std::path::{Path, PathBuf};

use crate::catalog::AppDescriptor;
use crate::http::HttpClient;
use crate::runtime::Runtime;

/// Extension used when neither the URL nor its path carries one.
const DEFAULT_EXTENSION: &str = ".exe";

/// Outcome of one download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResult {
    /// The file was fetched and written.
    Downloaded { path: PathBuf, bytes: u64 },
    /// A file with the derived name was already present; nothing was fetched.
    AlreadyExists(PathBuf),
    /// Nothing usable on disk. Holds a readable reason.
    Failed(String),
}

impl DownloadResult {
    /// Local file to install from, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DownloadResult::Downloaded { path, .. } | DownloadResult::AlreadyExists(path) => {
                Some(path)
            }
            DownloadResult::Failed(_) => None,
        }
    }
}

/// Local file name for a download.
///
/// Uses the last segment of the URL path, percent-decoded, when it has a non-empty
/// extension. Otherwise the name is synthesized as `<AppNameWithoutSpaces>_Setup<ext>`,
/// where `<ext>` is the URL path's extension or `.exe`.
pub fn derive_file_name(app_name: &str, url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");
    let segment = single_component(&percent_decode_str(segment).decode_utf8_lossy());

    if has_extension(Path::new(&segment)) {
        return segment;
    }

    let extension = Path::new(url.path())
        .extension()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let stem: String = single_component(app_name)
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    format!("{}_Setup{}", stem, extension)
}

/// `foo.` counts as having no extension.
fn has_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| !ext.is_empty())
}

/// Replaces path separators so the name stays inside the downloads directory.
fn single_component(name: &str) -> String {
    name.chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

/// Fetches installers over HTTP into a downloads directory that doubles as a cache
/// keyed by file name.
#[derive(Clone)]
pub struct Downloader {
    http_client: HttpClient,
    downloads_dir: PathBuf,
}

impl Downloader {
    pub fn new(http_client: HttpClient, downloads_dir: PathBuf) -> Self {
        Self {
            http_client,
            downloads_dir,
        }
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    /// Downloads the installer for `app`.
    ///
    /// An existing file with the derived name is reused as is: no request is made and
    /// its content is not compared with the remote resource. Failures are returned as
    /// [`DownloadResult::Failed`], never as errors.
    #[tracing::instrument(skip(self, runtime, app), fields(app = app.display_name()))]
    pub async fn download<R: Runtime>(&self, runtime: &R, app: &AppDescriptor) -> DownloadResult {
        let (name, raw_url) = match (app.name(), app.download_url()) {
            (Some(name), Some(url)) => (name, url),
            _ => {
                warn!("Skipping descriptor without name or download URL: {:?}", app);
                return DownloadResult::Failed(format!(
                    "Error: The download URL or name for '{}' is invalid.",
                    app.name.as_deref().unwrap_or_default()
                ));
            }
        };

        let url = match Url::parse(raw_url) {
            Ok(url) => url,
            Err(e) => {
                return DownloadResult::Failed(format!(
                    "Error downloading {}: invalid URL '{}': {}",
                    name, raw_url, e
                ));
            }
        };

        let path = self.downloads_dir.join(derive_file_name(name, &url));
        if runtime.exists(&path) {
            info!("{:?} already exists, skipping download", path);
            return DownloadResult::AlreadyExists(path);
        }

        debug!("Downloading {} to {:?}", url, path);
        let result = self
            .http_client
            .download_file(url.as_str(), || {
                runtime
                    .create_new_file(&path)
                    .with_context(|| format!("Failed to create {:?}", path))
            })
            .await;

        match result {
            Ok(bytes) => {
                info!("Downloaded {} bytes to {:?}", bytes, path);
                DownloadResult::Downloaded { path, bytes }
            }
            Err(e) => DownloadResult::Failed(format!("Error downloading {}: {:#}", name, e)),
        }
    }
}
