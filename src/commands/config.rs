use anyhow::Result;
use log::debug;
use reqwest::Client;

use std::path::PathBuf;

use super::paths::{default_downloads_dir, default_manifest_path};
use crate::{download::Downloader, http::HttpClient, runtime::Runtime};

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub downloader: Downloader,
    pub manifest_path: PathBuf,
}

impl<R: Runtime> Config<R> {
    /// Resolves paths (explicit values win over the executable-relative defaults)
    /// and builds the shared HTTP client.
    pub fn new(
        runtime: R,
        manifest_path: Option<PathBuf>,
        downloads_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let manifest_path = match manifest_path {
            Some(path) => path,
            None => default_manifest_path(&runtime)?,
        };
        let downloads_dir = match downloads_dir {
            Some(path) => path,
            None => default_downloads_dir(&runtime)?,
        };
        debug!(
            "Manifest: {:?}, downloads directory: {:?}",
            manifest_path, downloads_dir
        );

        let client = Client::builder().user_agent("multitool-cli").build()?;
        let downloader = Downloader::new(HttpClient::new(client), downloads_dir);

        Ok(Self {
            runtime,
            downloader,
            manifest_path,
        })
    }
}
