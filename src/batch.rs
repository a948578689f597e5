//! Sequential download-then-install over a selection of applications.

use anyhow::Result;
use log::info;
use std::io::Write;

use crate::catalog::AppDescriptor;
use crate::download::{DownloadResult, Downloader};
use crate::install::{self, InstallOutcome};
use crate::report::Reporter;
use crate::runtime::Runtime;

/// Per-batch tallies, for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub download_failures: usize,
    pub install_failures: usize,
}

/// Processes `items` in order, one at a time.
///
/// Each item is downloaded and, only if a local file is available, installed. A failure
/// is reported and the batch moves on to the next item. The returned error is limited to
/// failures writing to the console.
#[tracing::instrument(skip_all, fields(items = items.len()))]
pub async fn process_all<R: Runtime, W: Write>(
    runtime: &R,
    downloader: &Downloader,
    items: &[AppDescriptor],
    reporter: &mut Reporter<W>,
) -> Result<BatchSummary> {
    let total = items.len();
    let mut summary = BatchSummary::default();

    for (i, app) in items.iter().enumerate() {
        let header = format!("Processing ({}/{}): {}", i + 1, total, app.display_name());
        reporter.line(&header)?;
        reporter.line("=".repeat(header.chars().count()))?;
        summary.processed += 1;

        reporter.partial("-> Downloading... ")?;
        let download = downloader.download(runtime, app).await;
        match &download {
            DownloadResult::Downloaded { .. } => reporter.success("Completed!")?,
            DownloadResult::AlreadyExists(_) => {
                reporter.info("File already exists! Skipping download.")?
            }
            DownloadResult::Failed(message) => {
                reporter.blank()?;
                reporter.error(message)?;
                summary.download_failures += 1;
            }
        }

        let Some(path) = download.path() else {
            continue;
        };

        reporter.partial("-> Installing... ")?;
        match install::install(runtime, app, path).await {
            InstallOutcome::Opened => {
                reporter.info("No silent arguments. Opening the standard installer.")?
            }
            InstallOutcome::Completed { exit_code } => {
                reporter.success("Completed!")?;
                match exit_code {
                    Some(0) => {}
                    Some(code) => reporter.info(format!("(exit code {})", code))?,
                    None => reporter.info("(terminated without an exit code)")?,
                }
            }
            InstallOutcome::Failed(message) => {
                reporter.blank()?;
                reporter.error(message)?;
                summary.install_failures += 1;
            }
        }
        reporter.blank()?;
    }

    info!("Batch finished: {:?}", summary);
    Ok(summary)
}
