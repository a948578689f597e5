use anyhow::Result;
use clap::Parser;
use multitool::commands::{self, config::Config};
use multitool::report::Reporter;
use multitool::runtime::RealRuntime;
use std::path::PathBuf;

/// multitool - Downloader & Installer
///
/// Shows a numbered menu of the applications listed in a JSON manifest, then downloads
/// and installs the selected one (or all of them), using each entry's silent install
/// arguments when present.
///
/// By default the manifest (apps.json) and the Downloads directory sit next to the
/// executable.
#[derive(Parser, Debug)]
#[command(author, version = env!("MULTITOOL_VERSION"), about)]
struct Cli {
    /// Manifest file (overrides <exe dir>/apps.json; also via MULTITOOL_MANIFEST)
    #[arg(
        long = "manifest",
        short = 'm',
        env = "MULTITOOL_MANIFEST",
        value_name = "PATH"
    )]
    pub manifest: Option<PathBuf>,

    /// Downloads directory (overrides <exe dir>/Downloads; also via MULTITOOL_DOWNLOADS)
    #[arg(
        long = "downloads",
        short = 'd',
        env = "MULTITOOL_DOWNLOADS",
        value_name = "DIR"
    )]
    pub downloads: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    let config = match Config::new(runtime, cli.manifest, cli.downloads) {
        Ok(config) => config,
        Err(e) => {
            let mut reporter = Reporter::stdout();
            return commands::report_startup_failure(&RealRuntime, &mut reporter, &e);
        }
    };
    commands::run(config, Reporter::stdout()).await
}
