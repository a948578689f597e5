//! Interactive command loop: menu, selection, batch run, pause.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use crate::{
    batch::process_all,
    catalog::Catalog,
    download::Downloader,
    menu,
    report::Reporter,
    runtime::Runtime,
};

pub mod config;
mod paths;
mod selection;

pub use paths::{DOWNLOADS_DIR, MANIFEST_FILE};
pub use selection::{Selection, SelectionError, parse};

use config::Config;

/// State of the command loop between inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingInput,
    Terminated,
}

/// Loads the catalog, prepares the downloads directory and runs the menu until exit.
///
/// Startup failures are reported and followed by a key-press prompt; they do not
/// produce an error, so the process still exits normally.
#[tracing::instrument(skip_all)]
pub async fn run<R: Runtime, W: Write>(config: Config<R>, mut reporter: Reporter<W>) -> Result<()> {
    let Config {
        runtime,
        downloader,
        manifest_path,
    } = config;

    let startup = Catalog::load(&runtime, &manifest_path).and_then(|catalog| {
        let dir = downloader.downloads_dir();
        runtime
            .create_dir_all(dir)
            .with_context(|| format!("Failed to create downloads directory {:?}", dir))?;
        Ok(catalog)
    });

    let catalog = match startup {
        Ok(catalog) => catalog,
        Err(e) => return report_startup_failure(&runtime, &mut reporter, &e),
    };
    info!("Loaded {} application(s)", catalog.len());

    let mut command_loop = CommandLoop::new(&runtime, &downloader, &catalog, reporter);
    command_loop.run().await
}

/// Prints a fatal startup error and waits for a key press before the process exits.
pub fn report_startup_failure<R: Runtime, W: Write>(
    runtime: &R,
    reporter: &mut Reporter<W>,
    error: &anyhow::Error,
) -> Result<()> {
    reporter.error(format!("Error: {:#}", error))?;
    reporter.line("Press any key to exit...")?;
    runtime.wait_for_key()
}

/// The menu read-eval loop over a loaded catalog.
pub struct CommandLoop<'a, R: Runtime, W: Write> {
    runtime: &'a R,
    downloader: &'a Downloader,
    catalog: &'a Catalog,
    reporter: Reporter<W>,
    state: LoopState,
    show_admin_warning: bool,
    clear_before_menu: bool,
}

impl<'a, R: Runtime, W: Write> CommandLoop<'a, R, W> {
    pub fn new(
        runtime: &'a R,
        downloader: &'a Downloader,
        catalog: &'a Catalog,
        reporter: Reporter<W>,
    ) -> Self {
        Self {
            runtime,
            downloader,
            catalog,
            reporter,
            state: LoopState::AwaitingInput,
            show_admin_warning: !runtime.is_privileged(),
            clear_before_menu: true,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Shows the menu and handles inputs until the loop terminates.
    pub async fn run(&mut self) -> Result<()> {
        while self.state == LoopState::AwaitingInput {
            if self.clear_before_menu {
                self.runtime.clear_screen()?;
            }
            menu::render(&mut self.reporter, self.catalog, self.show_admin_warning)?;
            let input = menu::read_selection(self.runtime)?;
            self.step(input.as_deref()).await?;
        }

        self.runtime.clear_screen()?;
        self.reporter.line("Exiting application...")?;
        Ok(())
    }

    /// Handles one input line. `None` (end of input) terminates like an exit command.
    ///
    /// A batch run is followed by a key-press pause; invalid input is reported
    /// without pausing and without clearing the screen before the next menu.
    #[tracing::instrument(skip(self))]
    pub async fn step(&mut self, input: Option<&str>) -> Result<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        let Some(input) = input else {
            debug!("End of input");
            self.state = LoopState::Terminated;
            return Ok(self.state);
        };

        let catalog = self.catalog;
        let apps = catalog.apps();
        let batch = match parse(input, catalog.len()) {
            Ok(Selection::Exit) => {
                self.state = LoopState::Terminated;
                return Ok(self.state);
            }
            Ok(Selection::All) => apps,
            Ok(Selection::One(k)) => &apps[k - 1..k],
            Err(e) => {
                debug!("Rejected input {:?}: {:?}", input, e);
                self.reporter.blank()?;
                self.reporter.error(e)?;
                self.clear_before_menu = false;
                return Ok(self.state);
            }
        };

        self.runtime.clear_screen()?;
        process_all(self.runtime, self.downloader, batch, &mut self.reporter).await?;

        self.reporter.blank()?;
        self.reporter
            .success("Process finished. Press any key to return to the menu...")?;
        self.runtime.wait_for_key()?;
        self.clear_before_menu = true;

        Ok(self.state)
    }
}
