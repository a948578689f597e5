//! Main menu rendering and selection input.

use anyhow::Result;
use console::style;
use std::io::{self, Write};

use crate::catalog::Catalog;
use crate::report::Reporter;
use crate::runtime::Runtime;

/// Entries per menu row.
pub const COLUMNS: usize = 3;

/// Extra width added to the longest name to size each column.
const COLUMN_MARGIN: usize = 8;

const SEPARATOR_WIDTH: usize = 80;

pub const PROMPT: &str = "Enter a number (or 'exit' to quit): ";

const BANNER: &[&str] = &[
    "",
    "   __  __      _ _   _   _____         _ ",
    "  |  \\/  |_  _| | |_(_) |_   _|__  ___| |",
    "  | |\\/| | || | |  _| |   | |/ _ \\/ _ \\ |",
    "  |_|  |_|\\_,_|_|\\__|_|   |_|\\___/\\___/_|",
    "",
    "        Downloader & Installer",
    "",
];

/// Formats catalog entries into rows of [`COLUMNS`] padded cells.
///
/// Cells read `" [ i] Name"` and are padded to the longest name plus a margin.
/// Produces `ceil(n / COLUMNS)` rows for `n` entries.
pub fn entry_rows(catalog: &Catalog) -> Vec<String> {
    let width = catalog
        .apps()
        .iter()
        .map(|app| app.name.as_deref().map_or(0, |n| n.chars().count()))
        .max()
        .unwrap_or(0)
        + COLUMN_MARGIN;

    catalog
        .apps()
        .chunks(COLUMNS)
        .enumerate()
        .map(|(row, apps)| {
            apps.iter()
                .enumerate()
                .map(|(col, app)| {
                    let number = row * COLUMNS + col + 1;
                    let cell = format!(" [{:>2}] {}", number, app.display_name());
                    format!("{:<width$}", cell, width = width)
                })
                .collect::<String>()
        })
        .collect()
}

/// Writes the full menu, ending with the input prompt (no trailing newline).
pub fn render<W: Write>(
    reporter: &mut Reporter<W>,
    catalog: &Catalog,
    show_admin_warning: bool,
) -> io::Result<()> {
    for line in BANNER {
        reporter.line(style(line).red().bold())?;
    }

    if show_admin_warning {
        reporter.blank()?;
        reporter.line("[WARNING] Run this tool as Administrator for best results.")?;
    }
    reporter.blank()?;
    reporter.success(" [0] Download & Install ALL")?;
    reporter.blank()?;
    reporter.line("Or select an individual application:")?;

    for row in entry_rows(catalog) {
        reporter.line(row)?;
    }

    reporter.blank()?;
    reporter.line("-".repeat(SEPARATOR_WIDTH))?;
    reporter.prompt(PROMPT)
}

/// Reads the raw selection line. `None` means input is exhausted.
pub fn read_selection<R: Runtime>(runtime: &R) -> Result<Option<String>> {
    runtime.read_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AppDescriptor;
    use crate::report::testing::{capture, output};
    use crate::runtime::MockRuntime;

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::new(
            names
                .iter()
                .map(|n| AppDescriptor::new(*n, format!("https://x/{}.exe", n)))
                .collect(),
        )
    }

    #[test]
    fn test_rows_wrap_every_three_entries() {
        for n in 0..=10usize {
            let names: Vec<String> = (0..n).map(|i| format!("App{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let rows = entry_rows(&catalog(&refs));
            assert_eq!(rows.len(), n.div_ceil(COLUMNS), "n = {}", n);
        }
    }

    #[test]
    fn test_cells_are_padded_to_longest_name_plus_margin() {
        let rows = entry_rows(&catalog(&["Go", "Firefox", "VLC", "Zoom"]));
        // Longest name "Firefox" (7) + 8
        let width = 15;
        assert_eq!(
            rows[0],
            format!(
                "{:<w$}{:<w$}{:<w$}",
                " [ 1] Go",
                " [ 2] Firefox",
                " [ 3] VLC",
                w = width
            )
        );
        assert_eq!(rows[1], format!("{:<w$}", " [ 4] Zoom", w = width));
    }

    #[test]
    fn test_numbers_map_to_catalog_positions() {
        let names: Vec<String> = (1..=12).map(|i| format!("App{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let cat = catalog(&refs);
        let joined = entry_rows(&cat).join("\n");

        for k in 1..=cat.len() {
            let cell = format!("[{:>2}] {}", k, cat.entry(k).unwrap().display_name());
            assert!(joined.contains(&cell), "missing {}", cell);
        }
    }

    #[test]
    fn test_unnamed_entry_uses_placeholder() {
        let cat = Catalog::new(vec![AppDescriptor::default()]);
        let rows = entry_rows(&cat);
        assert!(rows[0].starts_with(" [ 1] Name not available"));
    }

    #[test]
    fn test_render_layout() {
        let cat = catalog(&["A", "B", "C", "D"]);
        let mut reporter = capture();
        render(&mut reporter, &cat, true).unwrap();
        let out = output(reporter);

        assert!(out.contains("[WARNING] Run this tool as Administrator"));
        let all = out.find(" [0] Download & Install ALL").unwrap();
        let first = out.find(" [ 1] A").unwrap();
        assert!(all < first);
        assert!(out.ends_with(PROMPT));
    }

    #[test]
    fn test_render_without_admin_warning() {
        let mut reporter = capture();
        render(&mut reporter, &Catalog::default(), false).unwrap();
        let out = output(reporter);

        assert!(!out.contains("[WARNING]"));
        assert!(out.contains(" [0] Download & Install ALL"));
        assert!(!out.contains(" [ 1]"));
    }

    #[test]
    fn test_read_selection_passes_raw_line() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_line()
            .returning(|| Ok(Some(" 2 ".to_string())));
        assert_eq!(read_selection(&runtime).unwrap().as_deref(), Some(" 2 "));
    }
}
