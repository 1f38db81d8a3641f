//! CLI command implementation.

// The CLI prints its results
#![allow(clippy::print_stdout)]

use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::Path;
use tourney::{Outcome, SearchConfig, SearchReport, Square, UNVISITED, search_with_observer};

/// Error surfaced to the user at the CLI boundary.
#[derive(Debug)]
pub(crate) struct CliError(String);

impl CliError {
    /// Wrap a message.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for CliError {}

impl From<tourney::Error> for CliError {
    fn from(e: tourney::Error) -> Self {
        Self(e.to_string())
    }
}

/// Load a [`SearchConfig`] from a JSON file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub(crate) fn load_config(path: &Path) -> Result<SearchConfig, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::new(format!("failed to parse {}: {e}", path.display())))
}

/// Run the search and print the outcome plus the visit matrix.
///
/// # Errors
///
/// Returns an error when the search configuration is invalid.
pub(crate) fn execute(config: &SearchConfig, start: Square, quiet: bool) -> Result<(), CliError> {
    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(u64::try_from(config.generations).unwrap_or(u64::MAX));
        bar.set_style(
            ProgressStyle::with_template("{bar:40} gen {pos}/{len} best {msg}")
                .map_err(|e| CliError::new(e.to_string()))?,
        );
        bar
    };

    let report = search_with_observer(config, start, |_, stats| {
        bar.set_message(stats.best.to_string());
        bar.inc(1);
    })?;
    bar.finish_and_clear();

    match report.outcome {
        Outcome::Solved { generation } => {
            println!("Found at generation {generation}");
        }
        Outcome::Exhausted => {
            println!(
                "No complete tour in {} generations (best fitness {})",
                config.generations, report.best_fitness
            );
        }
    }
    print!("{}", format_matrix(&report));
    Ok(())
}

/// Render the visit matrix with rank 8 on top, `.` for unvisited cells.
fn format_matrix(report: &SearchReport) -> String {
    let mut out = String::from("   A  B  C  D  E  F  G  H\n");
    for (rank, row) in report.matrix.iter().enumerate().rev() {
        out.push_str(&format!("{} ", rank + 1));
        for &cell in row {
            if cell == UNVISITED {
                out.push_str("  .");
            } else {
                out.push_str(&format!("{cell:>3}"));
            }
        }
        out.push('\n');
    }
    out
}
