//! Mailing-list curation command

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use mailist::contacts::{self, Destination};
use mailist::curate;

/// Curate a raw CSV export into the canonical mailing list
pub struct CurateCommand {
    input: PathBuf,
    output: String,
}

impl CurateCommand {
    /// Create a new command instance
    pub fn new(input: PathBuf, output: String) -> Self {
        Self { input, output }
    }

    /// Execute the command
    ///
    /// A missing input file surfaces as `Error: File '<path>' not found.`
    /// with exit code 1 (anyhow prints the chain from `main`).
    pub fn execute(&self) -> Result<()> {
        let rows = contacts::read_rows(&self.input)?;
        let curated: Vec<_> = curate::pipeline(rows).collect();
        let count = curated.len();

        let dest = Destination::parse(&self.output);
        contacts::write_rows(&dest, curated)?;

        // Status line only when the CSV itself did not go to stdout.
        if let Destination::Path(path) = &dest {
            println!(
                "{} {count} contacts -> {}",
                style("Curated").green().bold(),
                path.display()
            );
        }

        Ok(())
    }
}
