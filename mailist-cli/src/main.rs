//! mailist CLI tool

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CurateCommand, SendCommand};

#[derive(Parser)]
#[command(name = "mailist")]
#[command(version)]
#[command(about = "Curate a mailing list and send the call for papers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Curate a raw CSV export into the canonical mailing list
    Curate {
        /// Input CSV (needs at least Nome and Email columns)
        input: PathBuf,
        /// Output path, or `-` / `stdout` for standard output
        output: String,
    },
    /// Send the templated call for papers to the curated list
    Send {
        /// Curated CSV (Nome,FirstName,Surname,Email,Country)
        csv: PathBuf,
        /// Plain-text template carrying the <FirstName> token
        template: PathBuf,
        /// Print the batch instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Curate { input, output } => {
            let cmd = CurateCommand::new(input, output);
            cmd.execute()?;
        }
        Commands::Send {
            csv,
            template,
            dry_run,
        } => {
            let cmd = SendCommand::new(csv, template, dry_run);
            cmd.execute().await?;
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mailist=warn"));

    // Log to stderr: stdout carries the CSV and dry-run output.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
