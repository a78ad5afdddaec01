//! Batch send command

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use dialoguer::Password;

use mailist::config::MailerConfig;
use mailist::contacts;
use mailist::curate;
use mailist::email::{compose, ConsoleBackend, Email, EmailError, EmailSender, SmtpBackend};
use mailist::template::MessageTemplate;

/// Send the templated call for papers to the curated list
pub struct SendCommand {
    csv: PathBuf,
    template: PathBuf,
    dry_run: bool,
}

impl SendCommand {
    /// Create a new command instance
    pub fn new(csv: PathBuf, template: PathBuf, dry_run: bool) -> Self {
        Self {
            csv,
            template,
            dry_run,
        }
    }

    /// Execute the command
    ///
    /// Dry run prints the batch and never touches the network. Live mode
    /// prompts for the password, opens one authenticated session, and
    /// fails fast: a rejected credential prints `Invalid password` and
    /// exits 1 before anything is transmitted; any other fault aborts the
    /// remainder of the batch.
    pub async fn execute(&self) -> Result<()> {
        let config = MailerConfig::from_env()?;

        let rows = contacts::read_rows(&self.csv)?;
        let template = MessageTemplate::load(&self.template)?;

        let batch: Vec<Email> = curate::filter_country(rows.into_iter(), &config.target_country)
            .map(|row| compose(&row, &template, &config))
            .collect();

        if self.dry_run {
            ConsoleBackend::new().send_batch(batch).await?;
            return Ok(());
        }

        let password = Password::new()
            .with_prompt(format!("Password for {}", config.sender))
            .interact()?;

        let backend = SmtpBackend::new(&config, &password)?;
        match backend.send_batch(batch).await {
            Ok(()) => Ok(()),
            Err(EmailError::AuthRejected) => {
                eprintln!("Invalid password");
                process::exit(1);
            }
            Err(err) => {
                eprintln!("An unexpected error occurred: {err}");
                process::exit(1);
            }
        }
    }
}
