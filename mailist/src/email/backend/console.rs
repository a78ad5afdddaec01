//! Console backend: the dry-run mode
//!
//! Prints each message's recipient and subject to stdout instead of
//! sending it. No network activity, no pacing delay.

use async_trait::async_trait;
use tracing::info;

use crate::email::{Email, EmailError, EmailSender};

/// Dry-run delivery backend
///
/// # Examples
///
/// ```rust
/// use mailist::email::{ConsoleBackend, Email, EmailSender};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = ConsoleBackend::new();
///
/// let email = Email::new()
///     .to("maria@dcc.ufmg.br")
///     .from("fernando@dcc.ufmg.br")
///     .subject("Chamada de Trabalhos: SBLP 2026")
///     .text("Ola Maria!");
///
/// backend.send_batch(vec![email]).await?; // prints, sends nothing
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleBackend;

impl ConsoleBackend {
    /// Create a new console backend
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for ConsoleBackend {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        email.validate()?;

        let to = email.to.as_ref().ok_or(EmailError::NoRecipient)?;
        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;

        info!(to = %to, subject = %subject, "dry-run message");
        println!("TO: {to} | SUBJ: {subject}");

        Ok(())
    }

    async fn send_batch(&self, emails: Vec<Email>) -> Result<(), EmailError> {
        // Banner goes out even for an empty batch.
        println!("--- DRY RUN MODE ACTIVE (No emails will be sent) ---");
        for email in emails {
            self.send(email).await?;
        }
        Ok(())
    }
}
