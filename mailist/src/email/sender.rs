//! Email sender trait abstraction

use async_trait::async_trait;

use super::{Email, EmailError};

/// Trait for sending emails
///
/// Implemented by all delivery backends (SMTP, console, test mocks).
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a single email
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if the email is incomplete or cannot be sent.
    async fn send(&self, email: Email) -> Result<(), EmailError>;

    /// Send a batch of emails sequentially, stopping at the first failure.
    ///
    /// Backends override this to add their mode of operation: the console
    /// backend prints a banner, the SMTP backend verifies the session up
    /// front and paces transmissions.
    ///
    /// # Errors
    ///
    /// Returns the first `EmailError`; remaining messages are never sent.
    async fn send_batch(&self, emails: Vec<Email>) -> Result<(), EmailError> {
        for email in emails {
            self.send(email).await?;
        }
        Ok(())
    }
}
