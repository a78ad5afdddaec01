//! Email builder with fluent API

use serde::{Deserialize, Serialize};

use super::EmailError;

/// A single outgoing message
///
/// ```rust
/// use mailist::email::Email;
///
/// let email = Email::new()
///     .to("maria@dcc.ufmg.br")
///     .from("fernando@dcc.ufmg.br")
///     .subject("Chamada de Trabalhos: SBLP 2026")
///     .text("Ola Maria!");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Email {
    /// Recipient (To)
    pub to: Option<String>,

    /// Sender (From)
    pub from: Option<String>,

    /// Subject line
    pub subject: Option<String>,

    /// Plain text body
    pub text: Option<String>,
}

impl Email {
    /// Create a new empty email
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipient (To)
    #[must_use]
    pub fn to(mut self, address: &str) -> Self {
        self.to = Some(address.to_string());
        self
    }

    /// Set the sender (From)
    #[must_use]
    pub fn from(mut self, address: &str) -> Self {
        self.from = Some(address.to_string());
        self
    }

    /// Set the subject line
    #[must_use]
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the plain text body
    #[must_use]
    pub fn text(mut self, body: &str) -> Self {
        self.text = Some(body.to_string());
        self
    }

    /// Check the message is complete enough to send.
    ///
    /// # Errors
    ///
    /// Returns the first missing part: recipient, sender, subject, body.
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.to.is_none() {
            return Err(EmailError::NoRecipient);
        }
        if self.from.is_none() {
            return Err(EmailError::NoSender);
        }
        if self.subject.is_none() {
            return Err(EmailError::NoSubject);
        }
        if self.text.is_none() {
            return Err(EmailError::NoContent);
        }
        Ok(())
    }
}
