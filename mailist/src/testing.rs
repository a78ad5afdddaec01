//! Testing utilities
//!
//! Provides a mock email sender capturing the batch in memory for
//! assertions, plus optional failure injection for fail-fast tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::email::{Email, EmailError, EmailSender};

/// Mock email sender for tests
///
/// Captures sent emails in memory.
///
/// # Examples
///
/// ```rust
/// use mailist::email::{Email, EmailSender};
/// use mailist::testing::MockEmailSender;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mock = MockEmailSender::new();
///
/// let email = Email::new()
///     .to("maria@dcc.ufmg.br")
///     .from("fernando@dcc.ufmg.br")
///     .subject("Test")
///     .text("Ola");
///
/// mock.send(email).await?;
///
/// assert_eq!(mock.sent_count(), 1);
/// assert!(mock.was_sent_to("maria@dcc.ufmg.br"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<Email>>>,
    fail_on: Option<usize>,
}

impl MockEmailSender {
    /// Create a new mock email sender
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails when asked to send the message at the
    /// given zero-based batch index
    #[must_use]
    pub fn failing_on(index: usize) -> Self {
        Self {
            sent: Arc::default(),
            fail_on: Some(index),
        }
    }

    /// Number of emails sent so far
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// All sent emails, in send order
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_emails(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }

    /// Whether an email was sent to the given address
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn was_sent_to(&self, address: &str) -> bool {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .any(|email| email.to.as_deref() == Some(address))
    }

    /// The last sent email, if any
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn last_sent(&self) -> Option<Email> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        email.validate()?;

        let mut sent = self.sent.lock().unwrap();
        if self.fail_on == Some(sent.len()) {
            return Err(EmailError::smtp("injected transmission failure"));
        }
        sent.push(email);
        Ok(())
    }
}
