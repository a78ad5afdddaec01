//! SMTP backend: live delivery
//!
//! Uses the `lettre` crate. One authenticated STARTTLS session serves the
//! whole batch: the session is verified before the first message, every
//! transmission is confirmed on stdout, and a fixed pause follows each one
//! to respect relay sending-rate limits. Any failure aborts the batch.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        client::{Tls, TlsParameters},
        response::{Category, Severity},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use crate::config::MailerConfig;
use crate::email::{Email, EmailError, EmailSender};

/// Live SMTP delivery backend
///
/// # Examples
///
/// ```rust,no_run
/// use mailist::config::MailerConfig;
/// use mailist::email::{Email, EmailSender, SmtpBackend};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MailerConfig::default();
/// let backend = SmtpBackend::new(&config, "secret")?;
///
/// let email = Email::new()
///     .to("maria@dcc.ufmg.br")
///     .from(&config.sender)
///     .subject(&config.subject)
///     .text("Ola Maria!");
///
/// backend.send_batch(vec![email]).await?;
/// # Ok(())
/// # }
/// ```
pub struct SmtpBackend {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    pacing: Duration,
}

impl SmtpBackend {
    /// Create a backend for the configured relay, authenticating with the
    /// sender address and the given password over STARTTLS.
    ///
    /// No connection is made yet; the session is opened and verified by
    /// [`EmailSender::send_batch`].
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Smtp` if the relay parameters are rejected by
    /// the transport builder.
    pub fn new(config: &MailerConfig, password: &str) -> Result<Self, EmailError> {
        let credentials = Credentials::new(config.sender.clone(), password.to_string());

        let tls_parameters = TlsParameters::new(config.smtp_host.clone())
            .map_err(|e| EmailError::smtp(format!("TLS parameters error: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| EmailError::smtp(e.to_string()))?
            .port(config.smtp_port)
            .credentials(credentials)
            .authentication(vec![Mechanism::Login])
            .tls(Tls::Required(tls_parameters))
            .build();

        Ok(Self {
            transport,
            pacing: config.pacing,
        })
    }

    /// Build a lettre `Message` from an [`Email`]
    fn build_message(email: &Email) -> Result<Message, EmailError> {
        email.validate()?;

        let from_addr = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let from: Mailbox = from_addr
            .parse()
            .map_err(|_| EmailError::InvalidAddress(from_addr.clone()))?;

        let to_addr = email.to.as_ref().ok_or(EmailError::NoRecipient)?;
        let to: Mailbox = to_addr
            .parse()
            .map_err(|_| EmailError::InvalidAddress(to_addr.clone()))?;

        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;
        let text = email.text.as_ref().ok_or(EmailError::NoContent)?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(text.clone())
            .map_err(|e| EmailError::smtp(e.to_string()))
    }

    /// Map a transport error, singling out credential rejections.
    ///
    /// The relay answers authentication faults with permanent 53x replies
    /// (530/534/535/538); lettre has no dedicated variant for them.
    fn classify(err: &lettre::transport::smtp::Error) -> EmailError {
        let auth_rejected = err.status().is_some_and(|code| {
            code.severity == Severity::PermanentNegativeCompletion
                && code.category == Category::Unspecified3
        });

        if auth_rejected {
            EmailError::AuthRejected
        } else {
            EmailError::smtp(err.to_string())
        }
    }
}

#[async_trait]
impl EmailSender for SmtpBackend {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        let message = Self::build_message(&email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| Self::classify(&e))?;

        Ok(())
    }

    /// The live batch: verify the session, then transmit in order with
    /// pacing. A credential rejection surfaces as `AuthRejected` before
    /// anything is transmitted; any later fault aborts the remainder.
    async fn send_batch(&self, emails: Vec<Email>) -> Result<(), EmailError> {
        debug!("verifying SMTP session before the batch");
        match self.transport.test_connection().await {
            Ok(true) => {}
            Ok(false) => return Err(EmailError::smtp("SMTP connection test failed")),
            Err(err) => return Err(Self::classify(&err)),
        }

        for email in emails {
            let recipient = email.to.clone().ok_or(EmailError::NoRecipient)?;
            self.send(email).await?;
            println!("Sent to: {recipient}");
            tokio::time::sleep(self.pacing).await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::new()
            .to("maria@dcc.ufmg.br")
            .from("fernando@dcc.ufmg.br")
            .subject("Chamada de Trabalhos: SBLP 2026")
            .text("Ola Maria!")
    }

    #[tokio::test]
    async fn test_backend_builds_from_default_config() {
        let config = MailerConfig::default();

        assert!(SmtpBackend::new(&config, "secret").is_ok());
    }

    #[test]
    fn test_build_message_complete() {
        assert!(SmtpBackend::build_message(&email()).is_ok());
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let email = Email::new()
            .to("not an address")
            .from("fernando@dcc.ufmg.br")
            .subject("S")
            .text("B");

        let result = SmtpBackend::build_message(&email);

        assert!(matches!(result, Err(EmailError::InvalidAddress(_))));
    }

    #[test]
    fn test_build_message_rejects_incomplete_email() {
        let result = SmtpBackend::build_message(&Email::new());

        assert!(matches!(result, Err(EmailError::NoRecipient)));
    }
}
