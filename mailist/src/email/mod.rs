//! Email building and delivery backends
//!
//! This module provides the delivery half of the system:
//! - [`Email`] builder for the per-recipient message
//! - [`EmailSender`] trait implemented by all backends
//! - [`ConsoleBackend`]: print the batch instead of sending (dry run)
//! - [`SmtpBackend`]: live delivery via `lettre` over one authenticated
//!   STARTTLS session, with fixed pacing between messages

mod backend;
mod builder;
mod error;
mod sender;

pub use backend::console::ConsoleBackend;
pub use backend::smtp::SmtpBackend;
pub use builder::Email;
pub use error::EmailError;
pub use sender::EmailSender;

use crate::config::MailerConfig;
use crate::contacts::ContactRow;
use crate::template::MessageTemplate;

/// Build the personalized message for one curated row.
///
/// Subject and sender are batch-wide constants from the configuration;
/// recipient and body vary per row.
#[must_use]
pub fn compose(row: &ContactRow, template: &MessageTemplate, config: &MailerConfig) -> Email {
    Email::new()
        .to(&row.email)
        .from(&config.sender)
        .subject(&config.subject)
        .text(&template.render(&row.first_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_personalizes_recipient_and_body() {
        let config = MailerConfig::default();
        let template = MessageTemplate::new("Ola <FirstName>, submeta seu artigo!");
        let row = ContactRow {
            nome: "Maria Silva".to_string(),
            first_name: "Maria".to_string(),
            surname: "Silva".to_string(),
            email: "maria@dcc.ufmg.br".to_string(),
            country: "br".to_string(),
        };

        let email = compose(&row, &template, &config);

        assert_eq!(email.to.as_deref(), Some("maria@dcc.ufmg.br"));
        assert_eq!(email.from.as_deref(), Some("fernando@dcc.ufmg.br"));
        assert_eq!(email.subject.as_deref(), Some("Chamada de Trabalhos: SBLP 2026"));
        assert_eq!(
            email.text.as_deref(),
            Some("Ola Maria, submeta seu artigo!")
        );
        assert!(email.validate().is_ok());
    }
}
