//! Delivery configuration
//!
//! The batch constants live in one explicit [`MailerConfig`] value that is
//! passed into the mailer instead of read from module state, so tests can
//! point the SMTP backend at a fake relay.

use std::time::Duration;

use crate::email::EmailError;

/// Relay host used for live delivery.
pub const SMTP_RELAY: &str = "smtp.dcc.ufmg.br";

/// SMTP submission port (STARTTLS).
pub const SMTP_PORT: u16 = 587;

/// Sender address for the whole batch.
pub const SENDER: &str = "fernando@dcc.ufmg.br";

/// Subject line for the whole batch.
pub const SUBJECT: &str = "Chamada de Trabalhos: SBLP 2026";

/// Country code the batch is filtered to.
pub const TARGET_COUNTRY: &str = "br";

/// Fallback country code when the address TLD is not a 2-letter code.
pub const COUNTRY_FALLBACK: &str = "br";

/// Pause between transmissions, to respect relay sending-rate limits.
pub const SEND_PACING: Duration = Duration::from_secs(2);

/// Configuration for one delivery run.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP relay hostname
    pub smtp_host: String,

    /// SMTP submission port
    pub smtp_port: u16,

    /// Sender address, also the SMTP login user
    pub sender: String,

    /// Subject line applied to every message
    pub subject: String,

    /// Rows must carry this country code to receive a message
    pub target_country: String,

    /// Pause after each transmission
    pub pacing: Duration,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            smtp_host: SMTP_RELAY.to_string(),
            smtp_port: SMTP_PORT,
            sender: SENDER.to_string(),
            subject: SUBJECT.to_string(),
            target_country: TARGET_COUNTRY.to_string(),
            pacing: SEND_PACING,
        }
    }
}

impl MailerConfig {
    /// Build the configuration from environment variables, falling back to
    /// the fixed defaults.
    ///
    /// Recognized variables:
    /// - `MAILIST_SMTP_HOST`: SMTP relay hostname
    /// - `MAILIST_SMTP_PORT`: SMTP submission port
    /// - `MAILIST_SENDER`: sender address
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Config` if `MAILIST_SMTP_PORT` is set but is
    /// not a valid port number.
    pub fn from_env() -> Result<Self, EmailError> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("MAILIST_SMTP_HOST") {
            config.smtp_host = host;
        }

        if let Ok(port) = std::env::var("MAILIST_SMTP_PORT") {
            config.smtp_port = port
                .parse()
                .map_err(|_| EmailError::config("MAILIST_SMTP_PORT must be a valid port number"))?;
        }

        if let Ok(sender) = std::env::var("MAILIST_SENDER") {
            config.sender = sender;
        }

        Ok(config)
    }
}
