//! Email error types

use thiserror::Error;

/// Errors that can occur when building or sending emails
#[derive(Debug, Error)]
pub enum EmailError {
    /// Email has no recipient
    #[error("email must have a recipient")]
    NoRecipient,

    /// Email has no sender
    #[error("email must have a from address")]
    NoSender,

    /// Email has no subject
    #[error("email must have a subject")]
    NoSubject,

    /// Email has no body
    #[error("email must have a text body")]
    NoContent,

    /// Invalid email address format
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// The relay rejected the login credential
    #[error("SMTP authentication rejected")]
    AuthRejected,

    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(String),

    /// Email configuration error
    #[error("email configuration error: {0}")]
    Config(String),
}

impl EmailError {
    /// Create an SMTP error from a string message
    #[must_use]
    pub fn smtp<T: Into<String>>(msg: T) -> Self {
        Self::Smtp(msg.into())
    }

    /// Create a configuration error from a string message
    #[must_use]
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}
