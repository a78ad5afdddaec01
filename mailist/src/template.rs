//! Plain-text message template
//!
//! The template body carries the literal token `<FirstName>`; rendering
//! substitutes every occurrence with the recipient's first name.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Placeholder token substituted per recipient.
pub const FIRST_NAME_TOKEN: &str = "<FirstName>";

/// Errors from loading a template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file does not exist
    #[error("File '{0}' not found.")]
    NotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A loaded message template.
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    body: String,
}

impl MessageTemplate {
    /// Wrap an in-memory template body.
    pub fn new<T: Into<String>>(body: T) -> Self {
        Self { body: body.into() }
    }

    /// Load a template from a plain-text file.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` when `path` does not exist.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        match std::fs::read_to_string(path) {
            Ok(body) => Ok(Self { body }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(TemplateError::NotFound(path.display().to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Render the body for one recipient, replacing every occurrence of
    /// [`FIRST_NAME_TOKEN`].
    #[must_use]
    pub fn render(&self, first_name: &str) -> String {
        self.body.replace(FIRST_NAME_TOKEN, first_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_token() {
        let template = MessageTemplate::new("Hello <FirstName>!");

        assert_eq!(template.render("Ana"), "Hello Ana!");
    }

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let template = MessageTemplate::new("<FirstName>, yes you, <FirstName>!");

        assert_eq!(template.render("Bob"), "Bob, yes you, Bob!");
    }

    #[test]
    fn test_render_without_token_is_identity() {
        let template = MessageTemplate::new("No placeholder here.");

        assert_eq!(template.render("Ana"), "No placeholder here.");
    }

    #[test]
    fn test_load_missing_file() {
        let err = MessageTemplate::load(Path::new("/no/such/template.txt")).unwrap_err();

        assert!(matches!(err, TemplateError::NotFound(_)));
        assert_eq!(err.to_string(), "File '/no/such/template.txt' not found.");
    }
}
