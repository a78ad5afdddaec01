//! CSV export for the curated mailing-list format.
//!
//! Writes the fixed `Nome,FirstName,Surname,Email,Country` header followed
//! by one record per row. The standard-output sink is shared process state
//! and is never closed; file sinks close on drop.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use super::{ContactRow, ContactsError};

/// CSV column headers of the curated list.
const CSV_HEADERS: [&str; 5] = ["Nome", "FirstName", "Surname", "Email", "Country"];

/// Where a curated CSV goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The process standard output
    Stdout,
    /// A file path, created or truncated
    Path(PathBuf),
}

impl Destination {
    /// Interpret a destination token: `-` or `stdout` (case-insensitive)
    /// select standard output, anything else is a file path.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("-") || token.eq_ignore_ascii_case("stdout") {
            Self::Stdout
        } else {
            Self::Path(PathBuf::from(token))
        }
    }
}

/// Write rows to the destination with the fixed header.
///
/// The header is written even for an empty row set.
///
/// # Errors
///
/// Returns `ContactsError::Io` / `ContactsError::Csv` on write failure.
pub fn write_rows<I>(dest: &Destination, rows: I) -> Result<(), ContactsError>
where
    I: IntoIterator<Item = ContactRow>,
{
    match dest {
        Destination::Stdout => write_to(io::stdout().lock(), rows),
        Destination::Path(path) => write_to(File::create(path)?, rows),
    }
}

fn write_to<W, I>(sink: W, rows: I) -> Result<(), ContactsError>
where
    W: Write,
    I: IntoIterator<Item = ContactRow>,
{
    // Header written by hand so it is present even with zero rows; serde
    // serialization then emits values only.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(nome: &str, email: &str) -> ContactRow {
        ContactRow {
            nome: nome.to_string(),
            first_name: String::new(),
            surname: String::new(),
            email: email.to_string(),
            country: String::new(),
        }
    }

    fn write_to_string(rows: Vec<ContactRow>) -> String {
        let mut buf = Vec::new();
        write_to(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_destination_tokens() {
        assert_eq!(Destination::parse("-"), Destination::Stdout);
        assert_eq!(Destination::parse("stdout"), Destination::Stdout);
        assert_eq!(Destination::parse("STDOUT"), Destination::Stdout);
        assert_eq!(
            Destination::parse("out.csv"),
            Destination::Path(PathBuf::from("out.csv"))
        );
    }

    #[test]
    fn test_header_written_for_empty_set() {
        let output = write_to_string(Vec::new());

        assert_eq!(output, "Nome,FirstName,Surname,Email,Country\n");
    }

    #[test]
    fn test_rows_follow_fixed_column_order() {
        let mut contact = row("Maria Silva", "maria@foo.br");
        contact.first_name = "Maria".to_string();
        contact.surname = "Silva".to_string();
        contact.country = "br".to_string();

        let output = write_to_string(vec![contact]);

        assert_eq!(
            output,
            "Nome,FirstName,Surname,Email,Country\nMaria Silva,Maria,Silva,maria@foo.br,br\n"
        );
    }
}
