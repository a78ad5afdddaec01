//! CSV import for the mailing-list row format.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::{ContactRow, ContactsError};

/// Read a contact CSV into memory.
///
/// Columns are matched by header name; columns the row type does not know
/// are ignored. A missing `Nome` or `Email` column fails the parse.
///
/// # Errors
///
/// Returns `ContactsError::NotFound` when `path` does not exist, and
/// `ContactsError::Csv` on malformed input.
pub fn read_rows(path: &Path) -> Result<Vec<ContactRow>, ContactsError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ContactsError::NotFound(path.display().to_string()));
        }
        Err(err) => return Err(err.into()),
    };
    parse_rows(file)
}

fn parse_rows<R: Read>(input: R) -> Result<Vec<ContactRow>, ContactsError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_matches_by_header() {
        let input = "Email,Nome\nmaria@dcc.ufmg.br,Maria Silva\n";

        let rows = parse_rows(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].nome, "Maria Silva");
        assert_eq!(rows[0].email, "maria@dcc.ufmg.br");
        assert_eq!(rows[0].first_name, "");
        assert_eq!(rows[0].country, "");
    }

    #[test]
    fn test_parse_rows_ignores_extra_columns() {
        let input = "Nome,Affiliation,Email\nAna,UFMG,ana@foo.br\n";

        let rows = parse_rows(input.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].nome, "Ana");
        assert_eq!(rows[0].email, "ana@foo.br");
    }

    #[test]
    fn test_parse_rows_requires_email_column() {
        let input = "Nome,Affiliation\nAna,UFMG\n";

        assert!(parse_rows(input.as_bytes()).is_err());
    }

    #[test]
    fn test_read_rows_missing_file() {
        let err = read_rows(Path::new("/no/such/contacts.csv")).unwrap_err();

        assert!(matches!(err, ContactsError::NotFound(_)));
        assert_eq!(err.to_string(), "File '/no/such/contacts.csv' not found.");
    }
}
