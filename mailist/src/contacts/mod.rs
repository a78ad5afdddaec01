//! Contact records and CSV I/O
//!
//! The CSV schema is header-driven on input (extra columns are ignored,
//! `Nome` and `Email` are required) and fixed on output:
//! `Nome,FirstName,Surname,Email,Country`, header row always present.

mod reader;
mod writer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use reader::read_rows;
pub use writer::{write_rows, Destination};

/// One mailing-list row.
///
/// Field order is load-bearing: it fixes the output column order under
/// `csv` + serde serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRow {
    /// Full display name, as exported
    #[serde(rename = "Nome")]
    pub nome: String,

    /// Text before the first space of `Nome`
    #[serde(rename = "FirstName", default)]
    pub first_name: String,

    /// Text after the first space of `Nome`, empty when there is none
    #[serde(rename = "Surname", default)]
    pub surname: String,

    /// Address; unique key of the curated list
    #[serde(rename = "Email")]
    pub email: String,

    /// 2-letter country code derived from the address TLD
    #[serde(rename = "Country", default)]
    pub country: String,
}

/// Errors from reading or writing contact CSVs
#[derive(Debug, Error)]
pub enum ContactsError {
    /// Input file does not exist
    #[error("File '{0}' not found.")]
    NotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse or serialize error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
