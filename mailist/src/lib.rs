//! mailist: mailing-list curation and batch email delivery
//!
//! Two pipelines share the [`contacts::ContactRow`] record:
//!
//! - **Curation**: read a raw CSV export, collapse duplicate addresses,
//!   split display names into first name and surname, derive a country
//!   code from the address TLD, and write the canonical
//!   `Nome,FirstName,Surname,Email,Country` CSV.
//! - **Delivery**: read a curated CSV plus a plain-text template, keep the
//!   rows for the target country, render one message per row, and hand the
//!   batch to an [`email::EmailSender`] backend — [`email::ConsoleBackend`]
//!   for a dry run, [`email::SmtpBackend`] for live delivery over a single
//!   authenticated STARTTLS session with fixed pacing between messages.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use mailist::config::MailerConfig;
//! use mailist::email::{compose, ConsoleBackend, EmailSender};
//! use mailist::template::MessageTemplate;
//! use mailist::{contacts, curate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MailerConfig::default();
//! let rows = contacts::read_rows(Path::new("curated.csv"))?;
//! let template = MessageTemplate::new("Ola <FirstName>!");
//!
//! let batch: Vec<_> = curate::filter_country(rows.into_iter(), &config.target_country)
//!     .map(|row| compose(&row, &template, &config))
//!     .collect();
//!
//! ConsoleBackend::new().send_batch(batch).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contacts;
pub mod curate;
pub mod email;
pub mod template;
pub mod testing;
