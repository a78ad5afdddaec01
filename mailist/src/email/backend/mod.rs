//! Delivery backend implementations
//!
//! - **SMTP**: live delivery over one authenticated STARTTLS session
//! - **Console**: print the batch to stdout instead of sending (dry run)

pub mod console;
pub mod smtp;
