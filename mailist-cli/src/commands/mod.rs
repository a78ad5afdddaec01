//! CLI command implementations

mod curate;
mod send;

pub use curate::CurateCommand;
pub use send::SendCommand;
