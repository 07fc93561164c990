//! Interactive line-oriented shell around rookery's move generator.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::ShellError;
pub use session::Session;
