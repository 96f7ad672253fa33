//! Library half of the `gpgfind` binary: argument parsing, handlers and
//! error mapping, kept out of `main.rs` so they can be tested.

pub mod error;
pub mod handlers;
pub mod parser;

pub use error::CliError;
pub use parser::{Cli, Commands, Generation};
