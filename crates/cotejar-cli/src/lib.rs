//! Cotejador CLI Library
//!
//! Command-line interface for the cotejar image validation library.

#![warn(missing_docs)]

mod commands;
mod error;

pub use commands::{Cli, OutputFormat};
pub use error::{CliError, CliResult};
