//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Cotejador: validate a rendered image against a reference within fixed tolerances
#[derive(Parser, Debug)]
#[command(name = "cotejador")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the reference image
    pub reference: PathBuf,

    /// Path to the image to validate against the reference
    pub candidate: PathBuf,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Reflect the verdict in the exit code (exit 1 when not acceptable)
    #[arg(long)]
    pub strict: bool,
}

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable validation report
    #[default]
    Text,
    /// JSON rendering of the verdict
    Json,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_positional_paths() {
        let cli = Cli::try_parse_from(["cotejador", "a.png", "b.png"]).unwrap();
        assert_eq!(cli.reference, PathBuf::from("a.png"));
        assert_eq!(cli.candidate, PathBuf::from("b.png"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.strict);
    }

    #[test]
    fn test_missing_candidate_is_an_error() {
        assert!(Cli::try_parse_from(["cotejador", "a.png"]).is_err());
    }

    #[test]
    fn test_extra_positional_is_an_error() {
        assert!(Cli::try_parse_from(["cotejador", "a.png", "b.png", "c.png"]).is_err());
    }

    #[test]
    fn test_json_format_flag() {
        let cli = Cli::try_parse_from(["cotejador", "a.png", "b.png", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_strict_flag() {
        let cli = Cli::try_parse_from(["cotejador", "a.png", "b.png", "--strict"]).unwrap();
        assert!(cli.strict);
    }
}
