//! Cotejador CLI: validate a rendered image against a reference
//!
//! ## Usage
//!
//! ```bash
//! cotejador reference.png candidate.png
//! cotejador reference.png candidate.png --format json
//! cotejador reference.png candidate.png --strict   # exit 1 when not acceptable
//! ```
//!
//! The candidate is resampled to the reference's dimensions when the two
//! disagree; a notice naming both sizes is printed to stderr on that path.

use clap::error::ErrorKind;
use clap::Parser;
use cotejador::{Cli, CliResult, OutputFormat};
use cotejar::{Comparator, Verdict};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version arrive here too; only real usage
            // errors exit 1.
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    match run(&cli) {
        Ok(verdict) => {
            if cli.strict && !verdict.is_acceptable {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<Verdict> {
    let comparator = Comparator::default();

    let reference = cotejar::load_rgb(&cli.reference)?;
    let mut candidate = cotejar::load_rgb(&cli.candidate)?;

    let (ref_width, ref_height) = reference.dimensions();
    let (cand_width, cand_height) = candidate.dimensions();
    if (cand_width, cand_height) != (ref_width, ref_height) {
        eprintln!(
            "Notice: image sizes differ; resampling '{}' from {cand_width}x{cand_height} \
             to {ref_width}x{ref_height} before comparing.",
            cli.candidate.display()
        );
        candidate = cotejar::to_dimensions(&candidate, ref_width, ref_height);
    }

    let verdict = comparator.compare(&reference, &candidate)?;

    let report = match cli.format {
        OutputFormat::Text => cotejar::render_text(&verdict, comparator.thresholds()),
        OutputFormat::Json => cotejar::render_json(&verdict, comparator.thresholds())?,
    };
    println!("{report}");

    Ok(verdict)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
