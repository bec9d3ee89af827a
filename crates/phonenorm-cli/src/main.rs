mod batch;
mod error;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::debug;

use crate::batch::OutputMode;
use crate::error::{report_error, EXIT_FAILURE};
use phonenorm_core::{LanguageTag, Libphonenumber, Normalizer, RegionCode};

/// Normalize phone numbers to national or international format.
#[derive(Debug, Parser)]
#[command(name = "phonenorm", version, about)]
struct Cli {
    /// Default country for numbers lacking an international prefix, as a
    /// two-letter ISO 3166-2 code [default: US]
    #[arg(short = 'c', long = "country", value_name = "CODE")]
    country: Option<String>,
    /// Language to use for the display, as an IETF language tag [default: en]
    #[arg(short = 'l', long = "lang", value_name = "TAG")]
    lang: Option<String>,
    /// Print one JSON object per number
    #[arg(long)]
    json: bool,
    /// Log debug output to stderr
    #[arg(long, short)]
    verbose: bool,
    /// Phone numbers to normalize
    #[arg(value_name = "NUMBER", required = true)]
    numbers: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        country,
        lang,
        json,
        verbose: _,
        numbers,
    } = cli;

    let region = country.map(RegionCode::new).unwrap_or_default();
    let language = lang.map(LanguageTag::new).unwrap_or_default();
    debug!(language = %language, "display language resolved");

    let mode = if json {
        OutputMode::Json
    } else {
        OutputMode::Plain
    };
    let normalizer = Normalizer::new(Libphonenumber::new(), region);
    debug!(region = %normalizer.default_region(), "default region resolved");
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let summary = batch::run(&normalizer, &numbers, mode, &mut stdout, &mut stderr)
        .context("write output")?;
    debug!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch complete"
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
