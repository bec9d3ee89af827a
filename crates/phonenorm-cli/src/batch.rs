use anyhow::Result;
use phonenorm_core::{Normalizer, PhoneService};
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Normalizes every candidate in input order. A candidate that fails to
/// parse gets one line on `err` and does not stop the batch; only write
/// failures abort.
pub fn run<S, O, E>(
    normalizer: &Normalizer<S>,
    candidates: &[String],
    mode: OutputMode,
    out: &mut O,
    err: &mut E,
) -> Result<BatchSummary>
where
    S: PhoneService,
    O: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();
    for candidate in candidates {
        match normalizer.normalize(candidate) {
            Ok(normalized) => {
                match mode {
                    OutputMode::Plain => writeln!(out, "{}", normalized.formatted)?,
                    OutputMode::Json => {
                        serde_json::to_writer(&mut *out, &normalized)?;
                        writeln!(out)?;
                    }
                }
                summary.succeeded += 1;
            }
            Err(parse_err) => {
                debug!(candidate = parse_err.candidate(), "skipping candidate");
                writeln!(err, "error: {}", parse_err)?;
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
