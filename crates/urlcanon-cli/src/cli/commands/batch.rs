//! `urlcanon batch` – the line-oriented batch driver.
//!
//! Each input line is normalized independently. A malformed line never stops
//! the run: it is reported as `failed: <line>` and the next line is read.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use urlcanon_core::NormalizerChain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Canonical URL, or `failed: <line>`.
    #[default]
    Text,
    /// `{"input": ..., "output": ...}` or `{"input": ..., "error": ...}`.
    Json,
}

/// Counts reported at the end of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub normalized: usize,
    pub failed: usize,
}

#[derive(Serialize)]
struct BatchRecord<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Normalize every line of `input` into `out` until end of input.
///
/// Lines are read as bytes; a line that is not UTF-8 is reported as failed
/// (with lossy text) instead of ending the run. Only I/O errors abort.
pub fn run_batch<R: BufRead, W: Write>(
    chain: &NormalizerChain,
    scope: &str,
    input: R,
    mut out: W,
    format: OutputFormat,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for chunk in input.split(b'\n') {
        let mut bytes = chunk.context("read input line")?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let (line, result) = match String::from_utf8(bytes) {
            Ok(line) => {
                let result = chain.normalize(&line, scope).map_err(|e| e.to_string());
                (line, result)
            }
            Err(e) => {
                let reason = format!("invalid UTF-8: {}", e.utf8_error());
                (String::from_utf8_lossy(e.as_bytes()).into_owned(), Err(reason))
            }
        };

        match &result {
            Ok(_) => summary.normalized += 1,
            Err(e) => {
                tracing::debug!("line failed: {}", e);
                summary.failed += 1;
            }
        }

        match format {
            OutputFormat::Text => match &result {
                Ok(normalized) => writeln!(out, "{normalized}")?,
                Err(_) => writeln!(out, "failed: {line}")?,
            },
            OutputFormat::Json => {
                let record = BatchRecord {
                    input: &line,
                    output: result.as_deref().ok(),
                    error: result.as_ref().err().cloned(),
                };
                serde_json::to_writer(&mut out, &record).context("write JSON record")?;
                writeln!(out)?;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

/// Run the batch driver over `input` (or stdin) and write to stdout.
pub fn run_batch_command(
    chain: &NormalizerChain,
    scope: &str,
    input: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    let summary = match input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
            run_batch(chain, scope, BufReader::new(file), out, format)?
        }
        None => run_batch(chain, scope, io::stdin().lock(), out, format)?,
    };

    tracing::info!(
        "batch done: scope={} normalized={} failed={}",
        scope,
        summary.normalized,
        summary.failed
    );
    Ok(())
}
