//! CLI for the urlcanon normalizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlcanon_core::config::{self, UrlcanonConfig};
use urlcanon_core::NormalizerChain;

use commands::{run_batch_command, run_normalize, run_query, OutputFormat};

/// Top-level CLI for urlcanon.
#[derive(Debug, Parser)]
#[command(name = "urlcanon")]
#[command(about = "urlcanon: reduce equivalent URLs to one canonical string", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form of a single URL.
    Normalize {
        /// URL to normalize.
        url: String,
        /// Normalizer scope (defaults to the configured default scope).
        #[arg(long)]
        scope: Option<String>,
    },

    /// Normalize newline-delimited URLs until end of input.
    Batch {
        /// Normalizer scope (defaults to the configured default scope).
        #[arg(long)]
        scope: Option<String>,
        /// Read URLs from this file instead of stdin.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Output format: one URL per line, or one JSON object per line.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the canonical form of a raw query string (without `?`).
    Query {
        /// Raw query string.
        raw: String,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<UrlcanonConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let chain = NormalizerChain::from_config(&cfg);

        match cli.command {
            CliCommand::Normalize { url, scope } => {
                let scope = scope.unwrap_or_else(|| cfg.default_scope.clone());
                run_normalize(&chain, &url, &scope)?;
            }
            CliCommand::Batch {
                scope,
                input,
                format,
            } => {
                let scope = scope.unwrap_or_else(|| cfg.default_scope.clone());
                run_batch_command(&chain, &scope, input.as_deref(), format)?;
            }
            CliCommand::Query { raw } => run_query(&raw),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
