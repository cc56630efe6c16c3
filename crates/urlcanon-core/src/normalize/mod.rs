//! The normalization pipeline.
//!
//! Trim, decompose, apply the always-on rules, apply the scheme-conditional
//! rules, reassemble, reconcile the tail. Every call is independent and pure.

mod reconcile;
mod rules;

pub use reconcile::{append_tail, TailReconciliation};
pub use rules::{apply_always, apply_canonical};

use crate::components::UrlComponents;
use crate::config::UrlcanonConfig;
use crate::error::NormalizeError;
use crate::schemes::SchemeTable;

/// A normalizer the host can register against a scope.
///
/// Implementations must be pure: the same `(url, scope)` always yields the
/// same result, and calls may run concurrently.
pub trait UrlNormalizer: Send + Sync {
    fn normalize(&self, url: &str, scope: &str) -> Result<String, NormalizeError>;
}

/// Host/port/fragment/query canonicalization for the schemes in its table.
#[derive(Debug, Clone, Default)]
pub struct CanonicalNormalizer {
    schemes: SchemeTable,
    tail: TailReconciliation,
}

impl CanonicalNormalizer {
    pub fn new(schemes: SchemeTable, tail: TailReconciliation) -> Self {
        Self { schemes, tail }
    }

    pub fn from_config(cfg: &UrlcanonConfig) -> Self {
        Self::new(cfg.scheme_table(), cfg.tail_reconciliation)
    }

    pub fn schemes(&self) -> &SchemeTable {
        &self.schemes
    }

    pub fn tail_reconciliation(&self) -> TailReconciliation {
        self.tail
    }

    /// Canonical form of `url`.
    ///
    /// The empty string is passed through. Anything else is trimmed first;
    /// input that cannot be decomposed is `NormalizeError::Malformed`.
    pub fn normalize_url(&self, url: &str) -> Result<String, NormalizeError> {
        if url.is_empty() {
            return Ok(String::new());
        }

        let trimmed = url.trim();
        let mut components = UrlComponents::parse(trimmed).map_err(|e| {
            tracing::debug!(error = %e, "rejecting URL");
            e
        })?;

        apply_always(&mut components);
        if let Some(default_port) = self.schemes.default_port(&components.scheme) {
            apply_canonical(&mut components, default_port);
        }

        // Length mode rebuilds the way the legacy normalizer did: no userinfo.
        let mut out = match self.tail {
            TailReconciliation::Structural => components.base_string(),
            TailReconciliation::Length => components.base_string_without_userinfo(),
        };
        if let Some(query) = components.nonempty_query() {
            out.push('?');
            out.push_str(query);
        }

        match self.tail {
            TailReconciliation::Structural => {
                if let Some(fragment) = &components.fragment {
                    out.push('#');
                    out.push_str(fragment);
                }
            }
            TailReconciliation::Length => append_tail(trimmed, &mut out),
        }

        if out != trimmed {
            tracing::trace!(input = trimmed, output = %out, "normalized");
        }
        Ok(out)
    }
}

impl UrlNormalizer for CanonicalNormalizer {
    fn normalize(&self, url: &str, _scope: &str) -> Result<String, NormalizeError> {
        self.normalize_url(url)
    }
}

/// Normalize with the built-in scheme table and structural tail handling.
pub fn normalize(url: &str) -> Result<String, NormalizeError> {
    CanonicalNormalizer::default().normalize_url(url)
}
