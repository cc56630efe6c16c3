//! Error type for the normalization pipeline.

use thiserror::Error;

/// Failure returned by a normalizer.
///
/// The pipeline has exactly one failure mode: the input could not be split
/// into scheme/host/port/path. Query canonicalization never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Missing scheme, invalid port, or otherwise unparseable syntax.
    #[error("malformed URL {url:?}: {reason}")]
    Malformed { url: String, reason: String },
}

impl NormalizeError {
    pub(crate) fn malformed(url: &str, reason: impl ToString) -> Self {
        NormalizeError::Malformed {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The input that failed to normalize.
    pub fn url(&self) -> &str {
        match self {
            NormalizeError::Malformed { url, .. } => url,
        }
    }
}
