//! Final step: how trailing input the reassembly did not emit is handled.

use serde::{Deserialize, Serialize};

/// Selects what happens after components are reassembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailReconciliation {
    /// Reassembly emits every retained component, including the fragment of
    /// schemes that keep it. Nothing is appended afterwards.
    #[default]
    Structural,
    /// Legacy behavior: if the trimmed input is longer than the reassembled
    /// string, its bytes past that length are appended verbatim.
    ///
    /// This compares lengths only, so output can be malformed when the
    /// reassembled prefix does not line up with the input (a removed port or
    /// a deduplicated query shifts everything after it).
    Length,
}

/// Append `original[out.len()..]` to `out` when `original` is longer.
///
/// The cut is moved forward to the next char boundary for non-ASCII input.
pub fn append_tail(original: &str, out: &mut String) {
    if original.len() <= out.len() {
        return;
    }
    let start = (out.len()..=original.len())
        .find(|&i| original.is_char_boundary(i))
        .unwrap_or(original.len());
    tracing::trace!(tail = &original[start..], "appending unmatched input tail");
    out.push_str(&original[start..]);
}
