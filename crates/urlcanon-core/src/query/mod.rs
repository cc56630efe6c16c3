//! Query-string canonicalization.
//!
//! Parameters are deduplicated by name (first occurrence wins), names are
//! lowercased, and the resulting `name=value` tokens are sorted as whole
//! strings. Names and values are opaque: nothing is percent-decoded.

mod params;

pub use params::{ParamIndex, QueryParameter};

use params::split_trimmed;

/// Canonicalize a raw query string (without the leading `?`).
///
/// Never fails. When no token carries a non-empty name the raw input is
/// sorted as-is instead.
///
/// # Examples
///
/// - `canonicalize_query("B=2&a=1&B=9")` → `"a=1&b=2"`
/// - `canonicalize_query("=x&a=1")` → `"a=1"`
pub fn canonicalize_query(raw: &str) -> String {
    let mut index = ParamIndex::default();
    let mut deduped = String::with_capacity(raw.len());

    for token in raw.split('&') {
        let param = QueryParameter::from_token(token);
        if param.name.is_empty() {
            continue;
        }
        if index.insert(&param) {
            if !deduped.is_empty() {
                deduped.push('&');
            }
            deduped.push_str(&param.name.to_lowercase());
            deduped.push('=');
            deduped.push_str(param.value);
        }
    }

    let source = if deduped.is_empty() {
        tracing::trace!(query = raw, "no named parameters, sorting raw query");
        raw
    } else {
        deduped.as_str()
    };

    let mut tokens = split_trimmed(source);
    tokens.sort_unstable();
    tokens.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins_and_names_lowercased() {
        assert_eq!(canonicalize_query("B=2&a=1&B=9"), "a=1&b=2");
    }

    #[test]
    fn empty_name_tokens_dropped() {
        assert_eq!(canonicalize_query("=x&a=1"), "a=1");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(canonicalize_query(""), "");
    }

    #[test]
    fn bare_names_gain_equals() {
        assert_eq!(canonicalize_query("zeta&Alpha"), "alpha=&zeta=");
    }

    #[test]
    fn empty_tokens_skipped() {
        assert_eq!(canonicalize_query("&&b=1&&a=2&"), "a=2&b=1");
    }

    #[test]
    fn only_unnamed_tokens_falls_back_to_raw() {
        assert_eq!(canonicalize_query("=y&=x"), "=x&=y");
        assert_eq!(canonicalize_query("&&"), "");
        assert_eq!(canonicalize_query("=x&"), "=x");
    }

    #[test]
    fn sort_is_on_whole_token() {
        // "a-b" sorts before "a=" because '-' < '='.
        assert_eq!(canonicalize_query("a=2&a-b=1"), "a-b=1&a=2");
    }

    #[test]
    fn dedup_is_case_sensitive_before_lowercasing() {
        assert_eq!(canonicalize_query("A=1&a=2"), "a=1&a=2");
    }

    #[test]
    fn values_keep_case_and_encoding() {
        assert_eq!(canonicalize_query("Q=Hello%20World"), "q=Hello%20World");
    }

    #[test]
    fn value_may_contain_equals() {
        assert_eq!(canonicalize_query("t=a=b&s=1"), "s=1&t=a=b");
    }
}
