//! Canonicalized schemes and their default ports.

use std::collections::BTreeMap;

/// Built-in table: the schemes that get port, fragment and query rules.
pub const DEFAULT_SCHEMES: &[(&str, u16)] = &[("http", 80), ("https", 443), ("ftp", 21)];

/// Scheme name -> default port.
///
/// Membership in the table is what makes a scheme "canonicalized". Lookups
/// are exact; callers pass the already-lowercased scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeTable {
    ports: BTreeMap<String, u16>,
}

impl Default for SchemeTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_SCHEMES.iter().map(|(s, p)| (s.to_string(), *p)))
    }
}

impl SchemeTable {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, u16)>,
    {
        Self {
            ports: pairs.into_iter().collect(),
        }
    }

    pub fn is_canonicalized(&self, scheme: &str) -> bool {
        self.ports.contains_key(scheme)
    }

    pub fn default_port(&self, scheme: &str) -> Option<u16> {
        self.ports.get(scheme).copied()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_http_https_ftp() {
        let t = SchemeTable::default();
        assert_eq!(t.len(), 3);
        assert_eq!(t.default_port("http"), Some(80));
        assert_eq!(t.default_port("https"), Some(443));
        assert_eq!(t.default_port("ftp"), Some(21));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let t = SchemeTable::default();
        assert!(t.is_canonicalized("http"));
        assert!(!t.is_canonicalized("HTTP"));
        assert!(!t.is_canonicalized("gopher"));
    }

    #[test]
    fn custom_table_replaces_builtin() {
        let t = SchemeTable::from_pairs([("gopher".to_string(), 70)]);
        assert!(t.is_canonicalized("gopher"));
        assert!(!t.is_canonicalized("http"));
    }
}
