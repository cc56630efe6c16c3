//! The two rule sets applied to parsed components.
//!
//! `apply_always` runs for every scheme; `apply_canonical` only for schemes
//! listed in the [`SchemeTable`](crate::schemes::SchemeTable).

use crate::components::UrlComponents;
use crate::query::canonicalize_query;

/// Host and path casing. Applied regardless of scheme.
pub fn apply_always(c: &mut UrlComponents) {
    if let Some(host) = c.host.as_mut() {
        *host = host.to_lowercase();
    }
    c.path = c.path.to_lowercase();
}

/// Default-port elision, fragment removal and query canonicalization.
pub fn apply_canonical(c: &mut UrlComponents, default_port: u16) {
    if c.port == Some(default_port) {
        c.port = None;
    }
    if c.fragment.take().is_some() {
        tracing::trace!(scheme = %c.scheme, "dropped fragment");
    }
    if let Some(query) = c.nonempty_query() {
        c.query = Some(canonicalize_query(query));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(scheme: &str, port: Option<u16>) -> UrlComponents {
        UrlComponents {
            scheme: scheme.to_string(),
            userinfo: None,
            host: Some("WWW.Example.COM".to_string()),
            port,
            path: "/Some/PATH".to_string(),
            query: Some("Z=1&y=2&Z=3".to_string()),
            fragment: Some("Top".to_string()),
        }
    }

    #[test]
    fn always_lowercases_host_and_path_only() {
        let mut c = components("custom", Some(80));
        apply_always(&mut c);
        assert_eq!(c.host.as_deref(), Some("www.example.com"));
        assert_eq!(c.path, "/some/path");
        assert_eq!(c.port, Some(80));
        assert_eq!(c.query.as_deref(), Some("Z=1&y=2&Z=3"));
        assert_eq!(c.fragment.as_deref(), Some("Top"));
    }

    #[test]
    fn always_without_host() {
        let mut c = components("mailto", None);
        c.host = None;
        apply_always(&mut c);
        assert!(c.host.is_none());
    }

    #[test]
    fn canonical_elides_default_port() {
        let mut c = components("http", Some(80));
        apply_canonical(&mut c, 80);
        assert_eq!(c.port, None);
    }

    #[test]
    fn canonical_keeps_other_port() {
        let mut c = components("http", Some(8080));
        apply_canonical(&mut c, 80);
        assert_eq!(c.port, Some(8080));
    }

    #[test]
    fn canonical_drops_fragment_and_rewrites_query() {
        let mut c = components("https", None);
        apply_canonical(&mut c, 443);
        assert!(c.fragment.is_none());
        assert_eq!(c.query.as_deref(), Some("y=2&z=1"));
        // casing is the other rule set's job
        assert_eq!(c.path, "/Some/PATH");
    }

    #[test]
    fn canonical_leaves_empty_query_alone() {
        let mut c = components("ftp", None);
        c.query = Some(String::new());
        apply_canonical(&mut c, 21);
        assert_eq!(c.query.as_deref(), Some(""));
    }
}
