//! Structural decomposition of a URL and its reassembly.

use crate::error::NormalizeError;
use std::fmt::Write as _;
use url::Url;

/// The parts of a URL the pipeline reads and rewrites.
///
/// `host` distinguishes "no authority" (`None`, e.g. `mailto:a@b`) from an
/// empty authority (`Some("")`, e.g. `file:///etc/hosts`). `port` is only set
/// when it differs from what the parser already treats as implied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: String,
    pub userinfo: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlComponents {
    /// Split `input` into components. The input is expected to be trimmed.
    pub fn parse(input: &str) -> Result<Self, NormalizeError> {
        let parsed = Url::parse(input).map_err(|e| NormalizeError::malformed(input, e))?;

        let userinfo = match (parsed.username(), parsed.password()) {
            ("", None) => None,
            (user, Some(pass)) => Some(format!("{user}:{pass}")),
            (user, None) => Some(user.to_string()),
        };

        let host = if parsed.has_authority() {
            Some(parsed.host_str().unwrap_or_default().to_string())
        } else {
            None
        };

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            userinfo,
            host,
            port: parsed.port(),
            path: parsed.path().to_string(),
            query: parsed.query().map(str::to_string),
            fragment: parsed.fragment().map(str::to_string),
        })
    }

    /// `scheme:[//[userinfo@]host[:port]]path`; the scheme is always lowercase.
    pub fn base_string(&self) -> String {
        self.render_base(true)
    }

    /// `scheme:[//host[:port]]path`, the legacy rebuild that loses userinfo.
    pub fn base_string_without_userinfo(&self) -> String {
        self.render_base(false)
    }

    fn render_base(&self, with_userinfo: bool) -> String {
        let mut out = String::with_capacity(self.scheme.len() + self.path.len() + 32);
        out.push_str(&self.scheme.to_ascii_lowercase());
        out.push(':');
        if let Some(host) = &self.host {
            out.push_str("//");
            if let Some(userinfo) = self.userinfo.as_ref().filter(|_| with_userinfo) {
                out.push_str(userinfo);
                out.push('@');
            }
            out.push_str(host);
            if let Some(port) = self.port {
                let _ = write!(out, ":{port}");
            }
        }
        out.push_str(&self.path);
        out
    }

    /// The query, if present and non-empty.
    pub fn nonempty_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}
