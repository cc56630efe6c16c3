//! Query tokens and the first-seen parameter index.

use std::collections::HashMap;

/// One `&`-delimited token split into name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> QueryParameter<'a> {
    /// Split at the first `=`. A token without `=` is all name and has an
    /// empty value; a token starting with `=` has an empty name.
    pub fn from_token(token: &'a str) -> Self {
        match token.split_once('=') {
            Some((name, value)) => Self { name, value },
            None => Self {
                name: token,
                value: "",
            },
        }
    }
}

/// Insertion-ordered map from raw (case-sensitive) name to every value seen.
#[derive(Debug, Default)]
pub struct ParamIndex<'a> {
    order: Vec<&'a str>,
    values: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> ParamIndex<'a> {
    /// Record a parameter. Returns `true` the first time its name is seen.
    pub fn insert(&mut self, param: &QueryParameter<'a>) -> bool {
        match self.values.get_mut(param.name) {
            Some(seen) => {
                seen.push(param.value);
                false
            }
            None => {
                self.order.push(param.name);
                self.values.insert(param.name, vec![param.value]);
                true
            }
        }
    }

    pub fn names(&self) -> &[&'a str] {
        &self.order
    }

    pub fn values(&self, name: &str) -> Option<&[&'a str]> {
        self.values.get(name).map(Vec::as_slice)
    }
}

/// Split on `&` and drop trailing empty tokens, keeping leading and inner ones.
pub(super) fn split_trimmed(s: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = s.split('&').collect();
    while tokens.len() > 1 && tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    if tokens.len() == 1 && tokens[0].is_empty() && !s.is_empty() {
        tokens.clear();
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_with_value() {
        let p = QueryParameter::from_token("a=1=2");
        assert_eq!(p.name, "a");
        assert_eq!(p.value, "1=2");
    }

    #[test]
    fn token_without_equals_is_bare_name() {
        let p = QueryParameter::from_token("flag");
        assert_eq!(p.name, "flag");
        assert_eq!(p.value, "");
    }

    #[test]
    fn token_with_trailing_equals_has_empty_value() {
        let p = QueryParameter::from_token("k=");
        assert_eq!(p.name, "k");
        assert_eq!(p.value, "");
    }

    #[test]
    fn leading_equals_leaves_name_empty() {
        let p = QueryParameter::from_token("=x");
        assert_eq!(p.name, "");
        assert_eq!(p.value, "x");
    }

    #[test]
    fn index_keeps_order_and_all_values() {
        let mut idx = ParamIndex::default();
        assert!(idx.insert(&QueryParameter::from_token("B=2")));
        assert!(idx.insert(&QueryParameter::from_token("a=1")));
        assert!(!idx.insert(&QueryParameter::from_token("B=9")));
        assert_eq!(idx.names(), &["B", "a"]);
        assert_eq!(idx.values("B"), Some(&["2", "9"][..]));
        assert_eq!(idx.values("b"), None);
    }

    #[test]
    fn split_trimmed_drops_only_trailing_empties() {
        assert_eq!(split_trimmed("a&&b&&"), vec!["a", "", "b"]);
        assert_eq!(split_trimmed("&a"), vec!["", "a"]);
        assert_eq!(split_trimmed("&&"), Vec::<&str>::new());
        assert_eq!(split_trimmed(""), vec![""]);
    }
}
