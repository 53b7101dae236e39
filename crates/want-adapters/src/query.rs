//! Query-string parameter source
//!
//! `?vm=web1&locked&note=` parses to
//!
//! | key | stored |
//! |---|---|
//! | `vm` | `"web1"` |
//! | `locked` | no value |
//! | `note` | `""` |
//!
//! Keys and values are percent-decoded with `+` read as a space. A repeated
//! key keeps its last value but its first position.

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::str::FromStr;
use want_core::ParamSource;

/// Parsed query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: IndexMap<String, Option<String>>,
}

impl QueryParams {
    /// Create empty parameter set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string; a leading `?` is ignored
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();
        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = match segment.split_once('=') {
                Some((k, v)) => (decode(k), Some(decode(v))),
                None => (decode(segment), None),
            };
            if key.is_empty() {
                continue;
            }
            params.pairs.insert(key, value);
        }
        tracing::trace!(count = params.pairs.len(), "parsed query string");
        params
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.pairs.insert(key.into(), value);
    }

    /// Number of distinct keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if no parameters were given
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate in query order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl FromStr for QueryParams {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl ParamSource<Value> for QueryParams {
    fn has(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.pairs.get(key).cloned().flatten().map(Value::String)
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
