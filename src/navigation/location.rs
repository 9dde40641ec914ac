//! Location parsing.
//!
//! Turns whatever the address mechanism reports (`#/todos/7/edit`,
//! `/about?tab=2`, `http://host/#/todos`) into a path and query pairs.

use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

/// Base that relative locations are joined onto.
const RELATIVE_BASE: &str = "http://localhost/";

/// Where the route path lives in a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryMode {
    /// Path is carried in the fragment: `http://host/#/todos`.
    #[default]
    Hash,
    /// Path is the URL path: `http://host/todos`.
    Path,
}

/// A location split into the routable path and its query pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    /// Parse a raw location according to `mode`.
    ///
    /// Relative locations are joined onto a fixed base first, so a location
    /// percent-encodes the same way whether or not it carries scheme and host.
    pub fn parse(raw: &str, mode: HistoryMode) -> Self {
        let url = Url::parse(raw).or_else(|_| {
            let relative = match mode {
                HistoryMode::Hash if !raw.contains('#') => format!("#{raw}"),
                _ => raw.to_string(),
            };
            Url::parse(RELATIVE_BASE).and_then(|base| base.join(&relative))
        });

        let relevant = match (url, mode) {
            (Ok(url), HistoryMode::Hash) => url.fragment().unwrap_or_default().to_string(),
            (Ok(url), HistoryMode::Path) => match url.query() {
                Some(query) => format!("{}?{}", url.path(), query),
                None => url.path().to_string(),
            },
            (Err(err), _) => {
                tracing::debug!(location = raw, error = %err, "Location is not a valid URL");
                raw.to_string()
            }
        };

        let (path, query) = match relevant.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (relevant.as_str(), None),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let query: Vec<(String, String)> = query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        Self { path, query }
    }
}
