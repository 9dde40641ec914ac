//! Route matching logic.
//!
//! # Responsibilities
//! - Split candidate paths into segments
//! - Match segments against a pattern structurally
//! - Bind parameter segments by name
//!
//! # Design Decisions
//! - Segment counts must be equal
//! - Literal matching is case-sensitive
//! - A parameter never binds an empty segment
//! - No regex, matching is a single pass over the segments

use std::collections::BTreeMap;

use crate::routing::pattern::{PathPattern, Segment};

/// Parameter values bound during a match, keyed by parameter name.
pub type Params = BTreeMap<String, String>;

/// Trait for matching split paths against a route condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the bound parameters if the segments match this condition.
    fn match_segments(&self, segments: &[&str]) -> Option<Params>;
}

impl Matcher for PathPattern {
    fn match_segments(&self, segments: &[&str]) -> Option<Params> {
        if self.segments().len() != segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (expected, actual) in self.segments().iter().zip(segments) {
            match expected {
                Segment::Literal(text) if text == actual => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if actual.is_empty() => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*actual).to_string());
                }
            }
        }
        Some(params)
    }
}

/// Split a candidate path into segments.
///
/// A leading `/` and a single trailing `/` are ignored, so `/`, `` and `/about/`
/// split to `[]`, `[]` and `["about"]`. Inner empty segments are kept, and `//`
/// splits to `["", ""]`.
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}
