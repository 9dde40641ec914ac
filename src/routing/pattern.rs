//! Route pattern parsing.
//!
//! # Syntax
//! - Patterns start with `/`; `/` alone is the root pattern
//! - Segments are separated by `/`; a single trailing `/` is ignored
//! - `:name` binds one non-empty path segment under `name`
//! - Every other segment is matched literally (case-sensitive)
//!
//! # Design Decisions
//! - Parsing happens once, when the table is built
//! - Empty segments, unnamed and duplicate parameters are rejected up front

use std::fmt;

use crate::routing::error::{PatternFault, RouteError};
use crate::routing::matcher::Params;

/// One `/`-delimited component of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    /// Returns true if this segment would accept every value `other` accepts.
    fn covers(&self, other: &Segment) -> bool {
        match (self, other) {
            (Segment::Param(_), _) => true,
            (Segment::Literal(a), Segment::Literal(b)) => a == b,
            (Segment::Literal(_), Segment::Param(_)) => false,
        }
    }
}

/// A parsed path pattern such as `/todos/:id/edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern, rejecting malformed input.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let malformed = |fault| RouteError::MalformedPattern {
            pattern: raw.to_string(),
            fault,
        };

        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| malformed(PatternFault::MissingLeadingSlash))?;
        if rest.starts_with('/') {
            return Err(malformed(PatternFault::EmptySegment));
        }
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(malformed(PatternFault::EmptySegment));
                }
                match part.strip_prefix(':') {
                    Some("") => return Err(malformed(PatternFault::UnnamedParam)),
                    Some(name) => {
                        let taken = segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(n) if n == name));
                        if taken {
                            return Err(malformed(PatternFault::DuplicateParam));
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Literal(part.to_string())),
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the pattern has no parameter segments.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Returns true if every path matched by `other` is also matched by `self`.
    ///
    /// When `self` is declared first, `other` can never be selected.
    pub fn covers(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.covers(b))
    }

    /// Render a concrete path, substituting `params` into parameter segments.
    pub fn render(&self, params: &Params) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => match params.get(name) {
                    Some(value) if !value.is_empty() && !value.contains('/') => {
                        path.push_str(value)
                    }
                    _ => return Err(RouteError::MissingParam { name: name.clone() }),
                },
            }
        }
        Ok(path)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
