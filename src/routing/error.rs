//! Routing error definitions.

use thiserror::Error;

/// Errors produced while building or querying a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A route pattern could not be parsed. Raised at construction time only.
    #[error("malformed route pattern {pattern:?}: {fault}")]
    MalformedPattern { pattern: String, fault: PatternFault },

    /// No route structurally matches the path.
    #[error("no route matches {path:?}")]
    NotFound { path: String },

    /// No route points at the requested target.
    #[error("no route leads to {target}")]
    NoLink { target: String },

    /// A link was requested without a value for one of the pattern parameters.
    #[error("missing value for path parameter :{name}")]
    MissingParam { name: String },
}

impl RouteError {
    /// Returns true for the recoverable no-match condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound { .. })
    }
}

/// Reason a pattern was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternFault {
    #[error("pattern must start with '/'")]
    MissingLeadingSlash,

    #[error("pattern contains an empty segment")]
    EmptySegment,

    #[error("parameter segment has no name")]
    UnnamedParam,

    #[error("parameter name is bound twice")]
    DuplicateParam,
}
