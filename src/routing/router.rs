//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up the first route matching a path
//! - Return the matched route or an explicit not-found
//! - Render links back to a target
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - O(n) scan in declaration order, first match wins
//! - Shadowed routes are accepted but logged at build time
//! - Explicit NotFound rather than a silent default

use std::fmt;

use crate::app::View;
use crate::config::RouteConfig;
use crate::routing::error::RouteError;
use crate::routing::matcher::{split_path, Matcher, Params};
use crate::routing::pattern::PathPattern;

/// Association between a path pattern and an opaque view handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<V> {
    pattern: PathPattern,
    target: V,
}

impl<V> Route<V> {
    /// Create a route, parsing `pattern`.
    pub fn new(pattern: &str, target: V) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            target,
        })
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn target(&self) -> &V {
        &self.target
    }
}

/// A successful lookup: the selected route and the values it bound.
#[derive(Debug, PartialEq)]
pub struct RouteMatch<'a, V> {
    pub route: &'a Route<V>,
    pub params: Params,
}

impl<V> RouteMatch<'_, V> {
    pub fn target(&self) -> &V {
        self.route.target()
    }
}

/// Immutable, ordered route table.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V: fmt::Debug> RouteTable<V> {
    /// Build a table from `(pattern, target)` definitions in declaration order.
    ///
    /// Fails on the first malformed pattern.
    pub fn new<I, P>(definitions: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
    {
        let routes = definitions
            .into_iter()
            .map(|(pattern, target)| Route::new(pattern.as_ref(), target))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_routes(routes))
    }

    /// Build a table from already parsed routes.
    pub fn from_routes(routes: Vec<Route<V>>) -> Self {
        let table = Self { routes };
        for (earlier, later) in table.shadowed() {
            tracing::warn!(
                pattern = %table.routes[later].pattern,
                shadowed_by = %table.routes[earlier].pattern,
                "Route can never be selected"
            );
        }
        tracing::debug!(routes = table.routes.len(), "Route table built");
        table
    }

    /// Resolve a path to the first structurally matching route.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_, V>, RouteError> {
        let segments = split_path(path);
        self.routes
            .iter()
            .find_map(|route| {
                route
                    .pattern
                    .match_segments(&segments)
                    .map(|params| RouteMatch { route, params })
            })
            .ok_or_else(|| RouteError::NotFound {
                path: path.to_string(),
            })
    }

    /// Index pairs `(earlier, later)` where the earlier route covers the later one.
    pub fn shadowed(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (later, route) in self.routes.iter().enumerate() {
            if let Some(earlier) = self.routes[..later]
                .iter()
                .position(|prior| prior.pattern.covers(&route.pattern))
            {
                pairs.push((earlier, later));
            }
        }
        pairs
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<V: fmt::Debug + PartialEq> RouteTable<V> {
    /// Render the path of the first route leading to `target` whose
    /// parameters are all present in `params`.
    pub fn link_to(&self, target: &V, params: &Params) -> Result<String, RouteError> {
        let mut first_error = None;
        for route in self.routes.iter().filter(|r| &r.target == target) {
            match route.pattern.render(params) {
                Ok(path) => return Ok(path),
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        Err(first_error.unwrap_or_else(|| RouteError::NoLink {
            target: format!("{target:?}"),
        }))
    }
}

impl RouteTable<View> {
    /// Build the table from configured route declarations.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, RouteError> {
        Self::new(routes.iter().map(|r| (r.path.as_str(), r.view)))
    }
}
