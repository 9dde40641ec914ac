//! Navigation state recomputed on every location change.

use serde::Serialize;

use crate::routing::{Params, RouteMatch};

/// The route selected for the current location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute<V> {
    pub target: V,
    pub pattern: String,
    pub params: Params,
}

impl<V: Clone> From<RouteMatch<'_, V>> for ResolvedRoute<V> {
    fn from(hit: RouteMatch<'_, V>) -> Self {
        Self {
            target: hit.route.target().clone(),
            pattern: hit.route.pattern().as_str().to_string(),
            params: hit.params,
        }
    }
}

/// Snapshot of where the application currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState<V> {
    /// Location string as received.
    pub location: String,
    /// Path that was resolved. Differs from the location's path after a redirect.
    pub path: String,
    pub query: Vec<(String, String)>,
    /// `None` when nothing matched.
    pub route: Option<ResolvedRoute<V>>,
    /// Original path when the fallback redirected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
}

impl<V> NavigationState<V> {
    pub fn is_not_found(&self) -> bool {
        self.route.is_none()
    }

    pub fn target(&self) -> Option<&V> {
        self.route.as_ref().map(|r| &r.target)
    }

    /// Value bound to a path parameter, e.g. `param("id")`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.route
            .as_ref()
            .and_then(|r| r.params.get(name))
            .map(String::as_str)
    }
}
