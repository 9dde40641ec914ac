//! Navigation controller.
//!
//! # Responsibilities
//! - Own the installed route table
//! - Turn location changes into a fresh `NavigationState`
//! - Apply the not-found fallback policy
//! - Hand the result to the view layer
//!
//! # Design Decisions
//! - The previous state is discarded on every change (no history stack)
//! - Not-found is a state, never an error
//! - A redirect fallback is applied at most once

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::View;
use crate::config::RouterConfig;
use crate::navigation::location::{HistoryMode, Location};
use crate::navigation::state::{NavigationState, ResolvedRoute};
use crate::observability::metrics;
use crate::routing::{Params, RouteError, RouteTable};

/// What to do when no route matches.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Fallback {
    /// Leave the state unresolved; the view layer renders its not-found view.
    #[default]
    NotFound,
    /// Resolve `to` instead.
    Redirect { to: String },
}

/// Receives resolved navigation results and renders them.
pub trait ViewLayer<V> {
    fn render(&mut self, target: &V, params: &Params);

    fn render_not_found(&mut self, path: &str);
}

/// Intercepts location changes and resolves them against the route table.
#[derive(Debug)]
pub struct Navigator<V> {
    table: RouteTable<V>,
    history: HistoryMode,
    fallback: Fallback,
    current: Option<NavigationState<V>>,
}

impl<V: Clone + fmt::Debug> Navigator<V> {
    /// Install a route table.
    pub fn install(table: RouteTable<V>, history: HistoryMode, fallback: Fallback) -> Self {
        tracing::info!(
            routes = table.len(),
            history = ?history,
            fallback = ?fallback,
            "Route table installed"
        );
        metrics::record_table_size(table.len());
        Self {
            table,
            history,
            fallback,
            current: None,
        }
    }

    /// Resolve a new location, replacing the current state.
    pub fn navigate(&mut self, location: &str) -> &NavigationState<V> {
        let state = self.resolve_location(location);
        self.current.insert(state)
    }

    /// Resolve a new location and render it through `view`.
    pub fn dispatch<L: ViewLayer<V>>(&mut self, location: &str, view: &mut L) -> &NavigationState<V> {
        let state = self.navigate(location);
        match &state.route {
            Some(route) => view.render(&route.target, &route.params),
            None => view.render_not_found(&state.path),
        }
        state
    }

    /// Compute the state for `location` without storing it.
    pub fn resolve_location(&self, location: &str) -> NavigationState<V> {
        let Location { path, query } = Location::parse(location, self.history);

        let mut state = NavigationState {
            location: location.to_string(),
            path,
            query,
            route: None,
            redirected_from: None,
        };

        match self.table.resolve(&state.path) {
            Ok(hit) => {
                tracing::debug!(path = %state.path, pattern = %hit.route.pattern(), "Route matched");
                metrics::record_resolution(metrics::OUTCOME_MATCHED);
                state.route = Some(hit.into());
            }
            Err(err) => self.apply_fallback(&mut state, err),
        }
        state
    }

    fn apply_fallback(&self, state: &mut NavigationState<V>, err: RouteError) {
        if let Fallback::Redirect { to } = &self.fallback {
            if *to != state.path {
                if let Ok(hit) = self.table.resolve(to) {
                    tracing::debug!(from = %state.path, to = %to, "No route matched, redirecting");
                    metrics::record_resolution(metrics::OUTCOME_REDIRECTED);
                    state.redirected_from = Some(std::mem::replace(&mut state.path, to.clone()));
                    state.route = Some(hit.into());
                    return;
                }
            }
        }

        tracing::warn!(path = %state.path, error = %err, "No route matched");
        metrics::record_resolution(metrics::OUTCOME_NOT_FOUND);
    }

    pub fn current(&self) -> Option<&NavigationState<V>> {
        self.current.as_ref()
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.history
    }

    pub fn fallback(&self) -> &Fallback {
        &self.fallback
    }
}

impl Navigator<View> {
    /// Build the table from config and install it.
    pub fn from_config(config: &RouterConfig) -> Result<Self, RouteError> {
        let table = RouteTable::from_config(&config.routes)?;
        Ok(Self::install(table, config.history, config.fallback.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        rendered: Vec<String>,
    }

    impl ViewLayer<&'static str> for Recorder {
        fn render(&mut self, target: &&'static str, params: &Params) {
            self.rendered.push(format!("{target}{params:?}"));
        }

        fn render_not_found(&mut self, path: &str) {
            self.rendered.push(format!("404 {path}"));
        }
    }

    fn navigator(fallback: Fallback) -> Navigator<&'static str> {
        let table = RouteTable::new([("/", "home"), ("/todos/:id/edit", "edit")]).unwrap();
        Navigator::install(table, HistoryMode::Hash, fallback)
    }

    #[test]
    fn test_navigate_replaces_state() {
        let mut nav = navigator(Fallback::NotFound);
        assert!(nav.current().is_none());

        let state = nav.navigate("#/todos/7/edit");
        assert_eq!(state.target(), Some(&"edit"));
        assert_eq!(state.param("id"), Some("7"));

        nav.navigate("#/");
        let current = nav.current().unwrap();
        assert_eq!(current.target(), Some(&"home"));
        assert_eq!(current.param("id"), None);
    }

    #[test]
    fn test_not_found_is_a_state() {
        let mut nav = navigator(Fallback::NotFound);
        let state = nav.navigate("#/missing");
        assert!(state.is_not_found());
        assert_eq!(state.path, "/missing");
        assert_eq!(state.redirected_from, None);
    }

    #[test]
    fn test_redirect_fallback() {
        let mut nav = navigator(Fallback::Redirect { to: "/".into() });
        let state = nav.navigate("#/missing");
        assert_eq!(state.target(), Some(&"home"));
        assert_eq!(state.path, "/");
        assert_eq!(state.redirected_from.as_deref(), Some("/missing"));
    }

    #[test]
    fn test_redirect_to_unknown_path_stays_not_found() {
        let mut nav = navigator(Fallback::Redirect { to: "/gone".into() });
        let state = nav.navigate("#/missing");
        assert!(state.is_not_found());
        assert_eq!(state.path, "/missing");
    }

    #[test]
    fn test_dispatch_renders() {
        let mut nav = navigator(Fallback::NotFound);
        let mut view = Recorder::default();
        nav.dispatch("#/todos/3/edit", &mut view);
        nav.dispatch("#/nope", &mut view);
        assert_eq!(view.rendered, vec![r#"edit{"id": "3"}"#, "404 /nope"]);
    }
}
