//! Shared utilities for integration tests.

use todo_routes::navigation::{Fallback, HistoryMode};
use todo_routes::routing::Params;
use todo_routes::{app, Navigator, View, ViewLayer};

/// What the view layer was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    View(View, Params),
    NotFound(String),
}

/// A view layer that records every render call.
#[derive(Debug, Default)]
pub struct RecordingViewLayer {
    pub calls: Vec<Rendered>,
}

impl ViewLayer<View> for RecordingViewLayer {
    fn render(&mut self, target: &View, params: &Params) {
        self.calls.push(Rendered::View(*target, params.clone()));
    }

    fn render_not_found(&mut self, path: &str) {
        self.calls.push(Rendered::NotFound(path.to_string()));
    }
}

/// Navigator over the application routes with hash history.
pub fn app_navigator(fallback: Fallback) -> Navigator<View> {
    let table = app::route_table().expect("application routes are well formed");
    Navigator::install(table, HistoryMode::Hash, fallback)
}

/// Build a parameter map from pairs.
pub fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
