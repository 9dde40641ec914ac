//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//!
//! ```toml
//! history = "hash"
//!
//! [fallback]
//! kind = "redirect"
//! to = "/"
//!
//! [[routes]]
//! path = "/todos/:id/edit"
//! view = "create-edit-todo"
//! ```

use serde::{Deserialize, Serialize};

use crate::app::{View, ROUTES};
use crate::navigation::{Fallback, HistoryMode};
use crate::observability::logging::LogFormat;

/// Root configuration of the router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Where the route path lives in the URL.
    pub history: HistoryMode,

    /// Route declarations in precedence order.
    pub routes: Vec<RouteConfig>,

    /// Policy applied when no route matches.
    pub fallback: Fallback,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryMode::Hash,
            routes: ROUTES
                .iter()
                .map(|&(path, view)| RouteConfig {
                    path: path.to_string(),
                    view,
                })
                .collect(),
            fallback: Fallback::NotFound,
            observability: ObservabilityConfig::default(),
        }
    }
}

/// A single route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern, e.g. `/assignees/:id/edit`.
    pub path: String,

    /// View rendered for this route.
    pub view: View,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error, off).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
