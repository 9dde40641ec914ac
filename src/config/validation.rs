//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject malformed route patterns
//! - Detect routes shadowed by an earlier declaration
//! - Check that a redirect fallback lands on a well-formed route
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::schema::RouterConfig;
use crate::navigation::Fallback;
use crate::routing::matcher::split_path;
use crate::routing::{Matcher, PathPattern, RouteError};

/// A semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routes declared")]
    NoRoutes,

    #[error("route #{index}: {source}")]
    Pattern { index: usize, source: RouteError },

    #[error("route {path:?} is unreachable behind {shadowed_by:?}")]
    Shadowed { path: String, shadowed_by: String },

    #[error("fallback redirect {to:?} does not match any route")]
    UnresolvableRedirect { to: String },

    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut parsed: Vec<PathPattern> = Vec::with_capacity(config.routes.len());
    for (index, route) in config.routes.iter().enumerate() {
        match PathPattern::parse(&route.path) {
            Ok(pattern) => {
                if let Some(prior) = parsed.iter().find(|prior| prior.covers(&pattern)) {
                    errors.push(ValidationError::Shadowed {
                        path: route.path.clone(),
                        shadowed_by: prior.as_str().to_string(),
                    });
                }
                parsed.push(pattern);
            }
            Err(source) => errors.push(ValidationError::Pattern { index, source }),
        }
    }

    if let Fallback::Redirect { to } = &config.fallback {
        let segments = split_path(to);
        let lands = parsed
            .iter()
            .any(|pattern| pattern.match_segments(&segments).is_some());
        if !lands {
            errors.push(ValidationError::UnresolvableRedirect { to: to.clone() });
        }
    }

    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::config::RouteConfig;

    fn route(path: &str, view: View) -> RouteConfig {
        RouteConfig {
            path: path.to_string(),
            view,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&RouterConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RouterConfig::default();
        config.routes = vec![
            route("/todos", View::Todos),
            route("todos", View::Todos),
            route("/todos/", View::TodoById),
        ];
        config.fallback = Fallback::Redirect { to: "/home".into() };
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], ValidationError::Pattern { index: 1, .. }));
        assert_eq!(
            errors[1],
            ValidationError::Shadowed {
                path: "/todos/".into(),
                shadowed_by: "/todos".into(),
            }
        );
        assert_eq!(
            errors[2],
            ValidationError::UnresolvableRedirect { to: "/home".into() }
        );
        assert_eq!(errors[3], ValidationError::LogLevel("loud".into()));
    }

    #[test]
    fn test_redirect_checked_against_well_formed_routes() {
        let mut config = RouterConfig::default();
        config.routes.push(route("/bad//x", View::About));
        config.fallback = Fallback::Redirect { to: "/todos".into() };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ValidationError::Pattern { index: 11, .. }
        ));
    }

    #[test]
    fn test_empty_routes() {
        let mut config = RouterConfig::default();
        config.routes.clear();
        assert_eq!(validate_config(&config), Err(vec![ValidationError::NoRoutes]));
    }

    #[test]
    fn test_redirect_to_declared_route() {
        let mut config = RouterConfig::default();
        config.fallback = Fallback::Redirect { to: "/todos".into() };
        assert_eq!(validate_config(&config), Ok(()));
    }
}
