//! Client-side route table for the assignee / to-do application.

pub mod app;
pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use app::View;
pub use config::RouterConfig;
pub use navigation::{NavigationState, Navigator, ViewLayer};
pub use routing::{RouteError, RouteTable};
