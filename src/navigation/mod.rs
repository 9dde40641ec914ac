//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Address change (hash or path)
//!     → location.rs (extract path and query)
//!     → controller.rs (resolve against RouteTable, apply fallback)
//!     → state.rs (fresh NavigationState, previous one discarded)
//!     → ViewLayer (render target with params, or not-found)
//! ```

pub mod controller;
pub mod location;
pub mod state;

pub use controller::{Fallback, Navigator, ViewLayer};
pub use location::{HistoryMode, Location};
pub use state::{NavigationState, ResolvedRoute};
