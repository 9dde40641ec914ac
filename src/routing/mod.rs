//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route declarations (at startup):
//!     (pattern, view)[]
//!     → pattern.rs (parse, reject malformed)
//!     → Freeze as immutable RouteTable
//!
//! Path lookup:
//!     candidate path
//!     → router.rs (scan in declaration order)
//!     → matcher.rs (structural match, bind parameters)
//!     → Return: RouteMatch or NotFound
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)
//! - View handles are opaque to the table

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod router;

pub use error::{PatternFault, RouteError};
pub use matcher::{Matcher, Params};
pub use pattern::PathPattern;
pub use router::{Route, RouteMatch, RouteTable};
