//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing and navigation produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (resolution counters)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so CLI output on stdout stays machine readable
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
