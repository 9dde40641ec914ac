//! Metrics collection.
//!
//! # Metrics
//! - `route_resolutions_total` (counter): resolutions by outcome
//! - `route_table_routes` (gauge): routes in the installed table

use metrics::{counter, gauge};

pub const OUTCOME_MATCHED: &str = "matched";
pub const OUTCOME_REDIRECTED: &str = "redirected";
pub const OUTCOME_NOT_FOUND: &str = "not_found";

/// Record one location resolution.
pub fn record_resolution(outcome: &'static str) {
    counter!("route_resolutions_total", "outcome" => outcome).increment(1);
}

/// Record the size of the installed route table.
pub fn record_table_size(routes: usize) {
    gauge!("route_table_routes").set(routes as f64);
}
