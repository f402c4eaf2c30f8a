//! Dashboard query handlers.
//!
//! Read-only handlers for aggregating assessment history.

mod get_dashboard_summary;

pub use get_dashboard_summary::{GetDashboardSummaryHandler, GetDashboardSummaryQuery};
