//! Dashboard - aggregate views over completed assessments.

pub mod aggregation;
pub mod summary;

pub use aggregation::{AggregationEngine, DEFAULT_TREND_WINDOW, DISPLAY_SCALE, RECENT_LIMIT};
pub use summary::{AssessmentSnapshot, CategoryAverage, DashboardSummary, TrendPoint};
