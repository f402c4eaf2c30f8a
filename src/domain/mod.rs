//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Questions, categories and the ordered question catalog
//! - `assessment` - Assessment aggregate, responses and the navigation state machine
//! - `analysis` - Pure scoring, tiering and recommendation services
//! - `dashboard` - Aggregation across completed assessments

pub mod analysis;
pub mod assessment;
pub mod catalog;
pub mod dashboard;
pub mod foundation;
