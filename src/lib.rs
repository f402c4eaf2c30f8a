//! OpScore - Operational Excellence Self-Assessment
//!
//! This crate implements a guided questionnaire over operational categories,
//! scores the answers, recommends focus areas, and aggregates completed
//! assessments into a dashboard with averages and a trend series.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
