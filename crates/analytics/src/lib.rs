//! # SaaS Metrics Analytics
//!
//! This crate computes the standard SaaS business metrics: ARPU, customer
//! lifetime and LTV, MRR and ARR, customer and revenue churn, net and gross
//! revenue retention, cohort retention and historical LTV.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of billing
//!   providers, storage or configuration files. It depends only on `core-types`
//!   for its input records.
//! - **Stateless Calculation:** Every formula is a plain function in [`formulas`].
//!   `MetricsCalculator` wraps them with a default churn-rate unit and can produce a
//!   full `SaasReport` in one call.
//! - **No Error Paths in Formulas:** Churn and retention ratios return `0.0` on a
//!   zero denominator, while ARPU and average duration let infinity and NaN through.
//!
//! ## Public API
//!
//! - `MetricsCalculator`: The main struct exposing every metric.
//! - `LtvBuilder` / `LtvBreakdown`: Fluent assembly of an LTV calculation.
//! - `ReportInput` / `SaasReport`: Batch input and the resulting metric snapshot.
//! - `AnalyticsError`: The error returned when an `LtvBuilder` lacks an input.

// Declare the modules that constitute this crate.
pub mod builder;
pub mod engine;
pub mod error;
pub mod formulas;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use builder::{LtvBreakdown, LtvBuilder};
pub use engine::MetricsCalculator;
pub use error::AnalyticsError;
pub use report::{ReportInput, SaasReport};
