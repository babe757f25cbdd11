//! # SaaS Metrics
//!
//! Standard SaaS business metrics (LTV, ARPU, MRR/ARR, churn, NRR/GRR, cohort
//! retention) computed as pure functions over small numeric records.
//!
//! This crate is a facade over the workspace:
//!
//! - `core-types`: the immutable input records.
//! - `analytics`: the formulas, `MetricsCalculator`, `LtvBuilder` and `SaasReport`.
//! - `configuration`: config loading and tracing setup.
//!
//! The facade is where the two Layer 1 crates meet: `calculator_from_settings`
//! turns the `[calculator]` config section into a `MetricsCalculator`.

pub use analytics::{
    AnalyticsError, LtvBreakdown, LtvBuilder, MetricsCalculator, ReportInput, SaasReport, formulas,
};
pub use configuration::{
    CalculatorSettings, Config, LoggingSettings, WorkerGuard, error::ConfigError, init_tracing,
    load_config, load_config_from,
};
pub use core_types::{
    BillingInterval, CohortDataPoint, CoreError, CustomerChurnInput, DurationUnit, NrrInput,
    RevenueChurnInput, Subscription,
};
pub use rust_decimal::Decimal;

/// Creates a calculator using the defaults from the `[calculator]` config section.
pub fn calculator_from_settings(settings: &CalculatorSettings) -> MetricsCalculator {
    MetricsCalculator::with_duration_unit(settings.duration_unit)
}

/// Loads `saas_metrics.toml` (if present) and the environment, installs the
/// tracing subscriber, and returns a calculator configured from the result.
///
/// Keep the returned guard alive when logging to a file.
pub fn bootstrap() -> Result<(MetricsCalculator, Option<WorkerGuard>), ConfigError> {
    let config = load_config()?;
    let guard = init_tracing(&config.logging)?;
    let calculator = calculator_from_settings(&config.calculator);

    tracing::info!(duration_unit = ?calculator.duration_unit(), "Metrics calculator ready");
    Ok((calculator, guard))
}
