use crate::builder::LtvBuilder;
use crate::formulas;
use crate::report::{ReportInput, SaasReport};
use core_types::{
    CohortDataPoint, CustomerChurnInput, DurationUnit, NrrInput, RevenueChurnInput, Subscription,
};

/// A stateless calculator for SaaS business metrics.
///
/// The only thing it carries is the unit in which churn rates are read when no
/// unit is given explicitly. Every method is a pure function of its arguments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetricsCalculator {
    duration_unit: DurationUnit,
}

impl MetricsCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration_unit(duration_unit: DurationUnit) -> Self {
        Self { duration_unit }
    }

    pub fn duration_unit(&self) -> DurationUnit {
        self.duration_unit
    }

    pub fn arpu(&self, sales: f64, users: f64) -> f64 {
        formulas::arpu(sales, users)
    }

    /// Average customer lifetime, reading `churn_rate` in the calculator's default unit.
    pub fn average_duration(&self, churn_rate: f64) -> f64 {
        formulas::average_duration(churn_rate, self.duration_unit)
    }

    pub fn average_duration_with_unit(&self, churn_rate: f64, unit: DurationUnit) -> f64 {
        formulas::average_duration(churn_rate, unit)
    }

    pub fn ltv(&self, arpu: f64, average_duration: f64) -> f64 {
        formulas::ltv(arpu, average_duration)
    }

    /// Starts a fluent LTV calculation that inherits this calculator's duration unit.
    pub fn ltv_builder(&self) -> LtvBuilder {
        LtvBuilder::new().duration_unit(self.duration_unit)
    }

    pub fn mrr(&self, subscriptions: &[Subscription]) -> f64 {
        formulas::mrr(subscriptions)
    }

    pub fn arr(&self, subscriptions: &[Subscription]) -> f64 {
        formulas::arr(subscriptions)
    }

    pub fn customer_churn_rate(&self, input: &CustomerChurnInput) -> f64 {
        formulas::customer_churn_rate(input)
    }

    pub fn revenue_churn_rate(&self, input: &RevenueChurnInput) -> f64 {
        formulas::revenue_churn_rate(input)
    }

    pub fn net_revenue_retention(&self, input: &NrrInput) -> f64 {
        formulas::net_revenue_retention(input)
    }

    pub fn gross_revenue_retention(&self, input: &NrrInput) -> f64 {
        formulas::gross_revenue_retention(input)
    }

    pub fn cohort_retention(&self, cohorts: &[CohortDataPoint]) -> Vec<f64> {
        formulas::cohort_retention(cohorts)
    }

    pub fn historical_ltv(&self, customer_revenues: &[f64]) -> f64 {
        formulas::historical_ltv(customer_revenues)
    }

    /// Computes every metric the input has data for.
    ///
    /// # Arguments
    ///
    /// * `input` - Subscriptions plus any of the optional churn, retention,
    ///   cohort and revenue-history inputs.
    ///
    /// # Returns
    ///
    /// A `SaasReport` whose optional fields are `Some` exactly when the
    /// matching input was supplied.
    #[tracing::instrument(skip_all, fields(subscriptions = input.subscriptions.len()))]
    pub fn report(&self, input: &ReportInput) -> SaasReport {
        let mut report = SaasReport::new();

        self.calculate_recurring_revenue(&input.subscriptions, &mut report);
        self.calculate_churn(input, &mut report);
        self.calculate_retention(input, &mut report);

        report.historical_ltv = input
            .customer_revenues
            .as_deref()
            .map(formulas::historical_ltv);

        tracing::debug!(mrr = report.mrr, arr = report.arr, "SaaS report calculated");
        report
    }

    fn calculate_recurring_revenue(&self, subscriptions: &[Subscription], report: &mut SaasReport) {
        report.mrr = formulas::mrr(subscriptions);
        report.arr = report.mrr * 12.0;
    }

    fn calculate_churn(&self, input: &ReportInput, report: &mut SaasReport) {
        report.customer_churn_rate = input
            .customer_churn
            .as_ref()
            .map(formulas::customer_churn_rate);
        report.revenue_churn_rate = input
            .revenue_churn
            .as_ref()
            .map(formulas::revenue_churn_rate);
    }

    fn calculate_retention(&self, input: &ReportInput, report: &mut SaasReport) {
        if let Some(retention) = &input.retention {
            report.net_revenue_retention = Some(formulas::net_revenue_retention(retention));
            report.gross_revenue_retention = Some(formulas::gross_revenue_retention(retention));
        }
        report.cohort_retention = formulas::cohort_retention(&input.cohorts);
    }
}
