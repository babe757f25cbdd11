use core_types::{CohortDataPoint, CustomerChurnInput, NrrInput, RevenueChurnInput, Subscription};
use serde::{Deserialize, Serialize};

/// Everything the calculator needs to produce a full [`SaasReport`] in one call.
///
/// Only `subscriptions` is always present; the remaining inputs are optional and
/// their metrics are left as `None` in the report when omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportInput {
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub customer_churn: Option<CustomerChurnInput>,
    #[serde(default)]
    pub revenue_churn: Option<RevenueChurnInput>,
    #[serde(default)]
    pub retention: Option<NrrInput>,
    #[serde(default)]
    pub cohorts: Vec<CohortDataPoint>,
    #[serde(default)]
    pub customer_revenues: Option<Vec<f64>>,
}

/// A snapshot of the SaaS metrics derived from a single [`ReportInput`].
///
/// `None` means the corresponding input was not supplied. A supplied input with a
/// zero denominator still yields `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaasReport {
    // I. Recurring revenue
    pub mrr: f64,
    pub arr: f64,

    // II. Churn
    pub customer_churn_rate: Option<f64>,
    pub revenue_churn_rate: Option<f64>,

    // III. Retention
    pub net_revenue_retention: Option<f64>,
    pub gross_revenue_retention: Option<f64>,
    pub cohort_retention: Vec<f64>,

    // IV. Lifetime value
    pub historical_ltv: Option<f64>,
}

impl SaasReport {
    /// Creates a new, zeroed-out report with every optional metric unset.
    pub fn new() -> Self {
        Self {
            mrr: 0.0,
            arr: 0.0,
            customer_churn_rate: None,
            revenue_churn_rate: None,
            net_revenue_retention: None,
            gross_revenue_retention: None,
            cohort_retention: Vec::new(),
            historical_ltv: None,
        }
    }
}

impl Default for SaasReport {
    fn default() -> Self {
        Self::new()
    }
}
