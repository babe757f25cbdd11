use crate::error::AnalyticsError;
use crate::formulas;
use core_types::DurationUnit;
use serde::{Deserialize, Serialize};

/// The intermediate values and the result of an LTV calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LtvBreakdown {
    pub arpu: f64,
    pub average_duration: f64,
    pub ltv: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RevenueSource {
    Arpu(f64),
    SalesAndUsers { sales: f64, users: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DurationSource {
    AverageDuration(f64),
    ChurnRate(f64),
}

/// A fluent way to assemble the arguments of an LTV calculation.
///
/// The builder only collects arguments. Nothing is computed until
/// [`LtvBuilder::calculate`], which runs the plain formulas over them.
///
/// ```
/// use analytics::LtvBuilder;
///
/// let breakdown = LtvBuilder::new()
///     .sales_and_users(1000.0, 100.0)
///     .churn_rate(10.0)
///     .calculate()
///     .unwrap();
/// assert_eq!(breakdown.ltv, 100.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LtvBuilder {
    revenue: Option<RevenueSource>,
    duration: Option<DurationSource>,
    unit: DurationUnit,
}

impl LtvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a known ARPU. Replaces any earlier `sales_and_users`.
    pub fn arpu(mut self, arpu: f64) -> Self {
        self.revenue = Some(RevenueSource::Arpu(arpu));
        self
    }

    /// Derives ARPU from total sales and user count. Replaces any earlier `arpu`.
    pub fn sales_and_users(mut self, sales: f64, users: f64) -> Self {
        self.revenue = Some(RevenueSource::SalesAndUsers { sales, users });
        self
    }

    /// Uses a known average customer lifetime. Replaces any earlier `churn_rate`.
    pub fn average_duration(mut self, average_duration: f64) -> Self {
        self.duration = Some(DurationSource::AverageDuration(average_duration));
        self
    }

    /// Derives the average lifetime from a churn rate, read in the builder's unit.
    pub fn churn_rate(mut self, churn_rate: f64) -> Self {
        self.duration = Some(DurationSource::ChurnRate(churn_rate));
        self
    }

    pub fn duration_unit(mut self, unit: DurationUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn calculate(&self) -> Result<LtvBreakdown, AnalyticsError> {
        let arpu = match self.revenue {
            Some(RevenueSource::Arpu(arpu)) => arpu,
            Some(RevenueSource::SalesAndUsers { sales, users }) => formulas::arpu(sales, users),
            None => return Err(AnalyticsError::MissingInput("arpu".to_string())),
        };

        let average_duration = match self.duration {
            Some(DurationSource::AverageDuration(duration)) => duration,
            Some(DurationSource::ChurnRate(rate)) => formulas::average_duration(rate, self.unit),
            None => return Err(AnalyticsError::MissingInput("average_duration".to_string())),
        };

        let ltv = formulas::ltv(arpu, average_duration);
        tracing::debug!(arpu, average_duration, ltv, "Calculated LTV");

        Ok(LtvBreakdown {
            arpu,
            average_duration,
            ltv,
        })
    }
}
