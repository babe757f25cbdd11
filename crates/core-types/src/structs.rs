use crate::enums::BillingInterval;
use crate::error::CoreError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A single recurring charge, used only to derive its monthly-equivalent revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub amount: f64,
    pub interval: BillingInterval,
}

impl Subscription {
    pub fn new(amount: f64, interval: impl Into<BillingInterval>) -> Self {
        Self {
            amount,
            interval: interval.into(),
        }
    }

    /// Builds a subscription from a fixed-point amount as reported by a billing provider.
    ///
    /// Fails if the amount is negative.
    pub fn try_from_decimal(
        amount: Decimal,
        interval: impl Into<BillingInterval>,
    ) -> Result<Self, CoreError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CoreError::InvalidInput(
                "subscription amount".to_string(),
                format!("{amount} is negative"),
            ));
        }
        // Every `Decimal` fits in an `f64`; the `None` arm is unreachable in practice.
        let value = amount.to_f64().ok_or_else(|| {
            CoreError::InvalidInput(
                "subscription amount".to_string(),
                format!("{amount} has no f64 equivalent"),
            )
        })?;
        Ok(Self::new(value, interval))
    }
}

/// Customer counts at the start of a period and how many of them left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerChurnInput {
    pub start_customers: u64,
    pub churned_customers: u64,
}

/// Revenue lost over a period through cancellations and downgrades.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RevenueChurnInput {
    pub start_mrr: f64,
    pub churned_mrr: f64,
    #[serde(default)]
    pub contraction_mrr: f64,
}

/// MRR movements over a period, used for net and gross revenue retention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NrrInput {
    pub start_mrr: f64,
    pub churned_mrr: f64,
    /// Revenue from customers acquired during the period. Carried for
    /// completeness; neither retention formula reads it.
    #[serde(default)]
    pub new_mrr: f64,
    #[serde(default)]
    pub expansion_mrr: f64,
    #[serde(default)]
    pub contraction_mrr: f64,
}

/// Number of customers from one cohort still active at a given month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortDataPoint {
    pub month: i64,
    pub customers: u64,
}
