use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The billing cadence of a subscription.
///
/// Tags that are not one of the four known cadences are kept verbatim in
/// `Other` rather than rejected, so that a batch from a provider with unusual
/// plans still deserializes. Such subscriptions contribute nothing to MRR.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillingInterval {
    Month,
    Year,
    Week,
    Day,
    Other(String),
}

impl BillingInterval {
    /// Returns the monthly-equivalent revenue of `amount` billed at this interval.
    pub fn monthly_equivalent(&self, amount: f64) -> f64 {
        match self {
            BillingInterval::Month => amount,
            BillingInterval::Year => amount / 12.0,
            BillingInterval::Week => amount * 52.0 / 12.0,
            BillingInterval::Day => amount * 365.0 / 12.0,
            BillingInterval::Other(_) => 0.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BillingInterval::Month => "month",
            BillingInterval::Year => "year",
            BillingInterval::Week => "week",
            BillingInterval::Day => "day",
            BillingInterval::Other(tag) => tag,
        }
    }
}

impl FromStr for BillingInterval {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let interval = match s.to_ascii_lowercase().as_str() {
            "month" => BillingInterval::Month,
            "year" => BillingInterval::Year,
            "week" => BillingInterval::Week,
            "day" => BillingInterval::Day,
            _ => BillingInterval::Other(s.to_string()),
        };
        Ok(interval)
    }
}

impl From<String> for BillingInterval {
    fn from(tag: String) -> Self {
        match tag.parse() {
            Ok(interval) => interval,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for BillingInterval {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<BillingInterval> for String {
    fn from(interval: BillingInterval) -> Self {
        interval.as_str().to_string()
    }
}

impl fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a churn rate passed to the average-duration formula is expressed.
///
/// `Percentage` means `5.0` is five percent; `Decimal` means `0.05` is five percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Percentage,
    Decimal,
}
