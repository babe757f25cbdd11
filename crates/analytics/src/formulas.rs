//! The metric formulas themselves, as plain functions.
//!
//! Churn and retention ratios return `0.0` when their denominator is zero.
//! ARPU and average duration do not guard, and surface IEEE infinity or NaN.

use core_types::{
    BillingInterval, CohortDataPoint, CustomerChurnInput, DurationUnit, NrrInput,
    RevenueChurnInput, Subscription,
};

/// Average revenue per user: `sales / users`.
pub fn arpu(sales: f64, users: f64) -> f64 {
    sales / users
}

/// Expected customer lifetime, in periods, implied by a churn rate.
pub fn average_duration(churn_rate: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Percentage => 1.0 / (churn_rate / 100.0),
        DurationUnit::Decimal => 1.0 / churn_rate,
    }
}

/// Lifetime value: `arpu * average_duration`.
pub fn ltv(arpu: f64, average_duration: f64) -> f64 {
    arpu * average_duration
}

/// Monthly recurring revenue across a set of subscriptions.
///
/// Subscriptions with an unrecognised interval contribute nothing.
pub fn mrr(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .map(|sub| {
            if let BillingInterval::Other(tag) = &sub.interval {
                tracing::debug!(
                    interval = %tag,
                    amount = sub.amount,
                    "Ignoring subscription with unknown interval"
                );
            }
            sub.interval.monthly_equivalent(sub.amount)
        })
        .sum()
}

/// Annual recurring revenue: twelve times MRR.
pub fn arr(subscriptions: &[Subscription]) -> f64 {
    mrr(subscriptions) * 12.0
}

pub fn customer_churn_rate(input: &CustomerChurnInput) -> f64 {
    if input.start_customers == 0 {
        return 0.0;
    }
    (input.churned_customers as f64 / input.start_customers as f64) * 100.0
}

/// Revenue churn, counting both cancellations and contraction.
pub fn revenue_churn_rate(input: &RevenueChurnInput) -> f64 {
    if input.start_mrr == 0.0 {
        return 0.0;
    }
    ((input.churned_mrr + input.contraction_mrr) / input.start_mrr) * 100.0
}

/// Net revenue retention. `new_mrr` is not part of the formula.
pub fn net_revenue_retention(input: &NrrInput) -> f64 {
    if input.start_mrr == 0.0 {
        return 0.0;
    }
    let retained =
        input.start_mrr + input.expansion_mrr - input.contraction_mrr - input.churned_mrr;
    (retained / input.start_mrr) * 100.0
}

/// Gross revenue retention. Expansion is ignored even when supplied.
pub fn gross_revenue_retention(input: &NrrInput) -> f64 {
    if input.start_mrr == 0.0 {
        return 0.0;
    }
    let retained = input.start_mrr - input.contraction_mrr - input.churned_mrr;
    (retained / input.start_mrr) * 100.0
}

/// Retention of each cohort point relative to the earliest month, in month order.
///
/// Points sharing a month keep their input order.
pub fn cohort_retention(cohorts: &[CohortDataPoint]) -> Vec<f64> {
    let mut sorted = cohorts.to_vec();
    sorted.sort_by_key(|point| point.month);

    let Some(first) = sorted.first() else {
        return Vec::new();
    };
    if first.customers == 0 {
        return vec![0.0; cohorts.len()];
    }

    let base = first.customers as f64;
    sorted
        .iter()
        .map(|point| (point.customers as f64 / base) * 100.0)
        .collect()
}

/// Mean revenue per customer over their observed history.
pub fn historical_ltv(customer_revenues: &[f64]) -> f64 {
    if customer_revenues.is_empty() {
        return 0.0;
    }
    customer_revenues.iter().sum::<f64>() / customer_revenues.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn point(month: i64, customers: u64) -> CohortDataPoint {
        CohortDataPoint { month, customers }
    }

    fn nrr(start_mrr: f64, expansion_mrr: f64, contraction_mrr: f64, churned_mrr: f64) -> NrrInput {
        NrrInput {
            start_mrr,
            churned_mrr,
            new_mrr: 0.0,
            expansion_mrr,
            contraction_mrr,
        }
    }

    #[test]
    fn arpu_divides_sales_by_users() {
        assert_eq!(arpu(100.0, 10.0), 10.0);
    }

    #[test]
    fn arpu_with_zero_users_is_not_guarded() {
        assert_eq!(arpu(100.0, 0.0), f64::INFINITY);
        assert!(arpu(0.0, 0.0).is_nan());
    }

    #[test]
    fn average_duration_units() {
        let percentage = average_duration(10.0, DurationUnit::Percentage);
        assert_abs_diff_eq!(percentage, 10.0, epsilon = 1e-9);

        let decimal = average_duration(0.1, DurationUnit::Decimal);
        assert_abs_diff_eq!(decimal, 10.0, epsilon = 1e-9);

        for unit in [DurationUnit::Percentage, DurationUnit::Decimal] {
            assert_eq!(average_duration(0.0, unit), f64::INFINITY);
        }
    }

    #[test]
    fn ltv_multiplies_arpu_by_duration() {
        assert_eq!(ltv(10.0, 10.0), 100.0);

        let unbounded = average_duration(0.0, DurationUnit::Percentage);
        assert_eq!(ltv(10.0, unbounded), f64::INFINITY);
    }

    #[test]
    fn mrr_of_monthly_subscriptions() {
        let subs = vec![
            Subscription::new(1000.0, "month"),
            Subscription::new(2000.0, "month"),
        ];
        assert_eq!(mrr(&subs), 3000.0);
    }

    #[test]
    fn mrr_normalises_intervals() {
        assert_eq!(mrr(&[Subscription::new(12000.0, "year")]), 1000.0);

        let mixed = vec![
            Subscription::new(1000.0, "month"),
            Subscription::new(12000.0, "year"),
            Subscription::new(52.0, "week"),
        ];
        assert_abs_diff_eq!(mrr(&mixed), 2225.33, epsilon = 0.01);

        let daily = [Subscription::new(12.0, "day")];
        assert_abs_diff_eq!(mrr(&daily), 365.0, epsilon = 1e-9);
    }

    #[test]
    fn mrr_ignores_unknown_intervals() {
        let subs = vec![
            Subscription::new(1000.0, "month"),
            Subscription::new(900.0, "quarter"),
        ];
        assert_eq!(mrr(&subs), 1000.0);
        assert_eq!(mrr(&[]), 0.0);
    }

    #[test]
    fn arr_is_twelve_months_of_mrr() {
        assert_eq!(arr(&[Subscription::new(1000.0, "month")]), 12000.0);
    }

    #[test]
    fn customer_churn() {
        let input = CustomerChurnInput {
            start_customers: 100,
            churned_customers: 5,
        };
        assert_abs_diff_eq!(customer_churn_rate(&input), 5.0, epsilon = 1e-9);

        let empty = CustomerChurnInput {
            start_customers: 0,
            churned_customers: 5,
        };
        assert_eq!(customer_churn_rate(&empty), 0.0);
    }

    #[test]
    fn revenue_churn_includes_contraction() {
        let input = RevenueChurnInput {
            start_mrr: 10000.0,
            churned_mrr: 500.0,
            contraction_mrr: 200.0,
        };
        assert_abs_diff_eq!(revenue_churn_rate(&input), 7.0, epsilon = 1e-9);

        let input = RevenueChurnInput {
            contraction_mrr: 0.0,
            ..input
        };
        assert_abs_diff_eq!(revenue_churn_rate(&input), 5.0, epsilon = 1e-9);

        let input = RevenueChurnInput {
            start_mrr: 0.0,
            ..input
        };
        assert_eq!(revenue_churn_rate(&input), 0.0);
    }

    #[test]
    fn net_revenue_retention_counts_expansion() {
        let input = nrr(10000.0, 1000.0, 200.0, 300.0);
        assert_abs_diff_eq!(net_revenue_retention(&input), 105.0, epsilon = 1e-9);

        let churn_only = nrr(10000.0, 0.0, 0.0, 300.0);
        assert_abs_diff_eq!(net_revenue_retention(&churn_only), 97.0, epsilon = 1e-9);

        let no_base = nrr(0.0, 0.0, 0.0, 300.0);
        assert_eq!(net_revenue_retention(&no_base), 0.0);
    }

    #[test]
    fn new_mrr_does_not_affect_retention() {
        let base = nrr(10000.0, 0.0, 0.0, 300.0);
        let with_new = NrrInput {
            new_mrr: 5000.0,
            ..base
        };
        for formula in [net_revenue_retention, gross_revenue_retention] {
            assert_eq!(formula(&base), formula(&with_new));
        }
    }

    #[test]
    fn gross_revenue_retention_ignores_expansion() {
        let input = nrr(10000.0, 0.0, 200.0, 300.0);
        assert_abs_diff_eq!(gross_revenue_retention(&input), 95.0, epsilon = 1e-9);

        let expanded = nrr(10000.0, 4000.0, 200.0, 300.0);
        assert_abs_diff_eq!(gross_revenue_retention(&expanded), 95.0, epsilon = 1e-9);

        let no_base = nrr(0.0, 0.0, 200.0, 300.0);
        assert_eq!(gross_revenue_retention(&no_base), 0.0);
    }

    #[test]
    fn cohort_retention_relative_to_first_month() {
        let cohorts = vec![point(0, 100), point(1, 90), point(2, 85)];
        assert_eq!(cohort_retention(&cohorts), vec![100.0, 90.0, 85.0]);
    }

    #[test]
    fn cohort_retention_sorts_by_month() {
        let shuffled = vec![point(2, 85), point(0, 100), point(1, 90)];
        assert_eq!(cohort_retention(&shuffled), vec![100.0, 90.0, 85.0]);
    }

    #[test]
    fn cohort_retention_keeps_input_order_for_equal_months() {
        let cohorts = vec![point(1, 40), point(0, 200), point(1, 50)];
        assert_eq!(cohort_retention(&cohorts), vec![100.0, 20.0, 25.0]);
    }

    #[test]
    fn cohort_retention_edge_cases() {
        assert!(cohort_retention(&[]).is_empty());

        let all_zero = [point(0, 0), point(1, 0)];
        assert_eq!(cohort_retention(&all_zero), vec![0.0, 0.0]);

        let zero_base = [point(0, 0), point(1, 7), point(2, 3)];
        assert_eq!(cohort_retention(&zero_base), vec![0.0; 3]);
    }

    #[test]
    fn historical_ltv_is_the_mean() {
        let revenues = [1000.0, 1200.0, 1500.0, 800.0, 2000.0];
        assert_eq!(historical_ltv(&revenues), 1300.0);
        assert_eq!(historical_ltv(&[]), 0.0);
        assert_eq!(historical_ltv(&[1000.0]), 1000.0);
    }
}
