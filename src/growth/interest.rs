//! Closed-form compound growth formulas

use serde::{Deserialize, Serialize};

/// Outcome of compounding a principal plus optional contributions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthResult {
    pub future_value: f64,
    /// Principal plus every periodic contribution
    pub total_contributions: f64,
    /// Future value less total contributions
    pub interest_earned: f64,
}

/// Calculate future value using the compound interest formula
///
/// # Arguments
/// * `principal` - Initial investment
/// * `rate` - Annual interest rate in percent (5.0 for 5%)
/// * `time` - Years
/// * `periods_per_year` - Compounding periods per year (12 for monthly)
/// * `regular_contribution` - Amount added every compounding period
/// * `contribution_at_start` - Annuity-due when true, ordinary annuity otherwise
///
/// A `periods_per_year` of zero is treated as annual compounding.
pub fn calculate_compound_interest(
    principal: f64,
    rate: f64,
    time: f64,
    periods_per_year: u32,
    regular_contribution: f64,
    contribution_at_start: bool,
) -> GrowthResult {
    let n = periods_per_year.max(1) as f64;
    let periodic_rate = rate / 100.0 / n;
    let total_periods = n * time;
    let growth = (1.0 + periodic_rate).powf(total_periods);

    let mut future_value = principal * growth;

    if regular_contribution > 0.0 {
        // Zero rate: the annuity factor's limit is the period count
        let annuity_factor = if periodic_rate.abs() < 1e-12 {
            total_periods
        } else {
            (growth - 1.0) / periodic_rate
        };

        let mut annuity = regular_contribution * annuity_factor;
        if contribution_at_start {
            annuity *= 1.0 + periodic_rate;
        }
        future_value += annuity;
    }

    let total_contributions = principal + regular_contribution * total_periods;

    GrowthResult {
        future_value,
        total_contributions,
        interest_earned: future_value - total_contributions,
    }
}

/// Deflate a future amount into today's money
///
/// `inflation_rate` is an annual percentage.
pub fn calculate_inflation_adjusted_value(future_value: f64, inflation_rate: f64, time: f64) -> f64 {
    future_value / (1.0 + inflation_rate / 100.0).powf(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_no_contributions_annual() {
        let result = calculate_compound_interest(1000.0, 5.0, 10.0, 1, 0.0, false);
        assert_abs_diff_eq!(result.future_value, 1628.89, epsilon = 0.005);
        assert_abs_diff_eq!(result.interest_earned, 628.89, epsilon = 0.005);
        assert_eq!(result.total_contributions, 1000.0);
    }

    #[test]
    fn test_reduces_to_standard_formula() {
        for &(p, r, t, n) in &[(500.0, 3.0, 7.0, 4u32), (25_000.0, 8.5, 30.0, 12), (1.0, 12.0, 1.0, 365)] {
            let result = calculate_compound_interest(p, r, t, n, 0.0, false);
            let nf = n as f64;
            let expected = p * (1.0 + r / 100.0 / nf).powf(nf * t);
            assert_abs_diff_eq!(result.future_value, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_contributions_at_end_monthly() {
        let result = calculate_compound_interest(1000.0, 5.0, 10.0, 12, 100.0, false);
        assert_abs_diff_eq!(result.future_value, 17175.24, epsilon = 0.005);
        assert_eq!(result.total_contributions, 13000.0);
        assert_abs_diff_eq!(result.interest_earned, 4175.24, epsilon = 0.005);
    }

    #[test]
    fn test_annuity_due_earns_one_extra_period() {
        let ordinary = calculate_compound_interest(0.0, 6.0, 5.0, 12, 200.0, false);
        let due = calculate_compound_interest(0.0, 6.0, 5.0, 12, 200.0, true);
        assert_abs_diff_eq!(due.future_value, ordinary.future_value * 1.005, epsilon = 1e-9);
        assert_eq!(due.total_contributions, ordinary.total_contributions);
    }

    #[test]
    fn test_zero_rate_with_contributions_is_finite() {
        let result = calculate_compound_interest(1000.0, 0.0, 2.0, 12, 50.0, true);
        assert_abs_diff_eq!(result.future_value, 1000.0 + 50.0 * 24.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.interest_earned, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_periods_treated_as_annual() {
        let zero = calculate_compound_interest(1000.0, 5.0, 3.0, 0, 0.0, false);
        let annual = calculate_compound_interest(1000.0, 5.0, 3.0, 1, 0.0, false);
        assert_eq!(zero, annual);
    }

    #[test]
    fn test_negative_contribution_ignored_in_growth() {
        let result = calculate_compound_interest(1000.0, 5.0, 1.0, 1, -100.0, false);
        assert_abs_diff_eq!(result.future_value, 1050.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_contributions, 900.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inflation_adjustment() {
        let adjusted = calculate_inflation_adjusted_value(1102.5, 5.0, 2.0);
        assert_abs_diff_eq!(adjusted, 1000.0, epsilon = 1e-9);

        // No inflation leaves the value alone
        assert_eq!(calculate_inflation_adjusted_value(1234.0, 0.0, 10.0), 1234.0);
    }
}
