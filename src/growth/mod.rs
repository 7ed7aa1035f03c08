//! Compound growth engine: formulas, chart series and axis scaling

mod axis;
mod chart;
mod interest;

pub use axis::{calculate_y_axis_range, AxisRange};
pub use chart::{
    chart_years, generate_chart_data, ChartData, ChartRow, Dataset, INFLATION_ADJUSTED_LABEL,
    INTEREST_LABEL, PRINCIPAL_LABEL, TOTAL_LABEL,
};
pub use interest::{calculate_compound_interest, calculate_inflation_adjusted_value, GrowthResult};

use crate::inputs::CalculatorInputs;
use log::debug;
use serde::{Deserialize, Serialize};

/// Full calculator output for one set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(flatten)]
    pub growth: GrowthResult,
    /// Future value expressed in today's money
    pub inflation_adjusted: f64,
}

impl CalculationResult {
    pub fn future_value(&self) -> f64 {
        self.growth.future_value
    }

    pub fn total_contributions(&self) -> f64 {
        self.growth.total_contributions
    }

    pub fn interest_earned(&self) -> f64 {
        self.growth.interest_earned
    }
}

/// Run the compound interest and inflation formulas for a parameter bundle
pub fn calculate(inputs: &CalculatorInputs) -> CalculationResult {
    let growth = calculate_compound_interest(
        inputs.principal,
        inputs.rate,
        inputs.time,
        inputs.compounding_frequency.periods_per_year(),
        inputs.regular_contribution,
        inputs.is_contribution_at_start,
    );
    let inflation_adjusted =
        calculate_inflation_adjusted_value(growth.future_value, inputs.inflation_rate, inputs.time);

    debug!(
        "calculated FV {:.2} (contributions {:.2}, interest {:.2}, real {:.2})",
        growth.future_value, growth.total_contributions, growth.interest_earned, inflation_adjusted
    );

    CalculationResult {
        growth,
        inflation_adjusted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::CompoundingFrequency;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_calculate_combines_growth_and_inflation() {
        let inputs = CalculatorInputs {
            principal: 1000.0,
            rate: 5.0,
            time: 10.0,
            compounding_frequency: CompoundingFrequency::Monthly,
            regular_contribution: 100.0,
            is_contribution_at_start: false,
            inflation_rate: 2.0,
            ..Default::default()
        };

        let result = calculate(&inputs);
        assert_abs_diff_eq!(result.future_value(), 17175.24, epsilon = 0.005);
        assert_eq!(result.total_contributions(), 13000.0);
        assert_abs_diff_eq!(
            result.inflation_adjusted,
            result.future_value() / 1.02f64.powf(10.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_result_json_is_flat() {
        let result = calculate(&CalculatorInputs::default());
        let json = serde_json::to_value(result).unwrap();
        assert!(json.get("futureValue").is_some());
        assert!(json.get("interestEarned").is_some());
        assert!(json.get("inflationAdjusted").is_some());
        assert!(json.get("growth").is_none());
    }
}
