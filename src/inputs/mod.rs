//! Calculator parameter bundle and form coercion

mod coerce;
mod frequency;

pub use frequency::CompoundingFrequency;

use crate::format::{Currency, DEFAULT_CURRENCY};
use crate::growth::{self, CalculationResult, ChartData};
use serde::{Deserialize, Serialize};

/// Parameters for one calculation
///
/// Rates are annual percentages (`7.0` means 7%). The contribution is paid
/// once per compounding period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    pub principal: f64,
    pub rate: f64,
    pub time: f64,
    pub compounding_frequency: CompoundingFrequency,
    pub regular_contribution: f64,
    pub is_contribution_at_start: bool,
    pub inflation_rate: f64,
    pub currency: Currency,
}

impl CalculatorInputs {
    /// Future value, contributions, interest and inflation-adjusted value
    pub fn calculate(&self) -> CalculationResult {
        growth::calculate(self)
    }

    /// Year-by-year series for plotting
    pub fn chart_data(&self) -> ChartData {
        growth::generate_chart_data(
            self.principal,
            self.rate,
            self.time,
            self.compounding_frequency.periods_per_year(),
            self.regular_contribution,
            self.is_contribution_at_start,
            self.inflation_rate,
        )
    }
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            principal: 10_000.0,
            rate: 7.0,
            time: 10.0,
            compounding_frequency: CompoundingFrequency::Monthly,
            regular_contribution: 100.0,
            is_contribution_at_start: false,
            inflation_rate: 2.5,
            currency: DEFAULT_CURRENCY,
        }
    }
}
