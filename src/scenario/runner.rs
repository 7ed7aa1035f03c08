//! Batch evaluation of many input sets
//!
//! Each calculation is independent, so batches fan out over the rayon pool.

use crate::growth::{CalculationResult, ChartData};
use crate::inputs::CalculatorInputs;
use rayon::prelude::*;

/// Evaluates input sets against shared base inputs
///
/// # Example
/// ```
/// use compound_interest::ScenarioRunner;
///
/// let runner = ScenarioRunner::new();
/// let rates = runner.sweep_rates(&[3.0, 5.0, 7.0]);
/// assert_eq!(rates.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_inputs: CalculatorInputs,
}

impl ScenarioRunner {
    /// Runner using the calculator's default inputs as the base
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(base_inputs: CalculatorInputs) -> Self {
        Self { base_inputs }
    }

    pub fn run(&self, inputs: &CalculatorInputs) -> CalculationResult {
        inputs.calculate()
    }

    /// Run many input sets in parallel, preserving order
    pub fn run_batch(&self, batch: &[CalculatorInputs]) -> Vec<CalculationResult> {
        batch.par_iter().map(CalculatorInputs::calculate).collect()
    }

    /// Chart series for many input sets in parallel
    pub fn chart_batch(&self, batch: &[CalculatorInputs]) -> Vec<ChartData> {
        batch.par_iter().map(CalculatorInputs::chart_data).collect()
    }

    /// Vary only the interest rate of the base inputs
    pub fn sweep_rates(&self, rates: &[f64]) -> Vec<(f64, CalculationResult)> {
        rates
            .par_iter()
            .map(|&rate| {
                let inputs = CalculatorInputs { rate, ..self.base_inputs.clone() };
                (rate, inputs.calculate())
            })
            .collect()
    }

    /// Vary only the time horizon of the base inputs
    pub fn sweep_years(&self, years: &[f64]) -> Vec<(f64, CalculationResult)> {
        years
            .par_iter()
            .map(|&time| {
                let inputs = CalculatorInputs { time, ..self.base_inputs.clone() };
                (time, inputs.calculate())
            })
            .collect()
    }

    pub fn base_inputs(&self) -> &CalculatorInputs {
        &self.base_inputs
    }

    pub fn base_inputs_mut(&mut self) -> &mut CalculatorInputs {
        &mut self.base_inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let batch: Vec<_> = [2.0, 4.0, 6.0, 8.0]
            .iter()
            .map(|&rate| CalculatorInputs { rate, ..Default::default() })
            .collect();

        let results = runner.run_batch(&batch);
        assert_eq!(results.len(), 4);
        for (inputs, result) in batch.iter().zip(&results) {
            assert_eq!(*result, inputs.calculate());
        }
    }

    #[test]
    fn test_higher_rate_grows_more() {
        let runner = ScenarioRunner::new();
        let sweep = runner.sweep_rates(&[3.0, 4.0, 5.0]);
        assert!(sweep[2].1.future_value() > sweep[0].1.future_value());
    }

    #[test]
    fn test_longer_horizon_grows_more() {
        let runner = ScenarioRunner::with_inputs(CalculatorInputs {
            regular_contribution: 0.0,
            ..Default::default()
        });
        let sweep = runner.sweep_years(&[5.0, 10.0, 20.0]);
        assert!(sweep[0].1.future_value() < sweep[1].1.future_value());
        assert!(sweep[1].1.future_value() < sweep[2].1.future_value());
    }

    #[test]
    fn test_chart_batch_lengths() {
        let runner = ScenarioRunner::new();
        let batch = vec![
            CalculatorInputs { time: 3.0, ..Default::default() },
            CalculatorInputs { time: 7.0, ..Default::default() },
        ];
        let charts = runner.chart_batch(&batch);
        assert_eq!(charts[0].labels.len(), 4);
        assert_eq!(charts[1].labels.len(), 8);
    }
}
