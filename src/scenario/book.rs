//! Saved scenarios for side-by-side comparison

use crate::format::{format_currency, format_percentage};
use crate::growth::CalculationResult;
use crate::inputs::CalculatorInputs;
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

/// A calculation the user kept for comparison
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: u64,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub inputs: CalculatorInputs,
    pub results: CalculationResult,
}

/// Display row of the comparison table, formatted in the scenario's currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub id: u64,
    pub name: String,
    pub principal: String,
    pub rate: String,
    pub time: String,
    pub contribution: String,
    pub future_value: String,
    pub interest_earned: String,
}

/// Ordered collection of saved scenarios
#[derive(Debug, Clone, Default)]
pub struct ScenarioBook {
    scenarios: Vec<Scenario>,
    next_id: u64,
}

impl ScenarioBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate and store a scenario named after its position ("Scenario 3")
    pub fn save(&mut self, inputs: CalculatorInputs) -> &Scenario {
        let name = format!("Scenario {}", self.scenarios.len() + 1);
        self.save_named(name, inputs)
    }

    /// Calculate and store a scenario under an explicit name
    pub fn save_named(&mut self, name: impl Into<String>, inputs: CalculatorInputs) -> &Scenario {
        self.next_id += 1;
        let scenario = Scenario {
            id: self.next_id,
            name: name.into(),
            saved_at: Utc::now(),
            results: inputs.calculate(),
            inputs,
        };

        info!("saved scenario {} ({})", scenario.id, scenario.name);
        self.scenarios.push(scenario);
        &self.scenarios[self.scenarios.len() - 1]
    }

    /// Remove a scenario by id, returning it if it existed
    pub fn remove(&mut self, id: u64) -> Option<Scenario> {
        let idx = self.scenarios.iter().position(|s| s.id == id)?;
        let removed = self.scenarios.remove(idx);
        info!("removed scenario {} ({})", removed.id, removed.name);
        Some(removed)
    }

    pub fn get(&self, id: u64) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scenario with the highest future value
    pub fn best(&self) -> Option<&Scenario> {
        self.scenarios
            .iter()
            .max_by(|a, b| a.results.future_value().total_cmp(&b.results.future_value()))
    }

    pub fn comparison_rows(&self) -> Vec<ComparisonRow> {
        self.scenarios
            .iter()
            .map(|s| {
                let money = |v: f64| format_currency(v, s.inputs.currency);
                ComparisonRow {
                    id: s.id,
                    name: s.name.clone(),
                    principal: money(s.inputs.principal),
                    rate: format_percentage(s.inputs.rate),
                    time: format!("{} years", s.inputs.time),
                    contribution: format!(
                        "{}/{}",
                        money(s.inputs.regular_contribution),
                        period_noun(s.inputs.compounding_frequency.periods_per_year())
                    ),
                    future_value: money(s.results.future_value()),
                    interest_earned: money(s.results.interest_earned()),
                }
            })
            .collect()
    }

    /// Comparison table as printable text
    pub fn render_comparison(&self) -> String {
        let mut out = format!(
            "{:<16} {:>16} {:>8} {:>10} {:>18} {:>18} {:>18}\n",
            "Scenario", "Principal", "Rate", "Time", "Contribution", "Future Value", "Interest"
        );
        out.push_str(&"-".repeat(110));
        out.push('\n');
        for row in self.comparison_rows() {
            out.push_str(&format!(
                "{:<16} {:>16} {:>8} {:>10} {:>18} {:>18} {:>18}\n",
                row.name, row.principal, row.rate, row.time, row.contribution, row.future_value, row.interest_earned
            ));
        }
        out
    }
}

fn period_noun(periods_per_year: u32) -> &'static str {
    match periods_per_year {
        1 => "year",
        2 => "half-year",
        4 => "quarter",
        12 => "month",
        365 => "day",
        _ => "period",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Currency;

    #[test]
    fn test_save_names_by_position() {
        let mut book = ScenarioBook::new();
        book.save(CalculatorInputs::default());
        let second = book.save(CalculatorInputs { rate: 5.0, ..Default::default() });
        assert_eq!(second.name, "Scenario 2");
        assert_eq!(second.id, 2);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut book = ScenarioBook::new();
        book.save(CalculatorInputs::default());
        book.save(CalculatorInputs::default());

        let removed = book.remove(1).expect("scenario 1 exists");
        assert_eq!(removed.name, "Scenario 1");
        assert!(book.remove(1).is_none());

        let third = book.save(CalculatorInputs::default());
        assert_eq!(third.id, 3);
        assert_eq!(third.name, "Scenario 2");
    }

    #[test]
    fn test_results_computed_on_save() {
        let mut book = ScenarioBook::new();
        let inputs = CalculatorInputs::default();
        let expected = inputs.calculate();
        let saved = book.save(inputs);
        assert_eq!(saved.results, expected);
    }

    #[test]
    fn test_best_by_future_value() {
        let mut book = ScenarioBook::new();
        assert!(book.best().is_none());
        book.save(CalculatorInputs { rate: 3.0, ..Default::default() });
        book.save(CalculatorInputs { rate: 9.0, ..Default::default() });
        book.save(CalculatorInputs { rate: 6.0, ..Default::default() });
        assert_eq!(book.best().map(|s| s.id), Some(2));
    }

    #[test]
    fn test_comparison_uses_each_currency() {
        let mut book = ScenarioBook::new();
        book.save(CalculatorInputs { principal: 1234.56, currency: Currency::Usd, ..Default::default() });
        book.save(CalculatorInputs { principal: 1234.56, currency: Currency::Eur, ..Default::default() });

        let rows = book.comparison_rows();
        assert_eq!(rows[0].principal, "$1,234.56");
        assert_eq!(rows[1].principal, "1.234,56 €");
        assert_eq!(rows[0].rate, "7.00%");
        assert_eq!(rows[0].time, "10 years");
        assert_eq!(rows[0].contribution, "$100.00/month");
    }

    #[test]
    fn test_render_has_row_per_scenario() {
        let mut book = ScenarioBook::new();
        book.save(CalculatorInputs::default());
        book.save(CalculatorInputs::default());
        assert_eq!(book.render_comparison().lines().count(), 4);
    }
}
