//! Plain-text rendering of calculator results and chart tables

use crate::format::{format_chart_currency, format_currency, format_percentage};
use crate::growth::{calculate_y_axis_range, CalculationResult, ChartData};
use crate::inputs::{CalculatorInputs, CompoundingFrequency};
use std::fmt::Write;

/// One-paragraph plain-English description of the outcome
pub fn summary(inputs: &CalculatorInputs, result: &CalculationResult) -> String {
    let money = |v: f64| format_currency(v, inputs.currency);

    let mut text = format!(
        "By investing {} with an annual interest rate of {} compounded {}, ",
        money(inputs.principal),
        format_percentage(inputs.rate),
        inputs.compounding_frequency.adverb(),
    );
    if inputs.regular_contribution > 0.0 {
        let cadence = match inputs.compounding_frequency {
            CompoundingFrequency::Monthly => "per month",
            _ => "per period",
        };
        let _ = write!(text, "and adding {} {}, ", money(inputs.regular_contribution), cadence);
    }
    let _ = write!(
        text,
        "you'll have {} after {} years.",
        money(result.future_value()),
        years(inputs.time)
    );

    if inputs.inflation_rate > 0.0 {
        let _ = write!(
            text,
            " When adjusted for inflation ({} annually), your investment will be worth {} in today's money.",
            format_percentage(inputs.inflation_rate),
            money(result.inflation_adjusted)
        );
    }

    text
}

/// Results, input details and summary as a printable block
pub fn render_results(inputs: &CalculatorInputs, result: &CalculationResult) -> String {
    let money = |v: f64| format_currency(v, inputs.currency);
    let mut out = String::new();

    let _ = writeln!(out, "Results");
    let _ = writeln!(out, "{}", "-".repeat(50));
    let _ = writeln!(out, "  {:<28}{:>20}", "Future Value", money(result.future_value()));
    let _ = writeln!(out, "  {:<28}{:>20}", "Total Interest Earned", money(result.interest_earned()));
    let _ = writeln!(out, "  {:<28}{:>20}", "Total Contributions", money(result.total_contributions()));
    let _ = writeln!(out, "  {:<28}{:>20}", "Inflation-Adjusted Value", money(result.inflation_adjusted));
    let _ = writeln!(out);

    let _ = writeln!(out, "Details");
    let _ = writeln!(out, "{}", "-".repeat(50));
    let _ = writeln!(out, "  Initial Investment: {}", money(inputs.principal));
    let _ = writeln!(out, "  Interest Rate: {}", format_percentage(inputs.rate));
    let _ = writeln!(out, "  Time Period: {} years", years(inputs.time));
    let _ = writeln!(out, "  Compounding: {}", inputs.compounding_frequency.label());
    if inputs.regular_contribution > 0.0 {
        let timing = if inputs.is_contribution_at_start {
            "beginning of period"
        } else {
            "end of period"
        };
        let _ = writeln!(out, "  Regular Contribution: {} ({})", money(inputs.regular_contribution), timing);
    }
    if inputs.inflation_rate > 0.0 {
        let _ = writeln!(out, "  Inflation Rate: {}", format_percentage(inputs.inflation_rate));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Summary");
    let _ = writeln!(out, "{}", "-".repeat(50));
    let _ = writeln!(out, "{}", summary(inputs, result));

    out
}

/// Year-by-year table of the chart series plus the computed axis ticks
pub fn render_chart_table(chart: &ChartData, inputs: &CalculatorInputs) -> String {
    let money = |v: f64| format_currency(v, inputs.currency);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>4} {:>22} {:>18} {:>18} {:>18}",
        "Year", "Principal + Contrib.", "Interest", "Total", "Real Value"
    );
    let _ = writeln!(out, "{}", "-".repeat(84));
    for row in chart.rows() {
        let _ = writeln!(
            out,
            "{:>4} {:>22} {:>18} {:>18} {:>18}",
            row.year,
            money(row.principal_and_contributions),
            money(row.interest_earned),
            money(row.total_value),
            money(row.inflation_adjusted),
        );
    }

    let axis = calculate_y_axis_range(Some(chart));
    let ticks: Vec<String> = axis_ticks(axis.min, axis.max, axis.step_size)
        .into_iter()
        .map(|v| format_chart_currency(v, inputs.currency))
        .collect();
    let _ = writeln!(out);
    let _ = writeln!(out, "Axis ({}): {}", inputs.currency, ticks.join(" | "));

    out
}

fn axis_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 {
        return vec![min, max];
    }
    let count = ((max - min) / step).round() as usize;
    (0..=count).map(|i| min + step * i as f64).collect()
}

/// Whole years print without a decimal point
fn years(time: f64) -> String {
    if time.fract() == 0.0 {
        format!("{}", time as i64)
    } else {
        format!("{}", time)
    }
}
