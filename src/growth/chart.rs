//! Year-by-year growth series for line charts

use super::interest::{calculate_compound_interest, calculate_inflation_adjusted_value};
use serde::{Deserialize, Serialize};

pub const PRINCIPAL_LABEL: &str = "Principal + Contributions";
pub const INTEREST_LABEL: &str = "Interest Earned";
pub const TOTAL_LABEL: &str = "Total Value";
pub const INFLATION_ADJUSTED_LABEL: &str = "Inflation-Adjusted Value";

/// One plotted series with its display styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
}

impl Dataset {
    fn new(label: &str, data: Vec<f64>, rgb: (u8, u8, u8)) -> Self {
        let (r, g, b) = rgb;
        Self {
            label: label.to_string(),
            data,
            background_color: format!("rgba({}, {}, {}, 0.5)", r, g, b),
            border_color: format!("rgb({}, {}, {})", r, g, b),
            border_width: 2,
            border_dash: None,
        }
    }

    fn dashed(mut self) -> Self {
        self.border_dash = Some(vec![5, 5]);
        self
    }
}

/// Chart payload: year labels and the four growth series
///
/// Dataset order is fixed: principal + contributions, interest earned,
/// total value, inflation-adjusted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<u32>,
    pub datasets: Vec<Dataset>,
}

/// A single year of the chart, flattened for tables and CSV export
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartRow {
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "PrincipalAndContributions")]
    pub principal_and_contributions: f64,
    #[serde(rename = "InterestEarned")]
    pub interest_earned: f64,
    #[serde(rename = "TotalValue")]
    pub total_value: f64,
    #[serde(rename = "InflationAdjusted")]
    pub inflation_adjusted: f64,
}

impl ChartData {
    /// Series with the given label, if present
    pub fn series(&self, label: &str) -> Option<&[f64]> {
        self.datasets
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.data.as_slice())
    }

    /// Largest value across every dataset
    pub fn max_value(&self) -> Option<f64> {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }

    /// Zip the four series back into per-year rows
    pub fn rows(&self) -> Vec<ChartRow> {
        let value = |label: &str, idx: usize| {
            self.series(label)
                .and_then(|s| s.get(idx).copied())
                .unwrap_or(0.0)
        };

        self.labels
            .iter()
            .enumerate()
            .map(|(idx, &year)| ChartRow {
                year,
                principal_and_contributions: value(PRINCIPAL_LABEL, idx),
                interest_earned: value(INTEREST_LABEL, idx),
                total_value: value(TOTAL_LABEL, idx),
                inflation_adjusted: value(INFLATION_ADJUSTED_LABEL, idx),
            })
            .collect()
    }
}

/// Whole number of years to plot; non-finite or sub-one-year input plots one year
pub fn chart_years(time: f64) -> u32 {
    if !time.is_finite() || time < 1.0 {
        return 1;
    }
    time.trunc().min(u32::MAX as f64 - 1.0) as u32
}

/// Generate data for the compound interest growth chart
///
/// Produces `years + 1` points, where year 0 is the principal on every
/// series. `rate` and `inflation_rate` are annual percentages. The
/// inflation-adjusted series equals the total value when inflation is not
/// positive.
pub fn generate_chart_data(
    principal: f64,
    rate: f64,
    time: f64,
    periods_per_year: u32,
    regular_contribution: f64,
    contribution_at_start: bool,
    inflation_rate: f64,
) -> ChartData {
    let years = chart_years(time);
    let capacity = years as usize + 1;

    let mut principal_data = Vec::with_capacity(capacity);
    let mut interest_data = Vec::with_capacity(capacity);
    let mut total_data = Vec::with_capacity(capacity);
    let mut inflation_data = Vec::with_capacity(capacity);

    principal_data.push(principal);
    interest_data.push(0.0);
    total_data.push(principal);
    inflation_data.push(principal);

    for year in 1..=years {
        let t = year as f64;
        let result = calculate_compound_interest(
            principal,
            rate,
            t,
            periods_per_year,
            regular_contribution,
            contribution_at_start,
        );

        // Running principal: original amount plus every contribution to date
        let contributions_to_date = regular_contribution * periods_per_year.max(1) as f64 * t;
        principal_data.push(principal + contributions_to_date);
        interest_data.push(result.interest_earned);
        total_data.push(result.future_value);

        if inflation_rate > 0.0 {
            inflation_data.push(calculate_inflation_adjusted_value(result.future_value, inflation_rate, t));
        } else {
            inflation_data.push(result.future_value);
        }
    }

    ChartData {
        labels: (0..=years).collect(),
        datasets: vec![
            Dataset::new(PRINCIPAL_LABEL, principal_data, (53, 162, 235)),
            Dataset::new(INTEREST_LABEL, interest_data, (75, 192, 192)),
            Dataset::new(TOTAL_LABEL, total_data, (255, 99, 132)),
            Dataset::new(INFLATION_ADJUSTED_LABEL, inflation_data, (255, 159, 64)).dashed(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_principal_plus_contributions_series() {
        let principal = 1000.0;
        let contribution = 100.0;
        let chart = generate_chart_data(principal, 5.0, 2.0, 12, contribution, false, 0.0);

        assert_eq!(chart.labels.len(), 3);
        let series = &chart.datasets[0].data;
        assert_eq!(series.len(), 3);
        assert_eq!(series[0], principal);
        assert_eq!(series[1], principal + contribution * 12.0);
        assert_eq!(series[2], principal + contribution * 24.0);
    }

    #[test]
    fn test_respects_time_period() {
        for years in [5u32, 8, 15] {
            let chart = generate_chart_data(1000.0, 5.0, years as f64, 12, 100.0, false, 0.0);
            assert_eq!(chart.labels.len(), years as usize + 1);
            assert_eq!(*chart.labels.last().unwrap(), years);
        }
    }

    #[test]
    fn test_invalid_time_defaults_to_one_year() {
        for time in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let chart = generate_chart_data(1000.0, 5.0, time, 12, 100.0, false, 0.0);
            assert_eq!(chart.labels, vec![0, 1]);
        }
    }

    #[test]
    fn test_fractional_time_truncates() {
        let chart = generate_chart_data(1000.0, 5.0, 3.7, 1, 0.0, false, 0.0);
        assert_eq!(chart.labels, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_year_zero_is_principal_everywhere() {
        let chart = generate_chart_data(2500.0, 7.0, 4.0, 4, 50.0, true, 3.0);
        assert_eq!(chart.datasets[0].data[0], 2500.0);
        assert_eq!(chart.datasets[1].data[0], 0.0);
        assert_eq!(chart.datasets[2].data[0], 2500.0);
        assert_eq!(chart.datasets[3].data[0], 2500.0);
    }

    #[test]
    fn test_totals_match_point_calculation() {
        let chart = generate_chart_data(1000.0, 5.0, 10.0, 12, 100.0, false, 2.0);
        let direct = calculate_compound_interest(1000.0, 5.0, 10.0, 12, 100.0, false);

        let total = chart.series(TOTAL_LABEL).unwrap();
        assert_abs_diff_eq!(total[10], direct.future_value, epsilon = 1e-9);

        let adjusted = chart.series(INFLATION_ADJUSTED_LABEL).unwrap();
        assert!(adjusted[10] < total[10]);
        assert_abs_diff_eq!(
            adjusted[10],
            calculate_inflation_adjusted_value(direct.future_value, 2.0, 10.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_no_inflation_tracks_total() {
        let chart = generate_chart_data(1000.0, 5.0, 3.0, 1, 0.0, false, 0.0);
        assert_eq!(chart.datasets[2].data, chart.datasets[3].data);
    }

    #[test]
    fn test_styling_and_json_shape() {
        let chart = generate_chart_data(1000.0, 5.0, 1.0, 1, 0.0, false, 0.0);
        assert_eq!(chart.datasets[0].border_color, "rgb(53, 162, 235)");
        assert_eq!(chart.datasets[3].border_dash, Some(vec![5, 5]));

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["datasets"][1]["label"], "Interest Earned");
        assert_eq!(json["datasets"][1]["backgroundColor"], "rgba(75, 192, 192, 0.5)");
        assert!(json["datasets"][0].get("borderDash").is_none());
    }

    #[test]
    fn test_rows_flatten_series() {
        let chart = generate_chart_data(1000.0, 10.0, 2.0, 1, 0.0, false, 0.0);
        let rows = chart.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].year, 2);
        assert_abs_diff_eq!(rows[2].total_value, 1210.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[2].interest_earned, 210.0, epsilon = 1e-9);
    }
}
