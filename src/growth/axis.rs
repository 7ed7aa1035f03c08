//! Y-axis scaling for growth charts

use super::chart::ChartData;
use serde::{Deserialize, Serialize};

/// Vertical axis bounds and tick spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step_size: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step_size: 2_000.0,
        }
    }
}

const HEADROOM: f64 = 1.1;
const NICE_STEPS: [f64; 4] = [1.0, 2.5, 5.0, 10.0];
const TICKS: f64 = 5.0;

/// Choose a rounded axis maximum above every plotted value
///
/// The largest value is padded by 10% and snapped up to 1, 2.5, 5 or 10
/// times its order of magnitude; ticks split the range into five. Missing
/// data, or data with no positive values, gets the default 0..10,000 range.
pub fn calculate_y_axis_range(chart: Option<&ChartData>) -> AxisRange {
    let max_value = match chart.and_then(ChartData::max_value) {
        Some(v) if v > 0.0 => v,
        _ => return AxisRange::default(),
    };

    let max = nice_ceiling(max_value * HEADROOM);

    AxisRange {
        min: 0.0,
        max,
        step_size: max / TICKS,
    }
}

fn nice_ceiling(value: f64) -> f64 {
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let normalized = value / magnitude;

    let nice = NICE_STEPS
        .iter()
        .copied()
        .find(|&step| normalized <= step)
        .unwrap_or(10.0);

    nice * magnitude
}
