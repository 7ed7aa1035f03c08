//! Compound Interest - calculation engine and learning material
//!
//! This library provides:
//! - Future value with periodic contributions (ordinary annuity or annuity-due)
//! - Inflation-adjusted values
//! - Year-by-year chart series and "nice" y-axis scaling
//! - Locale-aware currency and percentage formatting
//! - Saved scenario comparison and batch runs
//! - Static educational content

pub mod error;
pub mod format;
pub mod inputs;
pub mod growth;
pub mod scenario;
pub mod education;
pub mod report;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use format::{format_chart_currency, format_currency, format_percentage, Currency};
pub use inputs::{CalculatorInputs, CompoundingFrequency};
pub use growth::{
    calculate_compound_interest, calculate_inflation_adjusted_value, calculate_y_axis_range,
    generate_chart_data, AxisRange, CalculationResult, ChartData, GrowthResult,
};
pub use scenario::{ScenarioBook, ScenarioRunner};
pub use education::educational_content;
