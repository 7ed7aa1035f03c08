//! Lenient conversion of raw form values into `CalculatorInputs`
//!
//! Form fields arrive as numbers, numeric strings or booleans. Anything
//! missing or unparseable falls back to the default; out-of-range numbers
//! are clamped. Neither case is an error.

use super::{CalculatorInputs, CompoundingFrequency};
use crate::error::{CalculatorError, Result};
use crate::format::Currency;
use log::warn;
use serde_json::{Map, Value};
use std::path::Path;

const MAX_RATE: f64 = 100.0;
const MIN_YEARS: f64 = 1.0;
const MAX_YEARS: f64 = 100.0;

impl CalculatorInputs {
    /// Build inputs from a JSON object of form fields (camelCase names)
    ///
    /// Fails only when the payload is not an object at all.
    pub fn from_form(form: &Value) -> Result<Self> {
        let fields = form.as_object().ok_or_else(|| {
            CalculatorError::InvalidForm(format!("expected an object of fields, got {}", value_kind(form)))
        })?;
        let defaults = Self::default();

        let compounding_frequency = match number_field(fields, "compoundingFrequency") {
            None => defaults.compounding_frequency,
            Some(periods) => frequency_from_periods(periods).unwrap_or_else(|| {
                warn!(
                    "compoundingFrequency: {} is not a supported option, using {}",
                    periods,
                    defaults.compounding_frequency.label()
                );
                defaults.compounding_frequency
            }),
        };

        let currency = match fields.get("currency").and_then(Value::as_str) {
            None => defaults.currency,
            Some(code) => Currency::from_code(code).unwrap_or_else(|| {
                warn!("currency: {:?} is not supported, using {}", code, defaults.currency);
                defaults.currency
            }),
        };

        Ok(Self {
            principal: clamped(fields, "principal", defaults.principal, 0.0, f64::MAX),
            rate: clamped(fields, "rate", defaults.rate, 0.0, MAX_RATE),
            time: clamped(fields, "time", defaults.time, MIN_YEARS, MAX_YEARS),
            compounding_frequency,
            regular_contribution: clamped(fields, "regularContribution", defaults.regular_contribution, 0.0, f64::MAX),
            is_contribution_at_start: bool_field(fields, "isContributionAtStart")
                .unwrap_or(defaults.is_contribution_at_start),
            inflation_rate: clamped(fields, "inflationRate", defaults.inflation_rate, 0.0, MAX_RATE),
            currency,
        })
    }

    /// Parse a form from JSON text
    pub fn from_form_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_form(&value)
    }

    /// Read a form from a JSON file
    pub fn from_form_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_form_str(&text)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Numeric value of a field, if it has one
fn number_field(fields: &Map<String, Value>, name: &str) -> Option<f64> {
    let parsed = match fields.get(name)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn clamped(fields: &Map<String, Value>, name: &str, default: f64, min: f64, max: f64) -> f64 {
    let Some(raw) = fields.get(name) else {
        return default;
    };
    let Some(value) = number_field(fields, name) else {
        warn!("{}: {} is not a number, using {}", name, raw, default);
        return default;
    };

    let bounded = value.clamp(min, max);
    if bounded != value {
        warn!("{}: {} is out of range, clamped to {}", name, value, bounded);
    }
    bounded
}

fn bool_field(fields: &Map<String, Value>, name: &str) -> Option<bool> {
    match fields.get(name)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Some(true),
            "false" | "off" | "no" | "0" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn frequency_from_periods(periods: f64) -> Option<CompoundingFrequency> {
    if periods.fract() != 0.0 || periods < 1.0 || periods > u32::MAX as f64 {
        return None;
    }
    CompoundingFrequency::from_periods(periods as u32)
}
