//! Load scenario input sets from CSV
//!
//! Columns: `Name,Principal,Rate,Time,Frequency,Contribution,AtStart,Inflation,Currency`.
//! Numeric cells go through the same lenient coercion as form input.

use crate::error::Result;
use crate::inputs::CalculatorInputs;
use csv::Reader;
use serde_json::{Map, Value};
use std::path::Path;

/// Raw CSV row; every cell is kept as text until coercion
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Principal")]
    principal: String,
    #[serde(rename = "Rate")]
    rate: String,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Frequency", default)]
    frequency: String,
    #[serde(rename = "Contribution", default)]
    contribution: String,
    #[serde(rename = "AtStart", default)]
    at_start: String,
    #[serde(rename = "Inflation", default)]
    inflation: String,
    #[serde(rename = "Currency", default)]
    currency: String,
}

impl CsvRow {
    fn to_inputs(self) -> Result<(String, CalculatorInputs)> {
        let mut form = Map::new();
        let cells = [
            ("principal", self.principal),
            ("rate", self.rate),
            ("time", self.time),
            ("compoundingFrequency", self.frequency),
            ("regularContribution", self.contribution),
            ("isContributionAtStart", self.at_start),
            ("inflationRate", self.inflation),
            ("currency", self.currency),
        ];
        // Blank cells mean "use the default"
        for (field, cell) in cells {
            if !cell.trim().is_empty() {
                form.insert(field.to_string(), Value::String(cell));
            }
        }

        let inputs = CalculatorInputs::from_form(&Value::Object(form))?;
        Ok((self.name, inputs))
    }
}

/// Load named input sets from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<(String, CalculatorInputs)>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load named input sets from any reader (string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<(String, CalculatorInputs)>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<(String, CalculatorInputs)>> {
    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_inputs()?);
    }
    Ok(scenarios)
}
