//! Compound Interest CLI
//!
//! Command-line front end for the calculator, chart series, scenario
//! comparison and educational content

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use compound_interest::{
    calculate_y_axis_range, educational_content, format_currency, report, CalculatorInputs, ScenarioBook,
};
use log::info;
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "compound-interest",
    version,
    about = "Compound interest calculator with inflation adjustment and growth charts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Future value, interest earned and inflation-adjusted value
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Year-by-year growth series
    Chart {
        #[command(flatten)]
        inputs: InputArgs,
        /// Write the series to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print chart data and axis range as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare scenarios listed in a CSV file
    Compare {
        /// CSV with Name,Principal,Rate,Time,Frequency,Contribution,AtStart,Inflation,Currency
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Explain compound interest
    Learn {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Read raw form values from a JSON file instead of the flags below
    #[arg(long)]
    form: Option<PathBuf>,
    /// Initial investment
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,
    /// Annual interest rate in percent
    #[arg(long, default_value_t = 7.0)]
    rate: f64,
    /// Time period in years
    #[arg(long, default_value_t = 10.0)]
    years: f64,
    /// Compounding periods per year: 1, 2, 4, 12 or 365
    #[arg(long, default_value_t = 12)]
    frequency: u32,
    /// Amount added each compounding period
    #[arg(long, default_value_t = 100.0)]
    contribution: f64,
    /// Contribute at the start of each period instead of the end
    #[arg(long)]
    at_start: bool,
    /// Annual inflation rate in percent
    #[arg(long, default_value_t = 2.5)]
    inflation: f64,
    /// USD, GBP or EUR
    #[arg(long, default_value = "GBP")]
    currency: String,
}

impl InputArgs {
    /// Flags and form files both go through the same coercion
    fn resolve(&self) -> Result<CalculatorInputs> {
        if let Some(path) = &self.form {
            return CalculatorInputs::from_form_file(path)
                .with_context(|| format!("Failed to read form from {}", path.display()));
        }

        let form = json!({
            "principal": self.principal,
            "rate": self.rate,
            "time": self.years,
            "compoundingFrequency": self.frequency,
            "regularContribution": self.contribution,
            "isContributionAtStart": self.at_start,
            "inflationRate": self.inflation,
            "currency": self.currency,
        });
        Ok(CalculatorInputs::from_form(&form)?)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calculate { inputs, json } => calculate(&inputs.resolve()?, json),
        Command::Chart { inputs, csv, json } => chart(&inputs.resolve()?, csv, json),
        Command::Compare { file, json } => compare(file, json),
        Command::Learn { json } => learn(json),
    }
}

fn calculate(inputs: &CalculatorInputs, as_json: bool) -> Result<()> {
    let result = inputs.calculate();
    info!("calculation completed for {:?}", inputs);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&json!({ "inputs": inputs, "results": result }))?);
    } else {
        print!("{}", report::render_results(inputs, &result));
    }
    Ok(())
}

fn chart(inputs: &CalculatorInputs, csv_path: Option<PathBuf>, as_json: bool) -> Result<()> {
    let data = inputs.chart_data();

    if let Some(path) = csv_path {
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        for row in data.rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        println!("Chart series written to: {}", path.display());
    }

    if as_json {
        let axis = calculate_y_axis_range(Some(&data));
        println!("{}", serde_json::to_string_pretty(&json!({ "chart": data, "axis": axis }))?);
    } else {
        print!("{}", report::render_chart_table(&data, inputs));
    }
    Ok(())
}

fn compare(file: PathBuf, as_json: bool) -> Result<()> {
    let book = ScenarioBook::from_csv(&file)
        .with_context(|| format!("Failed to load scenarios from {}", file.display()))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(book.scenarios())?);
        return Ok(());
    }

    println!("Investment Scenario Comparison ({} scenarios)", book.len());
    println!();
    print!("{}", book.render_comparison());

    if let Some(best) = book.best() {
        println!();
        println!(
            "Highest future value: {} at {}",
            best.name,
            format_currency(best.results.future_value(), best.inputs.currency)
        );
    }
    Ok(())
}

fn learn(as_json: bool) -> Result<()> {
    let content = educational_content();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    println!("{}", content.intro.title);
    println!("{}", "=".repeat(content.intro.title.len()));
    println!();
    println!("{}", content.intro.description);
    println!();
    println!("    {}", content.intro.formula);
    println!();
    println!("{}", content.intro.formula_explanation);

    println!();
    println!("Real-World Applications");
    println!("{}", "-".repeat(23));
    for card in content.applications {
        println!();
        println!("{}", card.title);
        println!("  {}", card.description);
        println!("  {}", card.example);
    }

    println!();
    println!("Key Principles");
    println!("{}", "-".repeat(14));
    for principle in content.principles {
        println!();
        println!("{}", principle.title);
        println!("  {}", principle.description);
    }

    println!();
    println!("Disclaimer");
    println!("{}", "-".repeat(10));
    println!("{}", content.disclaimer.summary);
    for (i, point) in content.disclaimer.points.iter().enumerate() {
        println!("  {}. {}", i + 1, point);
    }
    println!("{}", content.disclaimer.closing);
    Ok(())
}
