//! Error types for the calculator library

use thiserror::Error;

/// Errors raised while reading inputs or writing outputs.
///
/// The numeric core never fails: bad values are coerced. These cover the
/// I/O edges around it.
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse or encode failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Form payload was not an object of fields
    #[error("Invalid form data: {0}")]
    InvalidForm(String),

    /// Currency code outside the supported set
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
