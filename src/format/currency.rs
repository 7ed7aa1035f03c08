//! Supported currencies and their display locales

use crate::error::CalculatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency used when none (or an unknown one) is supplied
pub const DEFAULT_CURRENCY: Currency = Currency::Gbp;

/// Currencies the calculator can display amounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    #[default]
    Gbp,
    Eur,
}

impl Currency {
    /// All supported currencies, in menu order
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Gbp, Currency::Eur];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Eur => "€",
        }
    }

    /// Menu label, e.g. `GBP (£)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.code(), self.symbol())
    }

    /// Locale whose separators and symbol placement are used for this currency
    pub fn locale(&self) -> Locale {
        match self {
            Currency::Usd => Locale::EN_US,
            Currency::Gbp => Locale::EN_GB,
            Currency::Eur => Locale::DE_DE,
        }
    }

    /// Look up a currency by code, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CalculatorError::UnsupportedCurrency(s.to_string()))
    }
}

/// Number and currency layout conventions for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 tag, for reference
    pub tag: &'static str,
    /// Thousands separator
    pub group: char,
    /// Decimal separator
    pub decimal: char,
    /// `$1.00` when true, `1,00 €` when false
    pub symbol_first: bool,
}

impl Locale {
    pub const EN_US: Locale = Locale { tag: "en-US", group: ',', decimal: '.', symbol_first: true };
    pub const EN_GB: Locale = Locale { tag: "en-GB", group: ',', decimal: '.', symbol_first: true };
    pub const DE_DE: Locale = Locale { tag: "de-DE", group: '.', decimal: ',', symbol_first: false };

    /// Attach sign and currency symbol to already-formatted digits
    pub(crate) fn place_symbol(&self, negative: bool, body: &str, symbol: &str) -> String {
        let sign = if negative { "-" } else { "" };
        if self.symbol_first {
            format!("{sign}{symbol}{body}")
        } else {
            format!("{sign}{body} {symbol}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gbp() {
        assert_eq!(Currency::default(), Currency::Gbp);
        assert_eq!(DEFAULT_CURRENCY, Currency::Gbp);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
        assert_eq!(Currency::from_code(" EUR "), Some(Currency::Eur));
        assert_eq!(Currency::from_code("JPY"), None);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Currency::Gbp.label(), "GBP (£)");
        assert_eq!(Currency::Eur.locale().tag, "de-DE");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Currency::Usd).unwrap();
        assert_eq!(json, "\"USD\"");
        let back: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(back, Currency::Eur);
    }
}
