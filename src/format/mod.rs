//! Locale-aware display formatting for amounts and rates

mod currency;
mod number;

pub use currency::{Currency, Locale, DEFAULT_CURRENCY};

/// Format an amount with two decimals in the currency's locale
///
/// `$1,234.56` for USD, `£1,234.56` for GBP, `1.234,56 €` for EUR.
pub fn format_currency(value: f64, currency: Currency) -> String {
    let locale = currency.locale();
    let (negative, body) = number::group_digits(value, 2, locale.group, locale.decimal);
    locale.place_symbol(negative, &body, currency.symbol())
}

/// Compact currency label for chart axis ticks
///
/// Millions and thousands get one decimal and an `M`/`k` suffix; anything
/// smaller is rounded to a whole unit.
pub fn format_chart_currency(value: f64, currency: Currency) -> String {
    let locale = currency.locale();
    let magnitude = if value.is_finite() { value.abs() } else { 0.0 };

    let (scaled, suffix, decimals) = if magnitude >= 1_000_000.0 {
        (value / 1_000_000.0, "M", 1)
    } else if magnitude >= 1_000.0 {
        (value / 1_000.0, "k", 1)
    } else {
        (value, "", 0)
    };

    let (negative, mut body) = number::group_digits(scaled, decimals, locale.group, locale.decimal);
    body.push_str(suffix);
    locale.place_symbol(negative, &body, currency.symbol())
}

/// Format a rate that is already expressed in percent (`7.0` -> `7.00%`)
pub fn format_percentage(value: f64) -> String {
    let locale = Locale::EN_US;
    let (negative, body) = number::group_digits(value, 2, locale.group, locale.decimal);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{body}%")
}
