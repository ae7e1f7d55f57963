//! Money formatting for minor-unit amounts.
//!
//! The service stores every amount as integer minor units (cents). These
//! helpers are the only place the UI turns them into major units; raw minor
//! units are never rendered.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

/// Placeholder shown for amounts the service has not priced yet.
pub const NOT_AVAILABLE: &str = "N/A";

const NBSP: char = '\u{a0}';

fn split_minor_units(cents: i64) -> (&'static str, u64, u64) {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    (sign, abs / 100, abs % 100)
}

/// Plain two-decimal major units: `150000` -> `"1500.00"`.
pub fn format_amount(cents: i64) -> String {
    let (sign, major, minor) = split_minor_units(cents);
    format!("{sign}{major}.{minor:02}")
}

/// Rouble presentation in the `ru-RU` locale: `150000` -> `"1 500,00 ₽"`.
///
/// Group and symbol separators are non-breaking spaces so the amount never
/// wraps inside a table cell.
pub fn format_currency(cents: i64) -> String {
    let (sign, major, minor) = split_minor_units(cents);
    format!("{sign}{},{minor:02}{NBSP}₽", group_thousands(major))
}

/// Dollar-prefixed two-decimal amount used by the detail card: `"$1500.00"`.
pub fn format_dollars(cents: i64) -> String {
    format!("${}", format_amount(cents))
}

/// [`format_dollars`], or `N/A` when the amount is absent.
pub fn format_optional_dollars(cents: Option<i64>) -> String {
    cents.map_or_else(|| NOT_AVAILABLE.to_owned(), format_dollars)
}

/// [`format_currency`], or `N/A` when the amount is absent.
pub fn format_optional_currency(cents: Option<i64>) -> String {
    cents.map_or_else(|| NOT_AVAILABLE.to_owned(), format_currency)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(ch);
    }
    out
}
