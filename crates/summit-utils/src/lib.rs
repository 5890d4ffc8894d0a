//! Display formatting helpers

use chrono::NaiveDateTime;
use iso_currency::Currency;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an integer digit string with thousands separators
pub fn format_number(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format a decimal with grouping and a fixed number of fraction digits.
///
/// The sign is kept; callers that want a magnitude pass `abs()`.
pub fn format_decimal(
    amount: Decimal,
    decimal_places: u32,
    thousands_separator: &str,
    decimal_separator: &str,
) -> String {
    let rounded = amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (text, String::new()),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format_number(&int_part, thousands_separator));
    if decimal_places > 0 {
        let mut frac = frac_part;
        while frac.len() < decimal_places as usize {
            frac.push('0');
        }
        out.push_str(decimal_separator);
        out.push_str(&frac);
    }
    out
}

/// ISO 4217 symbol for a currency code; unknown codes render as `"{code} "`
pub fn currency_symbol(code: &str) -> String {
    let code = code.trim().to_uppercase();
    match Currency::from_code(&code) {
        Some(currency) => currency.symbol().to_string(),
        None => format!("{} ", code),
    }
}

/// Format a currency amount, placing the symbol before or after the number
pub fn format_currency(
    amount: Decimal,
    currency: &str,
    decimal_places: u32,
    thousands_separator: &str,
    decimal_separator: &str,
    symbol_after: bool,
) -> String {
    let number = format_decimal(amount.abs(), decimal_places, thousands_separator, decimal_separator);
    let symbol = currency_symbol(currency);
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    if symbol_after {
        format!("{}{} {}", sign, number, symbol.trim_end())
    } else {
        format!("{}{}{}", sign, symbol, number)
    }
}

/// Format a timestamp with a strftime pattern
pub fn format_date(date: &NaiveDateTime, pattern: &str) -> String {
    date.format(pattern).to_string()
}
