//! Display-ready view of classified transactions

use serde::Serialize;
use summit_config::{DisplayConfig, FilterDefaults, SymbolPosition};
use summit_source::TransferId;
use summit_utils::{format_currency, format_date};

use super::filter::FilterCriteria;
use super::models::ClassifiedTransaction;
use super::types::{Category, CategoryBadge, Direction};

pub const EMPTY_FILTERED_MESSAGE: &str = "Try adjusting your filters";
pub const EMPTY_DEFAULT_MESSAGE: &str = "Make a transfer to see your transaction history";

/// Colour of the amount column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountTone {
    Positive,
    Negative,
}

/// A transaction row with every field already formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTransaction {
    pub id: TransferId,
    pub description: String,
    pub merchant_label: String,
    pub category: Category,
    pub badge: CategoryBadge,
    pub date_text: String,
    pub account_text: String,
    pub amount_text: String,
    pub tone: AmountTone,
}

/// Only credits carry a `+`; everything else is shown as a bare magnitude
pub fn project(tx: &ClassifiedTransaction, display: &DisplayConfig) -> DisplayTransaction {
    let magnitude = format_currency(
        tx.amount.abs(),
        &display.currency,
        display.decimal_places,
        &display.thousands_separator,
        &display.decimal_separator,
        display.symbol_position == SymbolPosition::After,
    );

    let (amount_text, tone) = match tx.direction {
        Direction::Credit => (format!("+{}", magnitude), AmountTone::Positive),
        Direction::Debit | Direction::Transfer => (magnitude, AmountTone::Negative),
    };

    DisplayTransaction {
        id: tx.id,
        description: tx.description.clone(),
        merchant_label: tx.merchant_label.clone(),
        category: tx.category,
        badge: tx.category.badge(),
        date_text: format_date(&tx.date, &display.date_format),
        account_text: tx.display_account_number.clone(),
        amount_text,
        tone,
    }
}

pub fn project_all(transactions: &[ClassifiedTransaction], display: &DisplayConfig) -> Vec<DisplayTransaction> {
    transactions.iter().map(|tx| project(tx, display)).collect()
}

/// Hint shown when the filtered list is empty
pub fn empty_state_message(criteria: &FilterCriteria, defaults: &FilterDefaults) -> &'static str {
    if *criteria != FilterCriteria::from_defaults(defaults) {
        EMPTY_FILTERED_MESSAGE
    } else {
        EMPTY_DEFAULT_MESSAGE
    }
}
