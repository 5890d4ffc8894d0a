//! Search, type and date-window filtering of classified transactions

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use summit_config::{DateWindow, FilterDefaults, TypeFilter};

use super::models::ClassifiedTransaction;
use super::time::{TimeContext, TimeFilter};
use super::types::Direction;

/// Snapshot of the filter controls
///
/// The default value passes every transaction through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_term: String,
    pub type_filter: TypeFilter,
    pub date_window: DateWindow,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, type_filter: TypeFilter, date_window: DateWindow) -> Self {
        Self {
            search_term: search_term.into(),
            type_filter,
            date_window,
        }
    }

    /// Criteria as configured for a fresh session
    pub fn from_defaults(defaults: &FilterDefaults) -> Self {
        Self::new(defaults.search.clone(), defaults.type_filter, defaults.date_window)
    }

    /// True when these criteria cannot remove anything
    pub fn is_identity(&self) -> bool {
        self.search_term.is_empty()
            && self.type_filter == TypeFilter::All
            && self.date_window == DateWindow::All
    }

    /// Case-insensitive match on description, merchant label or category
    pub fn matches_search(&self, tx: &ClassifiedTransaction) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        search_matches(tx, &self.search_term.to_lowercase())
    }

    /// Internal transfers only pass under `All`
    pub fn matches_type(&self, tx: &ClassifiedTransaction) -> bool {
        match self.type_filter {
            TypeFilter::All => true,
            TypeFilter::Income => tx.direction == Direction::Credit,
            TypeFilter::Expense => tx.direction == Direction::Debit,
        }
    }

    pub fn matches_window(&self, tx: &ClassifiedTransaction, now: NaiveDateTime) -> bool {
        tx.filter_by_time(&TimeContext::new(self.date_window, now))
    }

    pub fn matches(&self, tx: &ClassifiedTransaction, now: NaiveDateTime) -> bool {
        self.matches_search(tx) && self.matches_type(tx) && self.matches_window(tx, now)
    }
}

fn search_matches(tx: &ClassifiedTransaction, needle_lower: &str) -> bool {
    tx.description.to_lowercase().contains(needle_lower)
        || tx.merchant_label.to_lowercase().contains(needle_lower)
        || tx.category.to_string().to_lowercase().contains(needle_lower)
}

/// Narrow `transactions` to those matching `criteria`, keeping their order.
///
/// Stages run search, then type, then date window.
pub fn filter_transactions(
    transactions: &[ClassifiedTransaction],
    criteria: &FilterCriteria,
    now: NaiveDateTime,
) -> Vec<ClassifiedTransaction> {
    let mut filtered = transactions.to_vec();

    if !criteria.search_term.is_empty() {
        let needle = criteria.search_term.to_lowercase();
        filtered.retain(|tx| search_matches(tx, &needle));
    }

    if criteria.type_filter != TypeFilter::All {
        filtered.retain(|tx| criteria.matches_type(tx));
    }

    if criteria.date_window != DateWindow::All {
        let context = TimeContext::new(criteria.date_window, now);
        filtered.retain(|tx| tx.filter_by_time(&context));
    }

    filtered
}

/// `filter_transactions` anchored at the current UTC time
pub fn filter_transactions_now(
    transactions: &[ClassifiedTransaction],
    criteria: &FilterCriteria,
) -> Vec<ClassifiedTransaction> {
    filter_transactions(transactions, criteria, Utc::now().naive_utc())
}
