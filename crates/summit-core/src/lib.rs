//! Transaction classification and filtering
//!
//! Raw transfers name a source and a destination account. Given the set of
//! accounts the viewer owns, each transfer is labelled as a credit, a debit
//! or an internal transfer, and the labelled list can then be narrowed by
//! search text, type and a trailing date window.

pub mod classify;
pub mod error;
pub mod filter;
pub mod models;
pub mod ownership;
pub mod projection;
pub mod reports;
pub mod time;
pub mod types;

use chrono::{NaiveDateTime, Utc};
use std::sync::{PoisonError, RwLock};
use summit_config::{Config, DateWindow, TypeFilter};
use summit_source::SourceRef;

pub use classify::{classify, classify_all, DEFAULT_DESCRIPTION};
pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, ErrorSeverity};
pub use filter::{filter_transactions, filter_transactions_now, FilterCriteria};
pub use models::ClassifiedTransaction;
pub use ownership::{AccountDirectory, OwnershipResolver, OwnershipSet};
pub use projection::{empty_state_message, project, project_all, AmountTone, DisplayTransaction};
pub use reports::{summarize, TransactionSummary};
pub use time::{TimeContext, TimeFilter};
pub use types::{BadgeTone, Category, CategoryBadge, Direction};

/// The most recent classified snapshot
#[derive(Debug, Clone, Default)]
pub struct BookData {
    pub transactions: Vec<ClassifiedTransaction>,
    pub refreshed_at: Option<NaiveDateTime>,
}

/// Holds one classified snapshot plus the current filter criteria.
///
/// Every refresh replaces the whole snapshot; readers see either the old
/// list or the new one.
pub struct TransactionBook {
    config: Config,
    source: SourceRef,
    logger: Box<dyn ErrorLogger>,
    data: RwLock<BookData>,
    criteria: RwLock<FilterCriteria>,
}

impl TransactionBook {
    /// Create an empty book; call `refresh` to populate it
    pub fn new(config: Config, source: SourceRef) -> Self {
        let criteria = FilterCriteria::from_defaults(&config.filters);
        Self {
            config,
            source,
            logger: Box::new(DefaultErrorLogger),
            data: RwLock::new(BookData::default()),
            criteria: RwLock::new(criteria),
        }
    }

    pub fn with_logger(mut self, logger: Box<dyn ErrorLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch and classify a snapshot without storing it
    pub async fn load_snapshot(&self) -> CoreResult<Vec<ClassifiedTransaction>> {
        let (transfers, accounts) =
            tokio::try_join!(self.source.fetch_transfers(), self.source.fetch_accounts())?;

        let owned = OwnershipSet::from_records(&accounts);
        let directory = AccountDirectory::from_records(&accounts);
        Ok(classify_all(&transfers, &owned, &directory))
    }

    /// Fetch, classify and store a new snapshot.
    ///
    /// A failed fetch is logged and leaves an empty list behind. Returns the
    /// number of stored transactions.
    pub async fn refresh(&self) -> usize {
        let transactions = match self.load_snapshot().await {
            Ok(transactions) => transactions,
            Err(e) => {
                let context = ErrorContext::new("refresh".to_string())
                    .with_data("severity", serde_json::json!(e.severity().to_string()));
                self.logger.log_error(&e, &context);
                Vec::new()
            }
        };

        let count = transactions.len();
        self.replace(transactions);
        log::info!(target: "summit::book", "Snapshot refreshed: {} transactions", count);
        count
    }

    /// Swap in a new classified list
    pub fn replace(&self, transactions: Vec<ClassifiedTransaction>) {
        let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *data = BookData {
            transactions,
            refreshed_at: Some(Utc::now().naive_utc()),
        };
    }

    pub fn transactions(&self) -> Vec<ClassifiedTransaction> {
        self.data.read().unwrap_or_else(PoisonError::into_inner).transactions.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.data.read().unwrap_or_else(PoisonError::into_inner).transactions.len()
    }

    pub fn refreshed_at(&self) -> Option<NaiveDateTime> {
        self.data.read().unwrap_or_else(PoisonError::into_inner).refreshed_at
    }

    // ==================== Criteria ====================

    pub fn criteria(&self) -> FilterCriteria {
        self.criteria.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set_criteria(&self, criteria: FilterCriteria) {
        *self.criteria.write().unwrap_or_else(PoisonError::into_inner) = criteria;
    }

    pub fn set_search(&self, search_term: impl Into<String>) {
        self.criteria.write().unwrap_or_else(PoisonError::into_inner).search_term = search_term.into();
    }

    pub fn set_type_filter(&self, type_filter: TypeFilter) {
        self.criteria.write().unwrap_or_else(PoisonError::into_inner).type_filter = type_filter;
    }

    pub fn set_date_window(&self, date_window: DateWindow) {
        self.criteria.write().unwrap_or_else(PoisonError::into_inner).date_window = date_window;
    }

    /// Back to the configured defaults
    pub fn reset_criteria(&self) {
        self.set_criteria(FilterCriteria::from_defaults(&self.config.filters));
    }

    // ==================== Views ====================

    /// Stored snapshot narrowed by the current criteria, relative to `now`
    pub fn filtered_at(&self, now: NaiveDateTime) -> Vec<ClassifiedTransaction> {
        let criteria = self.criteria();
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        filter_transactions(&data.transactions, &criteria, now)
    }

    pub fn filtered(&self) -> Vec<ClassifiedTransaction> {
        self.filtered_at(Utc::now().naive_utc())
    }

    pub fn summary_at(&self, now: NaiveDateTime) -> TransactionSummary {
        summarize(&self.filtered_at(now))
    }

    pub fn display_rows_at(&self, now: NaiveDateTime) -> Vec<DisplayTransaction> {
        project_all(&self.filtered_at(now), &self.config.display)
    }

    /// Hint for an empty result under the current criteria
    pub fn empty_state_message(&self) -> &'static str {
        empty_state_message(&self.criteria(), &self.config.filters)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use summit_source::StaticSource;

    fn now() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2025, 11, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn demo_book() -> TransactionBook {
        TransactionBook::new(Config::default(), Arc::new(StaticSource::demo(now())))
    }

    #[tokio::test]
    async fn test_refresh_classifies_snapshot() {
        let book = demo_book();
        assert_eq!(book.transaction_count(), 0);
        assert!(book.refreshed_at().is_none());

        assert_eq!(book.refresh().await, 8);
        assert!(book.refreshed_at().is_some());

        let transactions = book.transactions();
        let internal = transactions.iter().find(|t| t.id == 4).unwrap();
        assert_eq!(internal.direction, Direction::Transfer);
        assert_eq!(internal.merchant_label, "Transfer: ****7832 → ****4521");

        let salary = transactions.iter().find(|t| t.id == 2).unwrap();
        assert_eq!(salary.direction, Direction::Credit);
        assert_eq!(salary.merchant_label, "From Account 900");

        let untitled = transactions.iter().find(|t| t.id == 7).unwrap();
        assert_eq!(untitled.description, DEFAULT_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_refresh_failure_leaves_empty_list() {
        let book = TransactionBook::new(Config::default(), Arc::new(StaticSource::unavailable()));
        assert_eq!(book.refresh().await, 0);
        assert!(book.transactions().is_empty());
        assert_eq!(book.empty_state_message(), projection::EMPTY_DEFAULT_MESSAGE);
    }

    #[tokio::test]
    async fn test_load_snapshot_reports_source_error() {
        let book = TransactionBook::new(Config::default(), Arc::new(StaticSource::unavailable()));
        let err = book.load_snapshot().await.unwrap_err();
        assert!(matches!(err, CoreError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_default_criteria_use_thirty_day_window() {
        let book = demo_book();
        book.refresh().await;

        // The investment return is 45 days old
        let ids: Vec<_> = book.filtered_at(now()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);

        book.set_date_window(DateWindow::All);
        assert_eq!(book.filtered_at(now()).len(), 8);
    }

    #[tokio::test]
    async fn test_criteria_setters_compose() {
        let book = demo_book();
        book.refresh().await;

        book.set_type_filter(TypeFilter::Income);
        let ids: Vec<_> = book.filtered_at(now()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);

        book.set_search("salary");
        assert_eq!(book.filtered_at(now()).len(), 1);

        book.set_search("amazon");
        assert!(book.filtered_at(now()).is_empty());
        assert_eq!(book.empty_state_message(), projection::EMPTY_FILTERED_MESSAGE);

        book.reset_criteria();
        assert_eq!(book.criteria(), FilterCriteria::from_defaults(&book.config().filters));
    }

    #[tokio::test]
    async fn test_summary_and_rows_follow_filter() {
        let book = demo_book();
        book.refresh().await;
        book.set_type_filter(TypeFilter::Expense);

        let summary = book.summary_at(now());
        assert_eq!(summary.credit_count, 0);
        assert_eq!(summary.transfer_count, 0);
        assert_eq!(summary.debit_count, 5);

        let rows = book.display_rows_at(now());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].amount_text, "$89.99");
    }
}
