//! Summary figures for a list of classified transactions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::ClassifiedTransaction;

/// Counts and magnitude totals per direction.
///
/// Internal transfers are counted but add to neither total. Totals saturate
/// at `Decimal::MAX` rather than overflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub count: usize,
    pub credit_count: usize,
    pub debit_count: usize,
    pub transfer_count: usize,
    pub total_in: Decimal,
    pub total_out: Decimal,
}

impl TransactionSummary {
    /// Inflow minus outflow over the summarized list
    pub fn net_flow(&self) -> Decimal {
        self.total_in - self.total_out
    }
}

pub fn summarize(transactions: &[ClassifiedTransaction]) -> TransactionSummary {
    transactions
        .iter()
        .fold(TransactionSummary::default(), |mut summary, tx| {
            summary.count += 1;
            if tx.is_credit() {
                summary.credit_count += 1;
                summary.total_in = summary.total_in.saturating_add(tx.amount);
            } else if tx.is_debit() {
                summary.debit_count += 1;
                summary.total_out = summary.total_out.saturating_add(tx.amount);
            } else {
                summary.transfer_count += 1;
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Direction};
    use chrono::NaiveDate;

    fn tx(id: i64, direction: Direction, amount: impl Into<Decimal>) -> ClassifiedTransaction {
        ClassifiedTransaction {
            id,
            description: "Transfer".to_string(),
            amount: amount.into(),
            date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            direction,
            category: Category::Transfer,
            merchant_label: String::new(),
            display_account_number: String::new(),
            from_account_id: 1,
            to_account_id: 2,
        }
    }

    #[test]
    fn test_summarize_excludes_internal_transfers_from_totals() {
        let summary = summarize(&[
            tx(1, Direction::Credit, 3500),
            tx(2, Direction::Debit, 90),
            tx(3, Direction::Transfer, 500),
            tx(4, Direction::Debit, 10),
        ]);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.credit_count, 1);
        assert_eq!(summary.debit_count, 2);
        assert_eq!(summary.transfer_count, 1);
        assert_eq!(summary.total_in, Decimal::from(3500));
        assert_eq!(summary.total_out, Decimal::from(100));
        assert_eq!(summary.net_flow(), Decimal::from(3400));
    }

    #[test]
    fn test_summarize_saturates_huge_totals() {
        let summary = summarize(&[
            tx(1, Direction::Debit, Decimal::MAX),
            tx(2, Direction::Debit, Decimal::MAX),
            tx(3, Direction::Credit, Decimal::MAX),
            tx(4, Direction::Credit, 1),
        ]);
        assert_eq!(summary.debit_count, 2);
        assert_eq!(summary.total_out, Decimal::MAX);
        assert_eq!(summary.total_in, Decimal::MAX);
        assert_eq!(summary.net_flow(), Decimal::ZERO);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), TransactionSummary::default());
    }
}
