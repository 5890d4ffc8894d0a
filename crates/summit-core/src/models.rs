//! Core data models for the transaction engine

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use summit_source::{AccountId, TransferId};

use super::types::{Category, Direction};

/// A transfer labelled from the viewer's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedTransaction {
    pub id: TransferId,
    pub description: String,
    /// Unsigned magnitude
    pub amount: Decimal,
    pub date: NaiveDateTime,
    pub direction: Direction,
    pub category: Category,
    /// Sentence naming the counterpart, e.g. "To ****4521"
    pub merchant_label: String,
    pub display_account_number: String,
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
}

impl ClassifiedTransaction {
    pub fn is_credit(&self) -> bool {
        self.direction == Direction::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.direction == Direction::Debit
    }
}
