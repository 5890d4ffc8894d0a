//! Wire types delivered by the ledger API

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque account identifier
pub type AccountId = i64;

/// Transfer identifier
pub type TransferId = i64;

/// A directional transfer as recorded by the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransfer {
    pub id: TransferId,
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    /// Magnitude; the direction comes from the account legs
    pub amount: Decimal,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub description: Option<String>,
}

/// One of the viewer's accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: AccountId,
    #[serde(default)]
    pub account_number: Option<String>,
    /// CHECKING, SAVINGS, ...
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
    #[serde(default)]
    pub frozen: bool,
}
