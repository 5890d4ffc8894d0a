//! In-memory source, used by tests and the `--demo` mode

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use super::{AccountRecord, RawTransfer, SnapshotSource, SourceError};

/// Serves a fixed snapshot, or a fixed failure
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    transfers: Vec<RawTransfer>,
    accounts: Vec<AccountRecord>,
    unavailable: bool,
}

impl StaticSource {
    pub fn new(transfers: Vec<RawTransfer>, accounts: Vec<AccountRecord>) -> Self {
        Self {
            transfers,
            accounts,
            unavailable: false,
        }
    }

    /// A source whose every fetch fails
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Sample checking/savings snapshot with timestamps relative to `now`
    pub fn demo(now: NaiveDateTime) -> Self {
        let accounts = vec![
            AccountRecord {
                id: 101,
                account_number: Some("****4521".to_string()),
                account_type: Some("CHECKING".to_string()),
                frozen: false,
            },
            AccountRecord {
                id: 102,
                account_number: Some("****7832".to_string()),
                account_type: Some("SAVINGS".to_string()),
                frozen: false,
            },
        ];

        let transfer = |id, from, to, cents, days_ago, description: Option<&str>| RawTransfer {
            id,
            from_account_id: from,
            to_account_id: to,
            amount: Decimal::new(cents, 2),
            timestamp: now - Duration::days(days_ago),
            description: description.map(str::to_string),
        };

        let transfers = vec![
            transfer(1, 101, 950, 8999, 1, Some("Amazon Purchase")),
            transfer(2, 900, 101, 350000, 2, Some("Salary Deposit")),
            transfer(3, 101, 951, 1250, 3, Some("Starbucks")),
            transfer(4, 102, 101, 50000, 4, Some("Transfer from Savings")),
            transfer(5, 101, 952, 14530, 5, Some("Utilities Bill")),
            transfer(6, 101, 953, 7845, 6, Some("Grocery Store")),
            transfer(7, 101, 954, 4500, 12, None),
            transfer(8, 960, 102, 25000, 45, Some("Investment Return")),
        ];

        Self::new(transfers, accounts)
    }
}

#[async_trait]
impl SnapshotSource for StaticSource {
    async fn fetch_transfers(&self) -> Result<Vec<RawTransfer>, SourceError> {
        if self.unavailable {
            return Err(SourceError::Unavailable {
                message: "transfer source offline".to_string(),
            });
        }
        Ok(self.transfers.clone())
    }

    async fn fetch_accounts(&self) -> Result<Vec<AccountRecord>, SourceError> {
        if self.unavailable {
            return Err(SourceError::Unavailable {
                message: "account directory offline".to_string(),
            });
        }
        Ok(self.accounts.clone())
    }
}
