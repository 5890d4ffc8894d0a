//! Snapshot sources for the transaction engine
//!
//! A source hands over the viewer's transfers and accounts as plain
//! values. Nothing here interprets them; classification lives in
//! `summit-core`.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

pub mod error;
pub mod types;
pub mod fixtures;

pub use error::SourceError;
pub use fixtures::StaticSource;
pub use types::{AccountId, AccountRecord, RawTransfer, TransferId};

// ==================== Source Trait ====================

/// Source reference type
pub type SourceRef = Arc<dyn SnapshotSource>;

/// Supplier of one snapshot of transfers and accounts
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Transfers visible to the viewer, in ledger order
    async fn fetch_transfers(&self) -> Result<Vec<RawTransfer>, SourceError>;

    /// The viewer's own accounts
    async fn fetch_accounts(&self) -> Result<Vec<AccountRecord>, SourceError>;
}

/// Parse a JSON array of transfers, rejecting duplicate ids
pub fn parse_transfers(content: &str, location: &str) -> Result<Vec<RawTransfer>, SourceError> {
    let transfers: Vec<RawTransfer> = serde_json::from_str(content)
        .map_err(|e| SourceError::InvalidJson {
            location: location.to_string(),
            message: e.to_string(),
        })?;

    let mut seen = HashSet::with_capacity(transfers.len());
    for transfer in &transfers {
        if !seen.insert(transfer.id) {
            return Err(SourceError::DuplicateId { id: transfer.id });
        }
    }

    Ok(transfers)
}

/// Parse a JSON array of account records
pub fn parse_accounts(content: &str, location: &str) -> Result<Vec<AccountRecord>, SourceError> {
    serde_json::from_str(content).map_err(|e| SourceError::InvalidJson {
        location: location.to_string(),
        message: e.to_string(),
    })
}

/// Reads a snapshot from two JSON files on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    transfers_path: PathBuf,
    accounts_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(transfers_path: PathBuf, accounts_path: PathBuf) -> Self {
        Self {
            transfers_path,
            accounts_path,
        }
    }
}

#[async_trait]
impl SnapshotSource for JsonFileSource {
    async fn fetch_transfers(&self) -> Result<Vec<RawTransfer>, SourceError> {
        let location = self.transfers_path.to_string_lossy().to_string();
        let content = tokio::fs::read_to_string(&self.transfers_path).await?;
        let transfers = parse_transfers(&content, &location)?;
        log::debug!(target: "summit::source", "Read {} transfers from {}", transfers.len(), location);
        Ok(transfers)
    }

    async fn fetch_accounts(&self) -> Result<Vec<AccountRecord>, SourceError> {
        let location = self.accounts_path.to_string_lossy().to_string();
        let content = tokio::fs::read_to_string(&self.accounts_path).await?;
        let accounts = parse_accounts(&content, &location)?;
        log::debug!(target: "summit::source", "Read {} accounts from {}", accounts.len(), location);
        Ok(accounts)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_transfers() {
        let input = r#"[
            {"id": 1, "fromAccountId": 101, "toAccountId": 202, "amount": "50.00",
             "timestamp": "2025-11-28T10:15:30", "description": "Rent share"},
            {"id": 2, "fromAccountId": 202, "toAccountId": 101, "amount": 12.5,
             "timestamp": "2025-11-27T08:00:00.123456"}
        ]"#;
        let transfers = parse_transfers(input, "inline").unwrap();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].from_account_id, 101);
        assert_eq!(transfers[0].amount, Decimal::new(5000, 2));
        assert_eq!(transfers[0].description.as_deref(), Some("Rent share"));
        assert_eq!(transfers[1].description, None);
    }

    #[test]
    fn test_parse_transfers_rejects_duplicates() {
        let input = r#"[
            {"id": 7, "fromAccountId": 1, "toAccountId": 2, "amount": "1", "timestamp": "2025-01-01T00:00:00"},
            {"id": 7, "fromAccountId": 2, "toAccountId": 1, "amount": "1", "timestamp": "2025-01-02T00:00:00"}
        ]"#;
        let err = parse_transfers(input, "inline").unwrap_err();
        assert!(matches!(err, SourceError::DuplicateId { id: 7 }));
    }

    #[test]
    fn test_parse_transfers_invalid_json() {
        let err = parse_transfers("{not json", "transfers.json").unwrap_err();
        match err {
            SourceError::InvalidJson { location, .. } => assert_eq!(location, "transfers.json"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_accounts() {
        let input = r#"[
            {"id": 101, "accountNumber": "****4521", "type": "CHECKING"},
            {"id": 102, "frozen": true}
        ]"#;
        let accounts = parse_accounts(input, "inline").unwrap();
        assert_eq!(accounts[0].account_number.as_deref(), Some("****4521"));
        assert_eq!(accounts[0].account_type.as_deref(), Some("CHECKING"));
        assert!(!accounts[0].frozen);
        assert_eq!(accounts[1].account_number, None);
        assert!(accounts[1].frozen);
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new(
            PathBuf::from("/nonexistent/transfers.json"),
            PathBuf::from("/nonexistent/accounts.json"),
        );
        assert!(matches!(source.fetch_transfers().await, Err(SourceError::IoError(_))));
        assert!(matches!(source.fetch_accounts().await, Err(SourceError::IoError(_))));
    }

    #[tokio::test]
    async fn test_json_file_source_reads_files() {
        let dir = std::env::temp_dir().join(format!("summit-source-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let transfers_path = dir.join("transfers.json");
        let accounts_path = dir.join("accounts.json");
        tokio::fs::write(
            &transfers_path,
            r#"[{"id": 1, "fromAccountId": 101, "toAccountId": 202, "amount": "5", "timestamp": "2025-11-28T10:15:30"}]"#,
        )
        .await
        .unwrap();
        tokio::fs::write(&accounts_path, r#"[{"id": 101, "accountNumber": "****4521"}]"#)
            .await
            .unwrap();

        let source = JsonFileSource::new(transfers_path, accounts_path);
        assert_eq!(source.fetch_transfers().await.unwrap().len(), 1);
        assert_eq!(source.fetch_accounts().await.unwrap()[0].id, 101);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
