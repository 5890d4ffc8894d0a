//! Direction classification of raw transfers

use summit_source::RawTransfer;

use super::models::ClassifiedTransaction;
use super::ownership::{AccountDirectory, OwnershipResolver, OwnershipSet};
use super::types::{Category, Direction};

/// Description used when the ledger has none
pub const DEFAULT_DESCRIPTION: &str = "Transfer";

/// Label one transfer from the viewer's point of view.
///
/// Only ownership of the two legs decides the direction:
///
/// | from owned | to owned | direction |
/// |---|---|---|
/// | yes | yes | `Transfer` |
/// | no  | yes | `Credit` |
/// | yes | no  | `Debit` |
/// | no  | no  | `Debit` |
pub fn classify(transfer: &RawTransfer, resolver: &OwnershipResolver<'_>) -> ClassifiedTransaction {
    let from_owned = resolver.is_owned(transfer.from_account_id);
    let to_owned = resolver.is_owned(transfer.to_account_id);
    let from_number = resolver.display_number(transfer.from_account_id);
    let to_number = resolver.display_number(transfer.to_account_id);

    let (direction, display_account_number, merchant_label) = match (from_owned, to_owned) {
        (true, true) => {
            let label = format!("Transfer: {} → {}", from_number, to_number);
            (Direction::Transfer, from_number, label)
        }
        (false, true) => {
            let label = format!("From {}", from_number);
            (Direction::Credit, to_number, label)
        }
        (true, false) => {
            let label = format!("To {}", to_number);
            (Direction::Debit, from_number, label)
        }
        (false, false) => {
            log::warn!(
                target: "summit::classify",
                "Transfer {} touches no owned account ({} -> {}), treating as debit",
                transfer.id,
                transfer.from_account_id,
                transfer.to_account_id
            );
            let label = format!("To {}", to_number);
            (Direction::Debit, from_number, label)
        }
    };

    let description = transfer
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();

    ClassifiedTransaction {
        id: transfer.id,
        description,
        amount: transfer.amount.abs(),
        date: transfer.timestamp,
        direction,
        category: Category::Transfer,
        merchant_label,
        display_account_number,
        from_account_id: transfer.from_account_id,
        to_account_id: transfer.to_account_id,
    }
}

/// Classify a whole snapshot, preserving its order
pub fn classify_all(
    transfers: &[RawTransfer],
    owned: &OwnershipSet,
    directory: &AccountDirectory,
) -> Vec<ClassifiedTransaction> {
    let resolver = OwnershipResolver::new(owned, directory);
    let classified: Vec<_> = transfers.iter().map(|t| classify(t, &resolver)).collect();
    log::debug!(
        target: "summit::classify",
        "Classified {} transfers against {} owned accounts",
        classified.len(),
        owned.len()
    );
    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn transfer(from: i64, to: i64) -> RawTransfer {
        RawTransfer {
            id: 1,
            from_account_id: from,
            to_account_id: to,
            amount: Decimal::from(50),
            timestamp: NaiveDate::from_ymd_opt(2025, 11, 28).unwrap().and_hms_opt(10, 0, 0).unwrap(),
            description: Some("Rent".to_string()),
        }
    }

    fn directory() -> AccountDirectory {
        [(101, "****4521".to_string()), (202, "****9001".to_string())]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_outgoing_is_debit() {
        let owned: OwnershipSet = [101].into_iter().collect();
        let directory = directory();
        let tx = classify(&transfer(101, 202), &OwnershipResolver::new(&owned, &directory));

        assert_eq!(tx.direction, Direction::Debit);
        assert_eq!(tx.display_account_number, "****4521");
        assert_eq!(tx.merchant_label, "To ****9001");
        assert_eq!(tx.amount, Decimal::from(50));
        assert_eq!(tx.category, Category::Transfer);
    }

    #[test]
    fn test_incoming_is_credit() {
        let owned: OwnershipSet = [101].into_iter().collect();
        let directory = directory();
        let tx = classify(&transfer(202, 101), &OwnershipResolver::new(&owned, &directory));

        assert_eq!(tx.direction, Direction::Credit);
        assert_eq!(tx.display_account_number, "****4521");
        assert_eq!(tx.merchant_label, "From ****9001");
    }

    #[test]
    fn test_both_owned_is_transfer() {
        let owned: OwnershipSet = [101, 202].into_iter().collect();
        let directory = directory();
        let tx = classify(&transfer(101, 202), &OwnershipResolver::new(&owned, &directory));

        assert_eq!(tx.direction, Direction::Transfer);
        assert_eq!(tx.display_account_number, "****4521");
        assert_eq!(tx.merchant_label, "Transfer: ****4521 → ****9001");
    }

    #[test]
    fn test_neither_owned_falls_back_to_debit() {
        let owned: OwnershipSet = [7].into_iter().collect();
        let directory = directory();
        let tx = classify(&transfer(101, 202), &OwnershipResolver::new(&owned, &directory));

        assert_eq!(tx.direction, Direction::Debit);
        assert_eq!(tx.display_account_number, "****4521");
        assert_eq!(tx.merchant_label, "To ****9001");
    }

    #[test]
    fn test_unknown_accounts_get_placeholders() {
        let owned: OwnershipSet = [101].into_iter().collect();
        let directory = AccountDirectory::new();
        let tx = classify(&transfer(555, 101), &OwnershipResolver::new(&owned, &directory));

        assert_eq!(tx.merchant_label, "From Account 555");
        assert_eq!(tx.display_account_number, "Account 101");
    }

    #[test]
    fn test_missing_description_defaults() {
        let owned: OwnershipSet = [101].into_iter().collect();
        let directory = directory();
        let resolver = OwnershipResolver::new(&owned, &directory);

        let mut raw = transfer(101, 202);
        raw.description = None;
        assert_eq!(classify(&raw, &resolver).description, "Transfer");

        raw.description = Some(String::new());
        assert_eq!(classify(&raw, &resolver).description, "Transfer");
    }

    #[test]
    fn test_direction_ignores_amount_and_description() {
        let owned: OwnershipSet = [101].into_iter().collect();
        let directory = directory();
        let resolver = OwnershipResolver::new(&owned, &directory);

        let mut raw = transfer(202, 101);
        raw.amount = Decimal::from(-75);
        raw.description = Some("Refund to merchant".to_string());
        let tx = classify(&raw, &resolver);
        assert_eq!(tx.direction, Direction::Credit);
        assert_eq!(tx.amount, Decimal::from(75));
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let owned: OwnershipSet = [101].into_iter().collect();
        let directory = directory();
        let mut second = transfer(202, 101);
        second.id = 2;
        let classified = classify_all(&[transfer(101, 202), second], &owned, &directory);

        assert_eq!(classified.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(classified[0].direction, Direction::Debit);
        assert_eq!(classified[1].direction, Direction::Credit);
    }
}
