//! Account ownership and display numbers

use std::collections::{HashMap, HashSet};
use summit_source::{AccountId, AccountRecord};

/// Accounts that belong to the viewer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipSet {
    ids: HashSet<AccountId>,
}

impl OwnershipSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every account the viewer was given is owned
    pub fn from_records(records: &[AccountRecord]) -> Self {
        records.iter().map(|r| r.id).collect()
    }

    pub fn contains(&self, id: AccountId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<AccountId> for OwnershipSet {
    fn from_iter<I: IntoIterator<Item = AccountId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Account id to display number lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDirectory {
    numbers: HashMap<AccountId, String>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the viewer's records; accounts without a number show as `#{id}`
    pub fn from_records(records: &[AccountRecord]) -> Self {
        records
            .iter()
            .map(|r| {
                let number = r
                    .account_number
                    .as_deref()
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", r.id));
                (r.id, number)
            })
            .collect()
    }

    pub fn insert(&mut self, id: AccountId, number: impl Into<String>) {
        self.numbers.insert(id, number.into());
    }

    /// Display number, or `Account {id}` when the id is unknown
    pub fn display_number(&self, id: AccountId) -> String {
        self.numbers
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Account {}", id))
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl FromIterator<(AccountId, String)> for AccountDirectory {
    fn from_iter<I: IntoIterator<Item = (AccountId, String)>>(iter: I) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}

/// Read-only view answering ownership and display questions for one pass
#[derive(Debug, Clone, Copy)]
pub struct OwnershipResolver<'a> {
    owned: &'a OwnershipSet,
    directory: &'a AccountDirectory,
}

impl<'a> OwnershipResolver<'a> {
    pub fn new(owned: &'a OwnershipSet, directory: &'a AccountDirectory) -> Self {
        Self { owned, directory }
    }

    pub fn is_owned(&self, id: AccountId) -> bool {
        self.owned.contains(id)
    }

    pub fn display_number(&self, id: AccountId) -> String {
        self.directory.display_number(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: AccountId, number: Option<&str>) -> AccountRecord {
        AccountRecord {
            id,
            account_number: number.map(str::to_string),
            account_type: None,
            frozen: false,
        }
    }

    #[test]
    fn test_ownership_from_records() {
        let owned = OwnershipSet::from_records(&[record(101, Some("****4521")), record(102, None)]);
        assert!(owned.contains(101));
        assert!(owned.contains(102));
        assert!(!owned.contains(202));
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn test_directory_fallbacks() {
        let directory = AccountDirectory::from_records(&[
            record(101, Some("****4521")),
            record(102, None),
            record(103, Some("")),
        ]);
        assert_eq!(directory.display_number(101), "****4521");
        assert_eq!(directory.display_number(102), "#102");
        assert_eq!(directory.display_number(103), "#103");
        assert_eq!(directory.display_number(999), "Account 999");
    }

    #[test]
    fn test_resolver_reads_both_tables() {
        let owned: OwnershipSet = [101].into_iter().collect();
        let mut directory = AccountDirectory::new();
        directory.insert(202, "EXT-202");
        let resolver = OwnershipResolver::new(&owned, &directory);

        assert!(resolver.is_owned(101));
        assert!(!resolver.is_owned(202));
        assert_eq!(resolver.display_number(202), "EXT-202");
        assert_eq!(resolver.display_number(101), "Account 101");
    }
}
