//! Ledger service
//!
//! Business logic for the transaction ledger. Every operation is a complete
//! read-modify-write cycle: load the whole ledger, act on it in memory, write
//! the whole ledger back.
//!
//! Ids are never assigned independently. After every structural change (add
//! or delete) they are recomputed from 1-based position, so the ledger always
//! holds exactly ids `1..=N` in storage order.

use chrono::{Local, NaiveDate};

use crate::error::{CentsError, CentsResult};
use crate::models::{capitalize_first, Money, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Service for ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

/// Validated input for a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionType,
}

impl NewTransaction {
    /// Validate and normalize the fields of a new transaction
    pub fn new(description: &str, amount: Money, kind: TransactionType) -> CentsResult<Self> {
        Ok(Self {
            description: normalize_description(description)?,
            amount: validate_amount(amount)?,
            kind,
        })
    }
}

/// Fields to change on an existing transaction; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub kind: Option<TransactionType>,
}

impl TransactionUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new description
    pub fn description(mut self, description: &str) -> CentsResult<Self> {
        self.description = Some(normalize_description(description)?);
        Ok(self)
    }

    /// Set a new amount
    pub fn amount(mut self, amount: Money) -> CentsResult<Self> {
        self.amount = Some(validate_amount(amount)?);
        Ok(self)
    }

    /// Set a new type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.kind.is_none()
    }
}

/// Options for filtering transactions
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilter {
    /// Keep only transactions of this type
    pub kind: Option<TransactionType>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Check a single transaction against the filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
    }
}

/// Result of listing the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The ledger has no transactions at all (it may have just been created)
    Empty,
    /// Transactions passing the filter, in storage order (possibly none)
    Transactions(Vec<Transaction>),
}

/// Result of editing a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The update carried no fields; nothing was loaded or written
    NoChanges,
    /// The transaction after the update
    Updated(Transaction),
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction dated today
    pub fn add(&self, input: NewTransaction) -> CentsResult<Transaction> {
        self.add_dated(input, Local::now().date_naive())
    }

    /// Record a new transaction with an explicit date
    pub fn add_dated(&self, input: NewTransaction, date: NaiveDate) -> CentsResult<Transaction> {
        let mut transactions = self.storage.transactions.load_or_init()?;

        let index = transactions.len();
        transactions.push(Transaction::new(
            TransactionId::from_position(index),
            date,
            &input.description,
            input.amount,
            input.kind,
        ));
        renumber(&mut transactions);

        transactions[index]
            .validate()
            .map_err(|e| CentsError::Validation(e.to_string()))?;
        self.storage.transactions.save(&transactions)?;

        let txn = transactions[index].clone();
        self.storage.log_create(
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        );

        Ok(txn)
    }

    /// List transactions in storage order
    ///
    /// A missing or empty ledger file is created (header only) and reported as
    /// `Listing::Empty`.
    pub fn list(&self, filter: TransactionFilter) -> CentsResult<Listing> {
        let transactions = self.storage.transactions.load_or_init()?;

        if transactions.is_empty() {
            return Ok(Listing::Empty);
        }

        Ok(Listing::Transactions(
            transactions
                .into_iter()
                .filter(|txn| filter.matches(txn))
                .collect(),
        ))
    }

    /// Delete a transaction and renumber the ones after it
    pub fn delete(&self, id: TransactionId) -> CentsResult<Transaction> {
        let mut transactions = self.load_existing()?;

        let index = position_of(&transactions, id)?;
        let removed = transactions.remove(index);
        renumber(&mut transactions);

        self.storage.transactions.save(&transactions)?;

        self.storage.log_delete(
            removed.id.to_string(),
            Some(removed.description.clone()),
            &removed,
        );

        Ok(removed)
    }

    /// Apply the supplied fields to one transaction
    ///
    /// Never changes the date, the id, or the order of the ledger.
    pub fn edit(&self, id: TransactionId, update: TransactionUpdate) -> CentsResult<EditOutcome> {
        if update.is_empty() {
            return Ok(EditOutcome::NoChanges);
        }

        let mut transactions = self.load_existing()?;
        let index = position_of(&transactions, id)?;

        let before = transactions[index].clone();
        let txn = &mut transactions[index];

        if let Some(description) = update.description {
            txn.description = description;
        }
        if let Some(amount) = update.amount {
            txn.amount = amount;
        }
        if let Some(kind) = update.kind {
            txn.kind = kind;
        }

        txn.validate()
            .map_err(|e| CentsError::Validation(e.to_string()))?;

        let after = txn.clone();
        self.storage.transactions.save(&transactions)?;

        self.storage.log_update(
            after.id.to_string(),
            Some(after.description.clone()),
            &before,
            &after,
            diff_summary(&before, &after),
        );

        Ok(EditOutcome::Updated(after))
    }

    /// Load the ledger without creating it; a missing file reads as empty
    fn load_existing(&self) -> CentsResult<Vec<Transaction>> {
        match self.storage.transactions.load() {
            Err(err) if err.is_storage_missing() => Ok(Vec::new()),
            other => other,
        }
    }
}

/// Reassign ids `1..=N` from position
pub fn renumber(transactions: &mut [Transaction]) {
    for (index, txn) in transactions.iter_mut().enumerate() {
        txn.id = TransactionId::from_position(index);
    }
}

/// Parse a user-supplied amount
pub fn parse_amount(input: &str) -> CentsResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        CentsError::Validation(format!(
            "{}. Use a plain number like '42.50' or '100'",
            e
        ))
    })?;
    validate_amount(amount)
}

/// Parse a user-supplied transaction type
pub fn parse_type(input: &str) -> CentsResult<TransactionType> {
    TransactionType::parse(input).ok_or_else(|| {
        CentsError::Validation(format!(
            "Unknown transaction type '{}'. Use 'expense' or 'income'",
            input
        ))
    })
}

/// Parse a user-supplied transaction id
pub fn parse_id(input: &str) -> CentsResult<TransactionId> {
    input
        .parse()
        .map_err(|e: crate::models::IdParseError| CentsError::Validation(e.to_string()))
}

fn normalize_description(description: &str) -> CentsResult<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(CentsError::Validation("Description cannot be empty".into()));
    }
    Ok(capitalize_first(trimmed))
}

fn validate_amount(amount: Money) -> CentsResult<Money> {
    if amount.is_negative() {
        return Err(CentsError::Validation(format!(
            "Amount cannot be negative ({}); use --type to record income or expense",
            amount
        )));
    }
    Ok(amount)
}

fn position_of(transactions: &[Transaction], id: TransactionId) -> CentsResult<usize> {
    transactions
        .iter()
        .position(|txn| txn.id == id)
        .ok_or_else(|| CentsError::transaction_not_found(id))
}

fn diff_summary(before: &Transaction, after: &Transaction) -> Option<String> {
    let mut changes = Vec::new();
    if before.description != after.description {
        changes.push(format!(
            "description: '{}' -> '{}'",
            before.description, after.description
        ));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.kind != after.kind {
        changes.push(format!("type: {} -> {}", before.kind, after.kind));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CentsPaths;
    use crate::storage::HEADER_LINE;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CentsPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn add(service: &LedgerService, description: &str, cents: i64, kind: TransactionType) {
        let input = NewTransaction::new(description, Money::from_cents(cents), kind).unwrap();
        service.add_dated(input, day()).unwrap();
    }

    fn ids(storage: &Storage) -> Vec<u32> {
        storage
            .transactions
            .load()
            .unwrap()
            .iter()
            .map(|t| t.id.get())
            .collect()
    }

    fn id(value: u32) -> TransactionId {
        TransactionId::new(value).unwrap()
    }

    #[test]
    fn test_add_on_empty_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let input =
            NewTransaction::new("Groceries", Money::from_cents(4250), TransactionType::default())
                .unwrap();
        let txn = service.add(input).unwrap();

        assert_eq!(txn.id.get(), 1);
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.amount, Money::from_cents(4250));
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.date, Local::now().date_naive());

        let stored = storage.transactions.load().unwrap();
        assert_eq!(stored, vec![txn]);
    }

    #[test]
    fn test_add_capitalizes_and_appends() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        add(&service, "rent", 120_000, TransactionType::Expense);
        add(&service, "salary", 300_000, TransactionType::Income);

        let stored = storage.transactions.load().unwrap();
        assert_eq!(stored[0].description, "Rent");
        assert_eq!(stored[1].description, "Salary");
        assert_eq!(ids(&storage), vec![1, 2]);
    }

    #[test]
    fn test_add_rejects_bad_input_before_touching_storage() {
        let (_temp_dir, storage) = create_test_storage();

        let err = NewTransaction::new("   ", Money::from_cents(100), TransactionType::Expense)
            .unwrap_err();
        assert!(err.is_validation());

        let err = NewTransaction::new("Coffee", Money::from_cents(-100), TransactionType::Expense)
            .unwrap_err();
        assert!(err.is_validation());

        assert!(!storage.transactions.exists());
    }

    #[test]
    fn test_delete_renumbers_preserving_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        for name in ["one", "two", "three", "four"] {
            add(&service, name, 100, TransactionType::Expense);
        }

        let removed = service.delete(id(2)).unwrap();
        assert_eq!(removed.description, "Two");

        let stored = storage.transactions.load().unwrap();
        let names: Vec<_> = stored.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["One", "Three", "Four"]);
        assert_eq!(ids(&storage), vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_last_transaction_leaves_header_only() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        add(&service, "Groceries", 4250, TransactionType::Expense);
        service.delete(id(1)).unwrap();

        let contents = fs::read_to_string(storage.transactions.path()).unwrap();
        assert_eq!(contents, format!("{}\n", HEADER_LINE));
    }

    #[test]
    fn test_delete_unknown_id_leaves_ledger_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        add(&service, "Groceries", 4250, TransactionType::Expense);
        let before = fs::read(storage.transactions.path()).unwrap();

        let err = service.delete(id(9)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fs::read(storage.transactions.path()).unwrap(), before);
    }

    #[test]
    fn test_delete_on_missing_ledger_does_not_create_it() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        assert!(service.delete(id(1)).unwrap_err().is_not_found());
        assert!(!storage.transactions.exists());
    }

    #[test]
    fn test_ids_stay_dense_across_mixed_operations() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        for i in 0..6 {
            add(&service, &format!("item {}", i), 100 + i, TransactionType::Expense);
        }
        service.delete(id(1)).unwrap();
        service.delete(id(5)).unwrap();
        add(&service, "late", 1, TransactionType::Income);
        service.delete(id(3)).unwrap();

        let got = ids(&storage);
        let expected: Vec<u32> = (1..=got.len() as u32).collect();
        assert_eq!(got, expected);
        assert_eq!(got.len(), 4);
    }

    #[test]
    fn test_edit_amount_only() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);
        add(&service, "Groceries", 4250, TransactionType::Expense);

        let update = TransactionUpdate::new()
            .amount(Money::from_cents(5000))
            .unwrap();
        let outcome = service.edit(id(1), update).unwrap();

        let EditOutcome::Updated(txn) = outcome else {
            panic!("expected an update");
        };
        assert_eq!(txn.amount, Money::from_cents(5000));
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.date, day());
        assert_eq!(storage.transactions.load().unwrap(), vec![txn]);
    }

    #[test]
    fn test_edit_type_keeps_id_and_description() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);
        add(&service, "Groceries", 4250, TransactionType::Expense);
        add(&service, "Bus", 275, TransactionType::Expense);

        let outcome = service
            .edit(id(1), TransactionUpdate::new().kind(TransactionType::Income))
            .unwrap();

        let EditOutcome::Updated(txn) = outcome else {
            panic!("expected an update");
        };
        assert_eq!(txn.id.get(), 1);
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.kind, TransactionType::Income);
        assert_eq!(ids(&storage), vec![1, 2]);
    }

    #[test]
    fn test_edit_description_is_capitalized() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);
        add(&service, "Groceries", 4250, TransactionType::Expense);

        let update = TransactionUpdate::new().description("weekly shop").unwrap();
        service.edit(id(1), update).unwrap();

        assert_eq!(
            storage.transactions.load().unwrap()[0].description,
            "Weekly shop"
        );
    }

    #[test]
    fn test_edit_without_fields_is_no_op() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        let outcome = service.edit(id(3), TransactionUpdate::new()).unwrap();
        assert_eq!(outcome, EditOutcome::NoChanges);
        assert!(!storage.transactions.exists());
    }

    #[test]
    fn test_edit_unknown_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);
        add(&service, "Groceries", 4250, TransactionType::Expense);

        let before = fs::read(storage.transactions.path()).unwrap();

        let err = service
            .edit(id(2), TransactionUpdate::new().kind(TransactionType::Income))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fs::read(storage.transactions.path()).unwrap(), before);
    }

    #[test]
    fn test_unwritable_audit_log_does_not_fail_saved_changes() {
        let (temp_dir, storage) = create_test_storage();
        fs::create_dir(temp_dir.path().join("audit.log")).unwrap();
        let service = LedgerService::new(&storage);

        let input =
            NewTransaction::new("Coffee", Money::from_cents(350), TransactionType::Expense)
                .unwrap();
        let txn = service.add_dated(input, day()).unwrap();
        assert_eq!(storage.transactions.load().unwrap(), vec![txn]);

        let outcome = service
            .edit(id(1), TransactionUpdate::new().kind(TransactionType::Income))
            .unwrap();
        assert!(matches!(outcome, EditOutcome::Updated(_)));

        service.delete(id(1)).unwrap();
        assert!(storage.transactions.load().unwrap().is_empty());
    }

    #[test]
    fn test_list_on_missing_store_initializes_it() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        assert_eq!(service.list(TransactionFilter::new()).unwrap(), Listing::Empty);
        let first = fs::read(storage.transactions.path()).unwrap();

        assert_eq!(service.list(TransactionFilter::new()).unwrap(), Listing::Empty);
        let second = fs::read(storage.transactions.path()).unwrap();

        assert_eq!(first, format!("{}\n", HEADER_LINE).into_bytes());
        assert_eq!(first, second);
    }

    #[test]
    fn test_list_filters_by_type() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        add(&service, "Salary", 300_000, TransactionType::Income);
        add(&service, "Rent", 120_000, TransactionType::Expense);
        add(&service, "Refund", 1_500, TransactionType::Income);
        add(&service, "Coffee", 350, TransactionType::Expense);
        add(&service, "Bonus", 50_000, TransactionType::Income);

        let Listing::Transactions(rows) = service
            .list(TransactionFilter::new().kind(TransactionType::Income))
            .unwrap()
        else {
            panic!("expected transactions");
        };

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|t| t.kind == TransactionType::Income));
        let ids: Vec<u32> = rows.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_list_filter_with_no_matches_is_not_empty_ledger() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);
        add(&service, "Rent", 120_000, TransactionType::Expense);

        let listing = service
            .list(TransactionFilter::new().kind(TransactionType::Income))
            .unwrap();
        assert_eq!(listing, Listing::Transactions(Vec::new()));
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = LedgerService::new(&storage);

        add(&service, "Groceries", 4250, TransactionType::Expense);
        service
            .edit(id(1), TransactionUpdate::new().kind(TransactionType::Income))
            .unwrap();
        service.delete(id(1)).unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("type: expense -> income")
        );
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_amount("42.50").unwrap(), Money::from_cents(4250));
        assert!(parse_amount("forty").unwrap_err().is_validation());
        assert!(parse_amount("-3").unwrap_err().is_validation());

        assert_eq!(parse_type("Income").unwrap(), TransactionType::Income);
        assert!(parse_type("transfer").unwrap_err().is_validation());

        assert_eq!(parse_id("4").unwrap().get(), 4);
        assert!(parse_id("0").unwrap_err().is_validation());
    }
}
