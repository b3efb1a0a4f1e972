//! Transaction model
//!
//! A transaction is one line of the ledger: when it happened, what it was,
//! how much, and whether money came in or went out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
///
/// The sign of the amount is never used for direction; this field is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money going out (default)
    #[default]
    Expense,
    /// Money coming in
    Income,
}

impl TransactionType {
    /// Parse a transaction type, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Some(Self::Expense),
            "income" => Some(Self::Income),
            _ => None,
        }
    }

    /// Lowercase name as stored in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger transaction
///
/// Field order matches the column order of the ledger file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// 1-based position in the ledger
    pub id: TransactionId,

    /// Date the transaction was recorded
    pub date: NaiveDate,

    /// What the transaction was for, first character capitalized
    pub description: String,

    /// Amount, never negative
    pub amount: Money,

    /// Expense or income
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Create a new transaction, capitalizing the description
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        description: &str,
        amount: Money,
        kind: TransactionType,
    ) -> Self {
        Self {
            id,
            date,
            description: capitalize_first(description.trim()),
            amount,
            kind,
        }
    }

    /// Check the fields a user can supply
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} ({})",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.kind
        )
    }
}

/// Uppercase the first character and leave the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NegativeAmount(amount) => write!(
                f,
                "Amount cannot be negative ({}); use --type income or --type expense for direction",
                amount
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_capitalizes_description() {
        let txn = Transaction::new(
            TransactionId::from_position(0),
            date(),
            "  groceries at the market",
            Money::from_cents(4250),
            TransactionType::Expense,
        );

        assert_eq!(txn.description, "Groceries at the market");
        assert_eq!(txn.id.get(), 1);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("rent"), "Rent");
        assert_eq!(capitalize_first("eBay refund"), "EBay refund");
        assert_eq!(capitalize_first("écoles"), "Écoles");
        assert_eq!(capitalize_first("42 apples"), "42 apples");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_type_parse_is_case_insensitive() {
        assert_eq!(TransactionType::parse("INCOME"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("Expense "), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("transfer"), None);
        assert_eq!(TransactionType::Income.to_string(), "income");
    }

    #[test]
    fn test_validate() {
        let mut txn = Transaction::new(
            TransactionId::from_position(0),
            date(),
            "Salary",
            Money::from_cents(100_000),
            TransactionType::Income,
        );
        assert_eq!(txn.validate(), Ok(()));

        txn.amount = Money::from_cents(-1);
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(Money::from_cents(-1)))
        );

        txn.amount = Money::zero();
        txn.description = "   ".into();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            TransactionId::from_position(2),
            date(),
            "Coffee",
            Money::from_cents(350),
            TransactionType::Expense,
        );

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["date"], "2025-01-15");
        assert_eq!(json["amount"], "3.50");
        assert_eq!(json["type"], "expense");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }
}
