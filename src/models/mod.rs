//! Core data models for cents
//!
//! The ledger has a single entity, the transaction, plus the value types it
//! is built from.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::{IdParseError, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{capitalize_first, Transaction, TransactionType, TransactionValidationError};
