//! cents - a command line ledger for income and expenses
//!
//! Transactions are kept in a single comma-delimited file under the user's
//! home directory. Every command loads the whole ledger, acts on it in
//! memory and writes it back.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: the transaction model and its value types
//! - `storage`: the ledger file store with atomic writes
//! - `audit`: append-only log of every mutation
//! - `services`: ledger rules (id renumbering, partial edits, filtering)
//! - `display`: table rendering and amount coloring
//! - `cli`: clap subcommands and their handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use cents::config::CentsPaths;
//! use cents::models::{Money, TransactionType};
//! use cents::services::{LedgerService, NewTransaction};
//! use cents::storage::Storage;
//!
//! # fn main() -> cents::error::CentsResult<()> {
//! let storage = Storage::new(CentsPaths::new()?)?;
//! let ledger = LedgerService::new(&storage);
//! let input = NewTransaction::new("groceries", Money::from_cents(4250), TransactionType::Expense)?;
//! let txn = ledger.add(input)?;
//! assert_eq!(txn.description, "Groceries");
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::CentsError;
